//! Auth Middleware
//!
//! Bearer-token guard for protected routes. The guard fails closed: a
//! request that does not present a valid token never reaches the inner
//! handler, and a server error escaping a guarded handler is replaced
//! by the same fixed unauthorized response.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::token::TokenService;

use crate::error::BlogError;

/// Middleware state
#[derive(Clone)]
pub struct AuthState {
    pub tokens: Arc<TokenService>,
}

impl AuthState {
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

/// Identity established by the guard, stored in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub email: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Middleware that requires a valid bearer token
pub async fn require_authentication(
    State(state): State<AuthState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = match bearer_token(req.headers()) {
        Some(token) => token,
        None => return BlogError::InvalidToken.into_response(),
    };

    let email = match state.tokens.validate(token) {
        Ok(subject) => subject,
        Err(e) => {
            tracing::debug!(error = %e, "Bearer token rejected");
            return BlogError::InvalidToken.into_response();
        }
    };

    req.extensions_mut().insert(AuthenticatedUser { email });

    let response = next.run(req).await;

    // Fail closed inside the guarded scope: server errors must not leak
    // their own bodies past the guard.
    if response.status().is_server_error() {
        tracing::error!(status = %response.status(), "Guarded route failed, masking response");
        return BlogError::InvalidToken.into_response();
    }

    response
}
