//! Blog Error Types
//!
//! This module provides blog-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. Every variant maps
//! to exactly one HTTP status and is rendered as the uniform response
//! envelope.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::response::ApiResponse;
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Email already registered
    #[error("Email already exists.")]
    DuplicateEmail,

    /// No user for the given email
    #[error("User not found.")]
    UserNotFound,

    /// Password does not match the stored hash
    #[error("Wrong password.")]
    WrongPassword,

    /// No post for the given id
    #[error("Post not found.")]
    PostNotFound,

    /// Acting identity does not own the post
    #[error("User does not match.")]
    UserNotMatch,

    /// Bearer token missing, malformed, forged, or expired
    #[error("Invalid token.")]
    InvalidToken,

    /// Request validation failure (carries the first violated field's message)
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BlogError::DuplicateEmail => StatusCode::CONFLICT,
            BlogError::UserNotFound | BlogError::PostNotFound => StatusCode::NOT_FOUND,
            BlogError::WrongPassword | BlogError::UserNotMatch | BlogError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            BlogError::Validation(_) => StatusCode::BAD_REQUEST,
            BlogError::Database(_) | BlogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::DuplicateEmail => ErrorKind::Conflict,
            BlogError::UserNotFound | BlogError::PostNotFound => ErrorKind::NotFound,
            BlogError::WrongPassword | BlogError::UserNotMatch | BlogError::InvalidToken => {
                ErrorKind::Unauthorized
            }
            BlogError::Validation(_) => ErrorKind::BadRequest,
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    /// Message safe to surface to the caller
    ///
    /// Server-side errors are not echoed back in detail.
    fn public_message(&self) -> String {
        match self {
            BlogError::Database(_) | BlogError::Internal(_) => {
                "Internal server error.".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::WrongPassword => {
                tracing::warn!("Invalid login attempt");
            }
            BlogError::UserNotMatch => {
                tracing::warn!("Post mutation attempted by non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        (
            self.status_code(),
            Json(ApiResponse::error(self.public_message())),
        )
            .into_response()
    }
}

impl From<AppError> for BlogError {
    fn from(err: AppError) -> Self {
        BlogError::Internal(err.to_string())
    }
}

impl From<platform::token::TokenError> for BlogError {
    fn from(_: platform::token::TokenError) -> Self {
        // The caller never learns why a token was rejected
        BlogError::InvalidToken
    }
}

impl From<platform::password::PasswordPolicyError> for BlogError {
    fn from(err: platform::password::PasswordPolicyError) -> Self {
        BlogError::Validation(err.to_string())
    }
}

impl From<platform::password::PasswordHashError> for BlogError {
    fn from(err: platform::password::PasswordHashError) -> Self {
        BlogError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(BlogError::DuplicateEmail.status_code(), StatusCode::CONFLICT);
        assert_eq!(BlogError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BlogError::WrongPassword.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(BlogError::PostNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            BlogError::UserNotMatch.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BlogError::InvalidToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BlogError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_server_errors_are_not_echoed() {
        let err = BlogError::Internal("pool handle leaked".into());
        assert_eq!(err.public_message(), "Internal server error.");

        let err = BlogError::WrongPassword;
        assert_eq!(err.public_message(), "Wrong password.");
    }

    #[test]
    fn test_app_error_conversion_keeps_kind_and_public_message() {
        let app_err = BlogError::DuplicateEmail.to_app_error();
        assert_eq!(app_err.kind(), ErrorKind::Conflict);
        assert_eq!(app_err.message(), "Email already exists.");

        let app_err = BlogError::Internal("secret detail".into()).to_app_error();
        assert_eq!(app_err.kind(), ErrorKind::InternalServerError);
        assert_eq!(app_err.message(), "Internal server error.");
    }

    #[test]
    fn test_token_errors_collapse_to_invalid_token() {
        let err: BlogError = platform::token::TokenError::Expired.into();
        assert!(matches!(err, BlogError::InvalidToken));

        let err: BlogError = platform::token::TokenError::Malformed.into();
        assert!(matches!(err, BlogError::InvalidToken));
    }
}
