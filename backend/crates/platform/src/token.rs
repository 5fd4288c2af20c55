//! Bearer Token Issuance and Validation
//!
//! Stateless authentication tokens (JWT, HS256) carrying a subject
//! claim. The signing secret is process-wide configuration: it is loaded
//! once at startup, held by a [`TokenService`] instance, and never
//! rotated at runtime. The TTL is fixed per service instance so a leaked
//! token's exposure window is bounded.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registered claims carried by every issued token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject (the authenticated identity, here the user's email)
    pub sub: String,
    /// Issued at (unix timestamp, seconds)
    pub iat: i64,
    /// Expiration time (unix timestamp, seconds)
    pub exp: i64,
}

impl TokenClaims {
    /// Create claims valid for `lifetime_secs` from now
    ///
    /// A non-positive lifetime produces an already-expired claim set,
    /// which is useful in tests.
    pub fn new(subject: impl Into<String>, lifetime_secs: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: subject.into(),
            iat: now,
            exp: now + lifetime_secs,
        }
    }
}

/// Token validation/issuance errors
///
/// The variants are deliberately distinguishable so callers can tell a
/// structurally broken token from a forged or stale one.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token could not be parsed as a JWT
    #[error("Malformed token")]
    Malformed,

    /// Signature does not match the configured secret
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token expiry is in the past
    #[error("Token expired")]
    Expired,

    /// Signing failed (key/serialization problem)
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Token service holding the process-wide signing secret
///
/// Constructed once at startup and passed to collaborators; distinct
/// instances with distinct secrets can coexist in tests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    /// Create a service using HMAC-SHA256 keyed by `secret`
    pub fn new(secret: &[u8], ttl: std::time::Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Exact TTL semantics, no clock-skew grace
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs: ttl.as_secs() as i64,
        }
    }

    /// Configured token lifetime in seconds
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issue a compact signed token for `subject` with the fixed TTL
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.encode(&TokenClaims::new(subject, self.ttl_secs))
    }

    /// Encode an explicit claim set (tests use this for expired tokens)
    pub fn encode(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature and expiry, returning the subject claim
    pub fn validate(&self, token: &str) -> Result<String, TokenError> {
        self.decode(token).map(|claims| claims.sub)
    }

    /// Verify signature and expiry, returning the full claim set
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })?;

        Ok(data.claims)
    }
}
