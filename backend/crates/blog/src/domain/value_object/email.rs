//! Email Value Object
//!
//! The email doubles as the authentication subject: it is unique per
//! user and embedded as the `sub` claim of issued tokens.

use std::fmt;

use thiserror::Error;

/// Email validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// Empty after trimming
    #[error("Email cannot be empty.")]
    Empty,

    /// Missing the '@' separator
    #[error("Email must contain '@'.")]
    MissingAtSign,
}

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a validated email
    ///
    /// Surrounding whitespace is trimmed. The only structural rule is
    /// the presence of '@'; anything stricter belongs to the mail
    /// system, not this API.
    pub fn new(raw: &str) -> Result<Self, EmailError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(EmailError::Empty);
        }

        if !trimmed.contains('@') {
            return Err(EmailError::MissingAtSign);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
