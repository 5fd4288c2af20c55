//! User Entity
//!
//! Identity record. The id is assigned by storage on creation and never
//! changes; this core never updates or deletes users.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;

/// User entity
///
/// The password hash is opaque to everything outside verification and
/// is never included in any outward projection.
#[derive(Debug, Clone)]
pub struct User {
    /// Storage-assigned identifier (immutable)
    pub user_id: UserId,
    /// Unique email, used as the authentication subject
    pub email: Email,
    /// Argon2id PHC hash
    pub password_hash: HashedPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}
