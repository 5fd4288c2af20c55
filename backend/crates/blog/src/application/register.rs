//! Register Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{BlogError, BlogResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register output (public projection only, never the hash)
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: UserId,
    pub email: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> BlogResult<RegisterOutput> {
        let email =
            Email::new(&input.email).map_err(|e| BlogError::Validation(e.to_string()))?;

        // Uniqueness check precedes hashing: a duplicate must not pay
        // the hashing cost. This check-then-insert pair is not atomic;
        // the storage unique constraint is the authoritative guard and
        // a losing race surfaces as DuplicateEmail from `create`.
        if self.user_repo.exists_by_email(&email).await? {
            return Err(BlogError::DuplicateEmail);
        }

        let password = ClearTextPassword::new(input.password)?;
        let password_hash = password.hash()?;

        let user = self.user_repo.create(&email, &password_hash).await?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id,
            email: user.email.to_string(),
        })
    }
}
