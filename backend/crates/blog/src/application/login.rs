//! Login Use Case
//!
//! Authenticates a user and issues a bearer token. An unknown email and
//! a wrong password are distinct outcomes, surfaced to the caller as
//! different error kinds.

use std::sync::Arc;

use kernel::id::UserId;
use platform::password::ClearTextPassword;
use platform::token::TokenService;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{BlogError, BlogResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user_id: UserId,
    pub jwt: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenService>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenService>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, input: LoginInput) -> BlogResult<LoginOutput> {
        let email =
            Email::new(&input.email).map_err(|e| BlogError::Validation(e.to_string()))?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(BlogError::UserNotFound)?;

        let password = ClearTextPassword::new(input.password)?;

        if !user.password_hash.verify(&password) {
            return Err(BlogError::WrongPassword);
        }

        let jwt = self
            .tokens
            .issue(user.email.as_str())
            .map_err(|e| BlogError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            user_id: user.user_id,
            jwt,
        })
    }
}
