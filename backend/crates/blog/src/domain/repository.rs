//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer. Creation methods return the persisted entity
//! because storage assigns the id.

use kernel::id::{PostId, UserId};
use platform::password::HashedPassword;

use crate::domain::entity::{post::Post, user::User};
use crate::domain::value_object::email::Email;
use crate::error::BlogResult;

/// User repository trait
///
/// Storage enforces a uniqueness constraint on `email`; `create` for a
/// taken email fails with `DuplicateEmail` even if `exists_by_email`
/// reported false moments earlier.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user, returning it with the assigned id
    async fn create(&self, email: &Email, password_hash: &HashedPassword) -> BlogResult<User>;

    /// Find user by id
    async fn find_by_id(&self, user_id: UserId) -> BlogResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> BlogResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> BlogResult<bool>;
}

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Persist a new post owned by `user_id`, returning it with the assigned id
    async fn create(&self, user_id: UserId, title: &str, body: &str) -> BlogResult<Post>;

    /// Find post by id
    async fn find_by_id(&self, post_id: PostId) -> BlogResult<Option<Post>>;

    /// Fixed-size, offset-based page of posts in id order
    async fn find_page(&self, limit: i64, offset: i64) -> BlogResult<Vec<Post>>;

    /// Total number of posts
    async fn count(&self) -> BlogResult<i64>;

    /// Persist title/body changes of an existing post
    async fn update(&self, post: &Post) -> BlogResult<()>;

    /// Delete a post
    async fn delete(&self, post_id: PostId) -> BlogResult<()>;
}
