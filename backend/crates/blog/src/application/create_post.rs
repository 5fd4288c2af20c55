//! Create Post Use Case

use std::sync::Arc;

use crate::domain::entity::post::Post;
use crate::domain::repository::{PostRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{BlogError, BlogResult};

/// Create post input
pub struct CreatePostInput {
    /// Email taken from the verified bearer token, not the request body
    pub author_email: String,
    pub title: String,
    pub body: String,
}

/// Create post use case
pub struct CreatePostUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    user_repo: Arc<U>,
    post_repo: Arc<P>,
}

impl<U, P> CreatePostUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    pub fn new(user_repo: Arc<U>, post_repo: Arc<P>) -> Self {
        Self {
            user_repo,
            post_repo,
        }
    }

    pub async fn execute(&self, input: CreatePostInput) -> BlogResult<Post> {
        // A token can outlive its account, so the author is re-resolved
        // on every call rather than trusted from the claim alone.
        let email = Email::new(&input.author_email).map_err(|_| BlogError::UserNotFound)?;
        let author = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(BlogError::UserNotFound)?;

        let post = self
            .post_repo
            .create(author.user_id, &input.title, &input.body)
            .await?;

        tracing::info!(post_id = %post.post_id, user_id = %author.user_id, "Post created");

        Ok(post)
    }
}
