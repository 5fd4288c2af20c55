//! Update Post Use Case
//!
//! Only the post's author may change it. The ownership check runs after
//! both the author and the post are resolved and before any mutation.

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entity::post::Post;
use crate::domain::repository::{PostRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{BlogError, BlogResult};

/// Update post input
pub struct UpdatePostInput {
    pub author_email: String,
    pub post_id: PostId,
    pub title: String,
    pub body: String,
}

/// Update post use case
pub struct UpdatePostUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    user_repo: Arc<U>,
    post_repo: Arc<P>,
}

impl<U, P> UpdatePostUseCase<U, P>
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

    pub async fn execute(&self, input: UpdatePostInput) -> BlogResult<Post> {
        let email = Email::new(&input.author_email).map_err(|_| BlogError::UserNotFound)?;
        let caller = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(BlogError::UserNotFound)?;

        let mut post = self
            .post_repo
            .find_by_id(input.post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if !post.is_owned_by(&caller) {
            return Err(BlogError::UserNotMatch);
        }

        post.update(input.title, input.body);
        self.post_repo.update(&post).await?;

        tracing::info!(post_id = %post.post_id, user_id = %caller.user_id, "Post updated");

        Ok(post)
    }
}
