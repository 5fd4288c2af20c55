//! Delete Post Use Case
//!
//! Same resolution and ownership order as update. Returns the deleted
//! post so the caller can echo what was removed.

use std::sync::Arc;

use kernel::id::PostId;

use crate::domain::entity::post::Post;
use crate::domain::repository::{PostRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{BlogError, BlogResult};

/// Delete post use case
pub struct DeletePostUseCase<U, P>
where
    U: UserRepository,
    P: PostRepository,
{
    user_repo: Arc<U>,
    post_repo: Arc<P>,
}

impl<U, P> DeletePostUseCase<U, P>
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

    pub async fn execute(&self, author_email: &str, post_id: PostId) -> BlogResult<Post> {
        let email = Email::new(author_email).map_err(|_| BlogError::UserNotFound)?;
        let caller = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(BlogError::UserNotFound)?;

        let post = self
            .post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)?;

        if !post.is_owned_by(&caller) {
            return Err(BlogError::UserNotMatch);
        }

        self.post_repo.delete(post.post_id).await?;

        tracing::info!(post_id = %post.post_id, user_id = %caller.user_id, "Post deleted");

        Ok(post)
    }
}
