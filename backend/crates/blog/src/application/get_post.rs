//! Get Post Use Case
//!
//! Read operations: single post lookup and offset-based pagination.
//! Both are public, no authentication involved.

use std::sync::Arc;

use kernel::id::PostId;

use crate::application::config::BlogConfig;
use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};

/// One page of posts with pagination metadata
pub struct PostPage {
    pub content: Vec<Post>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

/// Get post use case
pub struct GetPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
    config: Arc<BlogConfig>,
}

impl<P> GetPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>, config: Arc<BlogConfig>) -> Self {
        Self { post_repo, config }
    }

    pub async fn get(&self, post_id: PostId) -> BlogResult<Post> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(BlogError::PostNotFound)
    }

    /// Zero-based page of posts in ascending id order. Out-of-range
    /// values are clamped, an empty page past the end is not an error.
    pub async fn page(&self, page: i64, size: i64) -> BlogResult<PostPage> {
        let size = size.clamp(1, self.config.max_page_size);
        let page = page.max(0);

        let total_elements = self.post_repo.count().await?;
        // page is caller-controlled; a saturated offset lands past the
        // end and yields an empty page instead of overflowing.
        let offset = page.checked_mul(size).unwrap_or(i64::MAX);
        let content = self.post_repo.find_page(size, offset).await?;

        let total_pages = if total_elements == 0 {
            0
        } else {
            (total_elements + size - 1) / size
        };

        Ok(PostPage {
            content,
            page,
            size,
            total_elements,
            total_pages,
        })
    }
}
