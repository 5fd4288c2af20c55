//! Post Entity
//!
//! A post is owned by exactly one user; the owner reference is
//! immutable after creation. Title and body change only through
//! [`Post::update`], which callers reach strictly after an ownership
//! check.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;

/// Post entity
#[derive(Debug, Clone)]
pub struct Post {
    /// Storage-assigned identifier
    pub post_id: PostId,
    /// Owning user (immutable after creation)
    pub user_id: UserId,
    /// Owner's email, exposed as `author` in read projections
    pub author_email: Email,
    /// Title (mutable by owner only)
    pub title: String,
    /// Body (mutable by owner only)
    pub body: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Check whether `user` owns this post
    pub fn is_owned_by(&self, user: &User) -> bool {
        self.user_id == user.user_id
    }

    /// Replace title and body
    ///
    /// Precondition: the caller has verified ownership.
    /// Postcondition: only `title`, `body`, and `updated_at` change.
    pub fn update(&mut self, title: String, body: String) {
        self.title = title;
        self.body = body;
        self.updated_at = Utc::now();
    }
}
