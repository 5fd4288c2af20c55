//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;

use kernel::id::{PostId, UserId};

use crate::domain::entity::{post::Post, user::User};
use crate::domain::repository::{PostRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{BlogError, BlogResult};

const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed blog repository
#[derive(Clone)]
pub struct PgBlogRepository {
    pool: PgPool,
}

impl PgBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load a post joined with its author's email. Both repository
    /// traits expose a `find_by_id`, so internal callers go through
    /// this helper to stay unambiguous.
    async fn fetch_post(&self, post_id: PostId) -> BlogResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                p.post_id,
                p.user_id,
                u.email AS author_email,
                p.title,
                p.body,
                p.created_at,
                p.updated_at
            FROM posts p
            JOIN users u ON u.user_id = p.user_id
            WHERE p.post_id = $1
            "#,
        )
        .bind(post_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_post()).transpose()
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgBlogRepository {
    async fn create(&self, email: &Email, password_hash: &HashedPassword) -> BlogResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (email, password_hash)
            VALUES ($1, $2)
            RETURNING
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            "#,
        )
        .bind(email.as_str())
        .bind(password_hash.as_phc_string())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // The unique index on email is the authoritative duplicate
            // guard; the use-case pre-check can lose a race.
            if let sqlx::Error::Database(db) = &e {
                if db.code().as_deref() == Some(UNIQUE_VIOLATION) {
                    return BlogError::DuplicateEmail;
                }
            }
            BlogError::Database(e)
        })?;

        row.into_user()
    }

    async fn find_by_id(&self, user_id: UserId) -> BlogResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> BlogResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_email(&self, email: &Email) -> BlogResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgBlogRepository {
    async fn create(&self, user_id: UserId, title: &str, body: &str) -> BlogResult<Post> {
        let post_id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO posts (user_id, title, body)
            VALUES ($1, $2, $3)
            RETURNING post_id
            "#,
        )
        .bind(user_id.as_i64())
        .bind(title)
        .bind(body)
        .fetch_one(&self.pool)
        .await?;

        self.fetch_post(PostId::from_i64(post_id))
            .await?
            .ok_or_else(|| BlogError::Internal("Inserted post not found".to_string()))
    }

    async fn find_by_id(&self, post_id: PostId) -> BlogResult<Option<Post>> {
        self.fetch_post(post_id).await
    }

    async fn find_page(&self, limit: i64, offset: i64) -> BlogResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                p.post_id,
                p.user_id,
                u.email AS author_email,
                p.title,
                p.body,
                p.created_at,
                p.updated_at
            FROM posts p
            JOIN users u ON u.user_id = p.user_id
            ORDER BY p.post_id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_post()).collect()
    }

    async fn count(&self) -> BlogResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn update(&self, post: &Post) -> BlogResult<()> {
        sqlx::query(
            r#"
            UPDATE posts SET
                title = $2,
                body = $3,
                updated_at = $4
            WHERE post_id = $1
            "#,
        )
        .bind(post.post_id.as_i64())
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, post_id: PostId) -> BlogResult<()> {
        sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: i64,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> BlogResult<User> {
        let email = Email::new(&self.email)
            .map_err(|e| BlogError::Internal(format!("Invalid stored email: {}", e)))?;

        let password_hash = HashedPassword::from_phc_string(self.password_hash)
            .map_err(|e| BlogError::Internal(format!("Invalid stored password hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_i64(self.user_id),
            email,
            password_hash,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: i64,
    user_id: i64,
    author_email: String,
    title: String,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> BlogResult<Post> {
        let author_email = Email::new(&self.author_email)
            .map_err(|e| BlogError::Internal(format!("Invalid stored email: {}", e)))?;

        Ok(Post {
            post_id: PostId::from_i64(self.post_id),
            user_id: UserId::from_i64(self.user_id),
            author_email,
            title: self.title,
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
