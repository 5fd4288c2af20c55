//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::error::{BlogError, BlogResult};

pub const EMAIL_VALIDATION_MESSAGE: &str = "Email must contain '@'.";
pub const PASSWORD_VALIDATION_MESSAGE: &str = "Password must be at least 8 characters.";

const MIN_PASSWORD_CHARS: usize = 8;

/// Field-level validation shared by the credential-carrying requests.
/// Email is checked before password, so a request failing both reports
/// the email message.
fn validate_credentials(email: &str, password: &str) -> BlogResult<()> {
    if !email.contains('@') {
        return Err(BlogError::Validation(EMAIL_VALIDATION_MESSAGE.to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(BlogError::Validation(PASSWORD_VALIDATION_MESSAGE.to_string()));
    }
    Ok(())
}

// ============================================================================
// User Create
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    pub email: String,
    pub password: String,
}

impl UserCreateRequest {
    pub fn validate(&self) -> BlogResult<()> {
        validate_credentials(&self.email, &self.password)
    }
}

/// User registration response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateResponse {
    pub user_id: i64,
    pub email: String,
}

// ============================================================================
// User Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginRequest {
    pub email: String,
    pub password: String,
}

impl UserLoginRequest {
    pub fn validate(&self) -> BlogResult<()> {
        validate_credentials(&self.email, &self.password)
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoginResponse {
    pub user_id: i64,
    pub jwt: String,
}

// ============================================================================
// Post Create
// ============================================================================

/// Post creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateRequest {
    pub title: String,
    pub body: String,
}

/// Post creation response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreateResponse {
    pub user_id: i64,
    pub post_id: i64,
    pub title: String,
    pub body: String,
}

// ============================================================================
// Post Read
// ============================================================================

/// Single post projection, also the page element shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostGetResponse {
    pub post_id: i64,
    /// Author's email
    pub author: String,
    pub title: String,
    pub body: String,
}

/// Pagination query parameters (zero-based page)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// One page of results with pagination metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
}

// ============================================================================
// Post Update / Delete
// ============================================================================

/// Post update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdateRequest {
    pub title: String,
    pub body: String,
}

/// Post update response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdateResponse {
    pub post_id: i64,
    pub title: String,
    pub body: String,
}

/// Post delete response, echoes the removed post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDeleteResponse {
    pub post_id: i64,
    pub title: String,
    pub body: String,
}
