//! HTTP Handlers
//!
//! Every success response is wrapped in the uniform
//! `{"message": "SUCCESS", "result": ...}` envelope; errors render the
//! `ERROR` envelope through `BlogError`.

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use std::sync::Arc;

use kernel::id::PostId;
use kernel::response::ApiResponse;
use platform::token::TokenService;

use crate::application::config::BlogConfig;
use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, LoginInput,
    LoginUseCase, RegisterInput, RegisterUseCase, UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::entity::post::Post;
use crate::domain::repository::{PostRepository, UserRepository};
use crate::error::BlogResult;
use crate::presentation::dto::{
    PageQuery, PageResponse, PostCreateRequest, PostCreateResponse, PostDeleteResponse,
    PostGetResponse, PostUpdateRequest, PostUpdateResponse, UserCreateRequest, UserCreateResponse,
    UserLoginRequest, UserLoginResponse,
};
use crate::presentation::middleware::AuthenticatedUser;

/// Shared state for blog handlers
#[derive(Clone)]
pub struct BlogAppState<R>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub tokens: Arc<TokenService>,
    pub config: Arc<BlogConfig>,
}

// ============================================================================
// Users
// ============================================================================

/// POST /api/v1/users
pub async fn create_user<R>(
    State(state): State<BlogAppState<R>>,
    Json(req): Json<UserCreateRequest>,
) -> BlogResult<Json<ApiResponse<UserCreateResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    req.validate()?;

    let use_case = RegisterUseCase::new(state.repo.clone());

    let output = use_case
        .execute(RegisterInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::success(UserCreateResponse {
        user_id: output.user_id.as_i64(),
        email: output.email,
    })))
}

/// POST /api/v1/users/login
pub async fn login_user<R>(
    State(state): State<BlogAppState<R>>,
    Json(req): Json<UserLoginRequest>,
) -> BlogResult<Json<ApiResponse<UserLoginResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    req.validate()?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::success(UserLoginResponse {
        user_id: output.user_id.as_i64(),
        jwt: output.jwt,
    })))
}

// ============================================================================
// Posts
// ============================================================================

/// POST /api/v1/posts (authenticated)
pub async fn create_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(req): Json<PostCreateRequest>,
) -> BlogResult<Json<ApiResponse<PostCreateResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone(), state.repo.clone());

    let post = use_case
        .execute(CreatePostInput {
            author_email: user.email,
            title: req.title,
            body: req.body,
        })
        .await?;

    Ok(Json(ApiResponse::success(PostCreateResponse {
        user_id: post.user_id.as_i64(),
        post_id: post.post_id.as_i64(),
        title: post.title,
        body: post.body,
    })))
}

/// GET /api/v1/posts
pub async fn list_posts<R>(
    State(state): State<BlogAppState<R>>,
    Query(query): Query<PageQuery>,
) -> BlogResult<Json<ApiResponse<PageResponse<PostGetResponse>>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone(), state.config.clone());

    let page = query.page.unwrap_or(0);
    let size = query.size.unwrap_or(state.config.default_page_size);

    let result = use_case.page(page, size).await?;

    Ok(Json(ApiResponse::success(PageResponse {
        content: result.content.into_iter().map(post_projection).collect(),
        page: result.page,
        size: result.size,
        total_elements: result.total_elements,
        total_pages: result.total_pages,
    })))
}

/// GET /api/v1/posts/{post_id}
pub async fn get_post<R>(
    State(state): State<BlogAppState<R>>,
    Path(post_id): Path<i64>,
) -> BlogResult<Json<ApiResponse<PostGetResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone(), state.config.clone());

    let post = use_case.get(PostId::from_i64(post_id)).await?;

    Ok(Json(ApiResponse::success(post_projection(post))))
}

/// PUT /api/v1/posts/{post_id} (authenticated, author only)
pub async fn update_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(post_id): Path<i64>,
    Json(req): Json<PostUpdateRequest>,
) -> BlogResult<Json<ApiResponse<PostUpdateResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone(), state.repo.clone());

    let post = use_case
        .execute(UpdatePostInput {
            author_email: user.email,
            post_id: PostId::from_i64(post_id),
            title: req.title,
            body: req.body,
        })
        .await?;

    Ok(Json(ApiResponse::success(PostUpdateResponse {
        post_id: post.post_id.as_i64(),
        title: post.title,
        body: post.body,
    })))
}

/// DELETE /api/v1/posts/{post_id} (authenticated, author only)
pub async fn delete_post<R>(
    State(state): State<BlogAppState<R>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(post_id): Path<i64>,
) -> BlogResult<Json<ApiResponse<PostDeleteResponse>>>
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone(), state.repo.clone());

    let post = use_case
        .execute(&user.email, PostId::from_i64(post_id))
        .await?;

    Ok(Json(ApiResponse::success(PostDeleteResponse {
        post_id: post.post_id.as_i64(),
        title: post.title,
        body: post.body,
    })))
}

fn post_projection(post: Post) -> PostGetResponse {
    PostGetResponse {
        post_id: post.post_id.as_i64(),
        author: post.author_email.to_string(),
        title: post.title,
        body: post.body,
    }
}
