//! Blog Crate Tests
//!
//! Use-case tests run against an in-memory repository; router tests
//! drive the real axum routers with `tower::ServiceExt::oneshot`.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use chrono::Utc;
use tower::ServiceExt;

use kernel::id::{PostId, UserId};
use platform::password::HashedPassword;
use platform::token::{TokenClaims, TokenService};

use crate::application::config::BlogConfig;
use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, LoginInput,
    LoginUseCase, RegisterInput, RegisterOutput, RegisterUseCase, UpdatePostInput,
    UpdatePostUseCase,
};
use crate::domain::entity::{post::Post, user::User};
use crate::domain::repository::{PostRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{BlogError, BlogResult};
use crate::presentation::handlers::BlogAppState;
use crate::presentation::middleware::{AuthState, require_authentication};
use crate::presentation::router::{post_router, user_router};

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Default)]
struct MemoryState {
    users: Vec<User>,
    posts: Vec<Post>,
    next_user_id: i64,
    next_post_id: i64,
}

#[derive(Clone, Default)]
struct MemoryRepository {
    state: Arc<Mutex<MemoryState>>,
}

impl UserRepository for MemoryRepository {
    async fn create(&self, email: &Email, password_hash: &HashedPassword) -> BlogResult<User> {
        let mut state = self.state.lock().unwrap();

        if state.users.iter().any(|u| u.email.as_str() == email.as_str()) {
            return Err(BlogError::DuplicateEmail);
        }

        state.next_user_id += 1;
        let now = Utc::now();
        let user = User {
            user_id: UserId::from_i64(state.next_user_id),
            email: email.clone(),
            password_hash: password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: UserId) -> BlogResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.user_id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> BlogResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|u| u.email.as_str() == email.as_str())
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> BlogResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().any(|u| u.email.as_str() == email.as_str()))
    }
}

impl PostRepository for MemoryRepository {
    async fn create(&self, user_id: UserId, title: &str, body: &str) -> BlogResult<Post> {
        let mut state = self.state.lock().unwrap();

        let author_email = state
            .users
            .iter()
            .find(|u| u.user_id == user_id)
            .map(|u| u.email.clone())
            .ok_or(BlogError::UserNotFound)?;

        state.next_post_id += 1;
        let now = Utc::now();
        let post = Post {
            post_id: PostId::from_i64(state.next_post_id),
            user_id,
            author_email,
            title: title.to_string(),
            body: body.to_string(),
            created_at: now,
            updated_at: now,
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, post_id: PostId) -> BlogResult<Option<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.iter().find(|p| p.post_id == post_id).cloned())
    }

    async fn find_page(&self, limit: i64, offset: i64) -> BlogResult<Vec<Post>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> BlogResult<i64> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.len() as i64)
    }

    async fn update(&self, post: &Post) -> BlogResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(stored) = state.posts.iter_mut().find(|p| p.post_id == post.post_id) {
            stored.title = post.title.clone();
            stored.body = post.body.clone();
            stored.updated_at = post.updated_at;
        }
        Ok(())
    }

    async fn delete(&self, post_id: PostId) -> BlogResult<()> {
        let mut state = self.state.lock().unwrap();
        state.posts.retain(|p| p.post_id != post_id);
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn test_tokens() -> Arc<TokenService> {
    Arc::new(TokenService::new(
        b"test-signing-secret-for-blog-tests",
        Duration::from_secs(3600),
    ))
}

fn test_state() -> BlogAppState<MemoryRepository> {
    BlogAppState {
        repo: Arc::new(MemoryRepository::default()),
        tokens: test_tokens(),
        config: Arc::new(BlogConfig::default()),
    }
}

fn app(state: BlogAppState<MemoryRepository>) -> Router {
    Router::new()
        .nest("/api/v1/users", user_router(state.clone()))
        .nest("/api/v1/posts", post_router(state))
}

async fn register(
    state: &BlogAppState<MemoryRepository>,
    email: &str,
    password: &str,
) -> RegisterOutput {
    RegisterUseCase::new(state.repo.clone())
        .execute(RegisterInput {
            email: email.to_string(),
            password: password.to_string(),
        })
        .await
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_json_request(
    method: &str,
    uri: &str,
    jwt: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", jwt))
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Use case tests
// ============================================================================

#[tokio::test]
async fn test_register_assigns_sequential_ids() {
    let state = test_state();

    let first = register(&state, "a@b.com", "password").await;
    let second = register(&state, "c@d.com", "password").await;

    assert_eq!(first.user_id.as_i64(), 1);
    assert_eq!(first.email, "a@b.com");
    assert_eq!(second.user_id.as_i64(), 2);
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let state = test_state();
    register(&state, "a@b.com", "password").await;

    let err = RegisterUseCase::new(state.repo.clone())
        .execute(RegisterInput {
            email: "a@b.com".to_string(),
            password: "different-password".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, BlogError::DuplicateEmail));
}

#[tokio::test]
async fn test_duplicate_check_precedes_password_hashing() {
    let state = test_state();
    register(&state, "a@b.com", "password").await;

    // The password is policy-violating (too short); a duplicate email
    // must still fail with DuplicateEmail, proving the uniqueness check
    // runs before the password is validated or hashed.
    let err = RegisterUseCase::new(state.repo.clone())
        .execute(RegisterInput {
            email: "a@b.com".to_string(),
            password: "short".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, BlogError::DuplicateEmail));
}

#[tokio::test]
async fn test_register_rejects_email_without_at_sign() {
    let state = test_state();

    let err = RegisterUseCase::new(state.repo.clone())
        .execute(RegisterInput {
            email: "not-an-email".to_string(),
            password: "password".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, BlogError::Validation(_)));
}

#[tokio::test]
async fn test_login_issues_token_for_correct_credentials() {
    let state = test_state();
    let registered = register(&state, "a@b.com", "password").await;

    let output = LoginUseCase::new(state.repo.clone(), state.tokens.clone())
        .execute(LoginInput {
            email: "a@b.com".to_string(),
            password: "password".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(output.user_id, registered.user_id);
    let subject = state.tokens.validate(&output.jwt).unwrap();
    assert_eq!(subject, "a@b.com");
}

#[tokio::test]
async fn test_login_distinguishes_unknown_user_from_wrong_password() {
    let state = test_state();
    register(&state, "a@b.com", "password").await;

    let use_case = LoginUseCase::new(state.repo.clone(), state.tokens.clone());

    let err = use_case
        .execute(LoginInput {
            email: "nobody@b.com".to_string(),
            password: "password".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::UserNotFound));

    let err = use_case
        .execute(LoginInput {
            email: "a@b.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::WrongPassword));
}

#[tokio::test]
async fn test_create_post_resolves_author_from_email() {
    let state = test_state();
    let author = register(&state, "a@b.com", "password").await;

    let post = CreatePostUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(CreatePostInput {
            author_email: "a@b.com".to_string(),
            title: "First".to_string(),
            body: "Hello".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(post.post_id.as_i64(), 1);
    assert_eq!(post.user_id, author.user_id);
    assert_eq!(post.author_email.as_str(), "a@b.com");
}

#[tokio::test]
async fn test_create_post_for_unknown_author_fails() {
    let state = test_state();

    let err = CreatePostUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(CreatePostInput {
            author_email: "ghost@b.com".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, BlogError::UserNotFound));
}

#[tokio::test]
async fn test_page_metadata_and_clamping() {
    let state = test_state();
    register(&state, "a@b.com", "password").await;

    let create = CreatePostUseCase::new(state.repo.clone(), state.repo.clone());
    for i in 0..5 {
        create
            .execute(CreatePostInput {
                author_email: "a@b.com".to_string(),
                title: format!("post {}", i),
                body: "body".to_string(),
            })
            .await
            .unwrap();
    }

    let use_case = GetPostUseCase::new(state.repo.clone(), state.config.clone());

    let page = use_case.page(0, 2).await.unwrap();
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.content[0].title, "post 0");

    // Last partial page
    let page = use_case.page(2, 2).await.unwrap();
    assert_eq!(page.content.len(), 1);

    // Past the end is empty, not an error
    let page = use_case.page(10, 2).await.unwrap();
    assert!(page.content.is_empty());

    // Nonsense sizes are clamped
    let page = use_case.page(-1, 0).await.unwrap();
    assert_eq!(page.page, 0);
    assert_eq!(page.size, 1);
}

#[tokio::test]
async fn test_huge_page_number_yields_empty_page() {
    let state = test_state();
    register(&state, "a@b.com", "password").await;

    CreatePostUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(CreatePostInput {
            author_email: "a@b.com".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
        })
        .await
        .unwrap();

    // The page number is caller-controlled; page * size must not
    // overflow the offset computation.
    let page = GetPostUseCase::new(state.repo.clone(), state.config.clone())
        .page(i64::MAX, 100)
        .await
        .unwrap();

    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 1);
}

#[tokio::test]
async fn test_page_of_empty_store() {
    let state = test_state();

    let page = GetPostUseCase::new(state.repo.clone(), state.config.clone())
        .page(0, 20)
        .await
        .unwrap();

    assert!(page.content.is_empty());
    assert_eq!(page.total_elements, 0);
    assert_eq!(page.total_pages, 0);
}

#[tokio::test]
async fn test_get_is_idempotent() {
    let state = test_state();
    register(&state, "a@b.com", "password").await;

    let post = CreatePostUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(CreatePostInput {
            author_email: "a@b.com".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
        })
        .await
        .unwrap();

    let use_case = GetPostUseCase::new(state.repo.clone(), state.config.clone());
    let first = use_case.get(post.post_id).await.unwrap();
    let second = use_case.get(post.post_id).await.unwrap();

    assert_eq!(first.post_id, second.post_id);
    assert_eq!(first.title, second.title);
    assert_eq!(first.body, second.body);
    assert_eq!(first.updated_at, second.updated_at);
}

#[tokio::test]
async fn test_update_post_requires_ownership() {
    let state = test_state();
    register(&state, "owner@b.com", "password").await;
    register(&state, "other@b.com", "password").await;

    let post = CreatePostUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(CreatePostInput {
            author_email: "owner@b.com".to_string(),
            title: "original".to_string(),
            body: "original body".to_string(),
        })
        .await
        .unwrap();

    let update = UpdatePostUseCase::new(state.repo.clone(), state.repo.clone());

    let err = update
        .execute(UpdatePostInput {
            author_email: "other@b.com".to_string(),
            post_id: post.post_id,
            title: "hijacked".to_string(),
            body: "hijacked".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::UserNotMatch));

    // The failed attempt must not have touched the post
    let stored = PostRepository::find_by_id(state.repo.as_ref(), post.post_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "original");

    let updated = update
        .execute(UpdatePostInput {
            author_email: "owner@b.com".to_string(),
            post_id: post.post_id,
            title: "edited".to_string(),
            body: "edited body".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(updated.title, "edited");
    assert_eq!(updated.user_id, post.user_id);
}

#[tokio::test]
async fn test_delete_post_requires_ownership() {
    let state = test_state();
    register(&state, "owner@b.com", "password").await;
    register(&state, "other@b.com", "password").await;

    let post = CreatePostUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(CreatePostInput {
            author_email: "owner@b.com".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
        })
        .await
        .unwrap();

    let delete = DeletePostUseCase::new(state.repo.clone(), state.repo.clone());

    let err = delete
        .execute("other@b.com", post.post_id)
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::UserNotMatch));

    let deleted = delete.execute("owner@b.com", post.post_id).await.unwrap();
    assert_eq!(deleted.post_id, post.post_id);

    let err = GetPostUseCase::new(state.repo.clone(), state.config.clone())
        .get(post.post_id)
        .await
        .unwrap_err();
    assert!(matches!(err, BlogError::PostNotFound));
}

// ============================================================================
// Router tests
// ============================================================================

#[tokio::test]
async fn test_full_flow_over_http() {
    let state = test_state();
    let app = app(state);

    // Register
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            serde_json::json!({"email": "a@b.com", "password": "password"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "SUCCESS");
    assert_eq!(json["result"]["userId"], 1);
    assert_eq!(json["result"]["email"], "a@b.com");

    // Login
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users/login",
            serde_json::json!({"email": "a@b.com", "password": "password"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "SUCCESS");
    let jwt = json["result"]["jwt"].as_str().unwrap().to_string();

    // Create a post with the token
    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/api/v1/posts",
            &jwt,
            serde_json::json!({"title": "First", "body": "Hello"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["postId"], 1);
    assert_eq!(json["result"]["userId"], 1);

    // Read it back without a token
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/posts/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["author"], "a@b.com");
    assert_eq!(json["result"]["title"], "First");

    // Update it
    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/v1/posts/1",
            &jwt,
            serde_json::json!({"title": "Edited", "body": "Changed"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["title"], "Edited");

    // Delete it
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/posts/1")
                .header(header::AUTHORIZATION, format!("Bearer {}", jwt))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["result"]["postId"], 1);

    // Gone
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/posts/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cross_user_mutation_rejected_over_http() {
    let state = test_state();
    register(&state, "owner@b.com", "password").await;
    register(&state, "intruder@b.com", "password").await;

    CreatePostUseCase::new(state.repo.clone(), state.repo.clone())
        .execute(CreatePostInput {
            author_email: "owner@b.com".to_string(),
            title: "mine".to_string(),
            body: "hands off".to_string(),
        })
        .await
        .unwrap();

    let intruder_jwt = state.tokens.issue("intruder@b.com").unwrap();
    let app = app(state);

    let response = app
        .oneshot(authed_json_request(
            "PUT",
            "/api/v1/posts/1",
            &intruder_jwt,
            serde_json::json!({"title": "stolen", "body": "stolen"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "ERROR");
    assert_eq!(json["result"], "User does not match.");
}

#[tokio::test]
async fn test_protected_routes_reject_missing_and_bad_tokens() {
    let state = test_state();
    let app = app(state.clone());

    // No Authorization header
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/posts",
            serde_json::json!({"title": "t", "body": "b"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["result"], "Invalid token.");

    // Garbage token
    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/api/v1/posts",
            "not-a-jwt",
            serde_json::json!({"title": "t", "body": "b"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Expired token
    let expired_claims = TokenClaims::new("a@b.com", -120);
    let expired = state.tokens.encode(&expired_claims).unwrap();
    let response = app
        .clone()
        .oneshot(authed_json_request(
            "POST",
            "/api/v1/posts",
            &expired,
            serde_json::json!({"title": "t", "body": "b"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["result"], "Invalid token.");

    // Token signed with a different secret
    let other = TokenService::new(b"some-other-secret-entirely", Duration::from_secs(3600));
    let forged = other.issue("a@b.com").unwrap();
    let response = app
        .oneshot(authed_json_request(
            "POST",
            "/api/v1/posts",
            &forged,
            serde_json::json!({"title": "t", "body": "b"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_reads_need_no_token() {
    let state = test_state();
    let app = app(state);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/posts")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "SUCCESS");
    assert_eq!(json["result"]["totalElements"], 0);
}

#[tokio::test]
async fn test_request_validation_messages() {
    let state = test_state();
    let app = app(state);

    // Email checked before password
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            serde_json::json!({"email": "no-at-sign", "password": "x"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "ERROR");
    assert_eq!(json["result"], "Email must contain '@'.");

    // Short password
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            serde_json::json!({"email": "a@b.com", "password": "short"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["result"], "Password must be at least 8 characters.");

    // Exactly eight characters is accepted
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/users",
            serde_json::json!({"email": "a@b.com", "password": "password"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_registration_conflicts_over_http() {
    let state = test_state();
    let app = app(state);

    let request = || {
        json_request(
            "POST",
            "/api/v1/users",
            serde_json::json!({"email": "a@b.com", "password": "password"}),
        )
    };

    let response = app.clone().oneshot(request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["result"], "Email already exists.");
}

#[tokio::test]
async fn test_guard_masks_server_errors() {
    let tokens = test_tokens();
    let jwt = tokens.issue("a@b.com").unwrap();

    async fn exploding_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    let app = Router::new()
        .route("/boom", axum::routing::get(exploding_handler))
        .route_layer(axum::middleware::from_fn_with_state(
            AuthState::new(tokens),
            require_authentication,
        ));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/boom")
                .header(header::AUTHORIZATION, format!("Bearer {}", jwt))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "ERROR");
    assert_eq!(json["result"], "Invalid token.");
}
