//! Blog Routers
//!
//! Two routers, intended to be nested under `/api/v1/users` and
//! `/api/v1/posts`. Post reads are public; post writes sit behind the
//! bearer-token guard.

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::domain::repository::{PostRepository, UserRepository};
use crate::presentation::handlers::{self, BlogAppState};
use crate::presentation::middleware::{self, AuthState};

/// Create the user router (registration and login)
pub fn user_router<R>(state: BlogAppState<R>) -> Router
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(handlers::create_user::<R>))
        .route("/login", post(handlers::login_user::<R>))
        .with_state(state)
}

/// Create the post router
pub fn post_router<R>(state: BlogAppState<R>) -> Router
where
    R: UserRepository + PostRepository + Clone + Send + Sync + 'static,
{
    let auth = AuthState::new(state.tokens.clone());

    let public = Router::new()
        .route("/", get(handlers::list_posts::<R>))
        .route("/{post_id}", get(handlers::get_post::<R>));

    let protected = Router::new()
        .route("/", post(handlers::create_post::<R>))
        .route(
            "/{post_id}",
            put(handlers::update_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            auth,
            middleware::require_authentication,
        ));

    public.merge(protected).with_state(state)
}
