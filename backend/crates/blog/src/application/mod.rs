//! Application Layer
//!
//! Use cases and application services. Each use case takes its
//! collaborators through the constructor; nothing is wired through
//! globals.

pub mod config;
pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod login;
pub mod register;
pub mod update_post;

// Re-exports
pub use config::BlogConfig;
pub use create_post::{CreatePostInput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use get_post::{GetPostUseCase, PostPage};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use update_post::{UpdatePostInput, UpdatePostUseCase};
