#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod health;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

// Re-exports for public API
pub use auth::claims::Claims;
pub use auth::jwt::{mint_token, verify_token, TOKEN_TTL_SECS};
pub use config::AppConfig;
pub use error::AppError;
pub use middleware::token_guard::TokenGuard;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
pub use store::memory::MemStore;
pub use store::sea::SeaStore;
pub use store::{Assignment, AssignmentStore, StoreError};
