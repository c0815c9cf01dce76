#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use assignments_api::state::app_state::AppState;
use assignments_api::state::security_config::SecurityConfig;
use assignments_api::store::memory::MemStore;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const TEST_PASSWORD: &str = "open-sesame";

// Quiet logging for every test binary that pulls this module in.
#[ctor::ctor]
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// State over an in-memory store; the store handle is returned separately so
/// tests can assert on side effects (or their absence) directly.
pub fn test_state() -> (web::Data<AppState>, Arc<MemStore>) {
    let store = Arc::new(MemStore::new());
    let state = AppState::new(
        store.clone(),
        SecurityConfig::new(TEST_SECRET.as_bytes()),
        TEST_PASSWORD,
    );
    (web::Data::new(state), store)
}

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.as_bytes())
}

/// `Authorization: Basic …` header value for the given credentials.
pub fn basic_auth(username: &str, password: &str) -> String {
    format!("Basic {}", BASE64.encode(format!("{username}:{password}")))
}
