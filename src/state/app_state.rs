use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::store::AssignmentStore;

/// Application state containing shared resources.
///
/// Immutable for the process lifetime; the store handle is the only part that
/// touches the outside world and must be safe for concurrent use.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Assignment store handle
    pub store: Arc<dyn AssignmentStore>,
    /// Security configuration (token secret and algorithm)
    pub security: SecurityConfig,
    /// The one valid login password
    pub login_password: String,
}

impl AppState {
    pub fn new(
        store: Arc<dyn AssignmentStore>,
        security: SecurityConfig,
        login_password: impl Into<String>,
    ) -> Self {
        Self {
            store,
            security,
            login_password: login_password.into(),
        }
    }
}
