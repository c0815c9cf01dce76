//! Claims embedded in issued access tokens.

use serde::{Deserialize, Serialize};

/// The full payload of an issued token. Never persisted server-side; the
/// token held by the caller is the only record.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Username presented at login
    pub sub: String,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
