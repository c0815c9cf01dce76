use crate::error::AppError;

/// Process configuration, read from the environment exactly once at startup
/// and immutable afterwards. Everything downstream receives it (or the
/// `AppState` built from it) by reference; there are no ambient lookups.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Symmetric signing secret for issued tokens.
    pub jwt_secret: String,
    /// The one valid login password.
    pub login_password: String,
    /// Connection URL for the assignment store.
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("ASSIGNMENTS_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("ASSIGNMENTS_PORT")
            .unwrap_or_else(|_| "5554".to_string())
            .parse::<u16>()
            .map_err(|_| AppError::config("ASSIGNMENTS_PORT must be a valid port number"))?;

        let jwt_secret = require_env("ASSIGNMENTS_JWT_SECRET")?;
        let login_password = require_env("ASSIGNMENTS_LOGIN_PASSWORD")?;
        let database_url = require_env("DATABASE_URL")?;

        Ok(Self {
            host,
            port,
            jwt_secret,
            login_password,
            database_url,
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| AppError::config(format!("{name} must be set")))
}
