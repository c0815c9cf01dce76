use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde_json::json;
use thiserror::Error;

/// Application-level errors.
///
/// The wire bodies are part of the API contract and deliberately generic:
/// callers never learn why a token was rejected or what went wrong inside the
/// store. The private detail only reaches the local diagnostic log, in
/// `error_response`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing auth token")]
    MissingToken,
    #[error("Invalid auth token: {reason}")]
    InvalidToken { reason: String },
    #[error("Bad login credentials")]
    BadCredentials,
    #[error("Assignment insert failed: {detail}")]
    StoreWrite { detail: String },
    #[error("Assignment lookup failed: {detail}")]
    StoreRead { detail: String },
    #[error("Malformed query: {detail}")]
    MalformedQuery { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }

    pub fn store_write(detail: impl Into<String>) -> Self {
        Self::StoreWrite {
            detail: detail.into(),
        }
    }

    pub fn store_read(detail: impl Into<String>) -> Self {
        Self::StoreRead {
            detail: detail.into(),
        }
    }

    pub fn malformed_query(detail: impl Into<String>) -> Self {
        Self::MalformedQuery {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingToken => StatusCode::FORBIDDEN,
            AppError::InvalidToken { .. } => StatusCode::FORBIDDEN,
            AppError::BadCredentials => StatusCode::UNAUTHORIZED,
            AppError::StoreWrite { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StoreRead { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedQuery { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::MissingToken => {
                tracing::warn!("request rejected: no token in query string");
                HttpResponse::Forbidden().json(json!({"message": "Token is missing!"}))
            }
            AppError::InvalidToken { reason } => {
                tracing::warn!(reason = %reason, "request rejected: bad token");
                HttpResponse::Forbidden().json(json!({"message": "Token is invalid!"}))
            }
            AppError::BadCredentials => HttpResponse::Unauthorized()
                .insert_header((header::WWW_AUTHENTICATE, r#"Basic realm="Login Required""#))
                .body("Could not verify!"),
            AppError::StoreWrite { detail } => {
                tracing::error!(detail = %detail, "assignment create failed");
                HttpResponse::InternalServerError()
                    .json(json!({"message": "Assignment Creation Failed..!"}))
            }
            AppError::StoreRead { detail } => {
                tracing::error!(detail = %detail, "assignment lookup failed");
                HttpResponse::InternalServerError().body("False")
            }
            AppError::MalformedQuery { detail } => {
                tracing::warn!(detail = %detail, "assignment lookup failed");
                HttpResponse::InternalServerError().body("False")
            }
            AppError::Config { detail } | AppError::Internal { detail } => {
                tracing::error!(detail = %detail, "internal error");
                HttpResponse::InternalServerError().json(json!({"message": "Internal error"}))
            }
        }
    }
}
