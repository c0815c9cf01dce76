use std::time::SystemTime;

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;

use crate::auth::jwt::mint_token;
use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Exchange basic-auth credentials for a short-lived token.
///
/// Only the password is checked; any username is accepted as the token
/// subject (single-principal system).
async fn login(req: HttpRequest, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let (username, password) = basic_credentials(&req).ok_or(AppError::BadCredentials)?;

    if password != app_state.login_password {
        return Err(AppError::BadCredentials);
    }

    let token = mint_token(&username, SystemTime::now(), &app_state.security)?;

    Ok(HttpResponse::Ok().json(LoginResponse { token }))
}

fn basic_credentials(req: &HttpRequest) -> Option<(String, String)> {
    let header_value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let encoded = header_value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/login").route(web::get().to(login)));
}
