use actix_web::http::header::HeaderMap;
use actix_web::{web, HttpRequest, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::middleware::token_guard::TokenGuard;
use crate::state::app_state::AppState;
use crate::store::Assignment;

async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Hello, This is a Sample API")
}

/// Insert one assignment built from the six request headers.
///
/// Any failure, from a missing header to an unreachable store, collapses into
/// the same generic 500 body; the detail only goes to the local log.
async fn create(req: HttpRequest, app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let doc = assignment_from_headers(req.headers()).map_err(AppError::store_write)?;

    app_state
        .store
        .insert(doc)
        .await
        .map_err(|e| AppError::store_write(e.to_string()))?;

    Ok(HttpResponse::Created().json(json!({"message": "Assignment Created..!"})))
}

fn assignment_from_headers(headers: &HeaderMap) -> Result<Assignment, String> {
    let field = |name: &str| -> Result<String, String> {
        headers
            .get(name)
            .ok_or_else(|| format!("missing header `{name}`"))?
            .to_str()
            .map(str::to_owned)
            .map_err(|_| format!("non-UTF-8 header `{name}`"))
    };

    // `id` is canonically an integer; the find routes query it as one.
    let id = field("id")?
        .parse::<i64>()
        .map_err(|_| "header `id` is not an integer".to_string())?;

    Ok(Assignment {
        id,
        name: field("name")?,
        title: field("title")?,
        description: field("description")?,
        kind: field("type")?,
        duration: field("duration")?,
    })
}

#[derive(Debug, Deserialize)]
struct FindQuery {
    id: Option<String>,
}

async fn find_by_id(
    query: web::Query<FindQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = query
        .id
        .as_deref()
        .ok_or_else(|| AppError::malformed_query("missing `id` parameter"))?
        .parse::<i64>()
        .map_err(|_| AppError::malformed_query(format!("`id` is not an integer: {:?}", query.id)))?;

    let docs = app_state
        .store
        .find_by_id(id)
        .await
        .map_err(|e| AppError::store_read(e.to_string()))?;

    let body = serde_json::to_string_pretty(&docs)
        .map_err(|e| AppError::store_read(format!("serialization failed: {e}")))?;

    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(body))
}

/// Tag lookup is not implemented; this is an alias for the id lookup.
async fn find_by_tags(
    query: web::Query<FindQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    find_by_id(query, app_state).await
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .wrap(TokenGuard)
            .route(web::get().to(index)),
    )
    .service(
        web::resource("/assignments")
            .wrap(TokenGuard)
            .route(web::post().to(create)),
    )
    .service(
        web::resource("/findById")
            .wrap(TokenGuard)
            .route(web::get().to(find_by_id)),
    )
    .service(
        web::resource("/findByTags")
            .wrap(TokenGuard)
            .route(web::get().to(find_by_tags)),
    );
}
