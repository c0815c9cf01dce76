use actix_web::{web, HttpResponse};

/// Bundled machine-readable API description. Regenerating it is an external
/// concern; it is embedded so the binary serves a consistent copy.
const OPENAPI_SPEC: &str = include_str!("../../static/swagger.yaml");

async fn openapi_spec() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/yaml")
        .body(OPENAPI_SPEC)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/static/swagger.yaml").route(web::get().to(openapi_spec)));
}
