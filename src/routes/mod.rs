use actix_web::web;

pub mod assignments;
pub mod auth;
pub mod docs;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure)
        .configure(auth::configure_routes)
        .configure(docs::configure_routes)
        .configure(assignments::configure_routes);
}
