use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use assignments_api::config::AppConfig;
use assignments_api::routes;
use assignments_api::state::app_state::AppState;
use assignments_api::state::security_config::SecurityConfig;
use assignments_api::store::sea::SeaStore;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (e.g. set -a; . ./.env; set +a for local dev).
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let security = SecurityConfig::new(config.jwt_secret.as_bytes());

    let store = match SeaStore::connect(&config.database_url).await {
        Ok(store) => store,
        Err(e) => {
            eprintln!("❌ Failed to connect to the assignment store: {e}");
            std::process::exit(1);
        }
    };

    println!(
        "🚀 Starting Assignments API on http://{}:{}",
        config.host, config.port
    );

    let app_state = AppState::new(Arc::new(store), security, config.login_password.clone());
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
