use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the process-wide tracing subscriber. JSON output, `RUST_LOG`
/// overridable. Called once from `main`.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,sea_orm=warn"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
