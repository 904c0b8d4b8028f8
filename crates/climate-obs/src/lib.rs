use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging for the climate tools.
/// - Logs go to stderr so the report on stdout stays clean
/// - RUST_LOG respected; default to "info,climate=debug"
pub fn init(service_name: &str) {
    let default_filter = "info,climate=debug";
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());

    tracing_subscriber::registry()
        .with(EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(service = %service_name, "Observability initialized");
}
