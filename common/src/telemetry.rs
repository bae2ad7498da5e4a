//! Structured logging initialization.

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Installs the tracing subscriber for a service binary.
///
/// The filter comes from `RUST_LOG` when set, defaulting to `info`.
pub fn init(service_name: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();

    tracing::info!(service = %service_name, "Logging initialized");
}
