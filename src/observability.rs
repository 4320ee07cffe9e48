//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::Config, error::Result};

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured log level.
pub fn init_tracing(config: &Config) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.service.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Tracing initialized for service: {}", config.service.name);

    Ok(())
}
