//! Logging setup
//!
//! Installs the global `tracing` subscriber used by the binary. The library
//! itself only emits events; callers embedding it bring their own subscriber.

#[cfg(test)]
pub(crate) mod capture;

use crate::config::LoggingConfig;
use crate::utils::error::{RbacError, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Build the event filter: `RUST_LOG` wins over the configured level
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| RbacError::config(format!("Invalid log level '{}': {}", config.level, e))),
    }
}

/// Subscriber used while the configuration itself is being loaded
///
/// Scope it to the loading future with `WithSubscriber::with_subscriber`;
/// the configured subscriber is installed once loading succeeds.
pub fn bootstrap_subscriber<W>(
    filter: EnvFilter,
    make_writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(make_writer)
        .with_target(false)
        .finish()
}

/// Install the global subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| RbacError::config(format!("Failed to install logger: {}", e)))
}
