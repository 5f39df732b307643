//! Structured logging.
//!
//! Events carry consistent fields so log shippers can parse them:
//! - `timestamp`, `level`, `target`
//! - `service`: from [`TelemetryConfig::service_name`] on the root span
//! - event fields such as `batch_id`, `transaction_count`, `status`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Parse the configured filter directive.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level)
        .map_err(|e| TelemetryError::Config(format!("log level '{}': {e}", config.log_level)))
}

/// Install the global subscriber.
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;
    let fmt = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(config.with_source)
        .with_line_number(config.with_source);

    let result = if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt.json().with_current_span(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt)
            .try_init()
    };
    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

    tracing::debug!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}
