//! # TNT Telemetry
//!
//! Structured logging for the Track-and-Trace client crates and tools.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tnt_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `TNT_SERVICE_NAME` | `track-and-trace` | Service name on the root span |
//! | `TNT_LOG_LEVEL` / `RUST_LOG` | `info` | Filter directive |
//! | `TNT_JSON_LOGS` | `false` (`true` in containers) | JSON output |
//! | `TNT_LOG_SOURCE` | `false` | File and line per event |

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use logging::{env_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Span carrying the service name; enter it for the life of a tool.
#[macro_export]
macro_rules! service_span {
    ($config:expr) => {
        tracing::info_span!("service", service = %$config.service_name)
    };
}
