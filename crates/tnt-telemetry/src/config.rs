//! Telemetry configuration from environment variables.

use std::env;

pub const DEFAULT_SERVICE_NAME: &str = "track-and-trace";

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to every event
    pub service_name: String,

    /// Filter directive (`info`, `tnt_04_submission=debug,warn`, ...)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Include source file and line in each event
    pub with_source: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            with_source: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `TNT_SERVICE_NAME`: Service name (default: track-and-trace)
    /// - `TNT_LOG_LEVEL` or `RUST_LOG`: Filter directive (default: info)
    /// - `TNT_JSON_LOGS`: Enable JSON logs (default: false, true in containers)
    /// - `TNT_LOG_SOURCE`: Include file and line (default: false)
    pub fn from_env() -> Self {
        let is_container =
            env::var("KUBERNETES_SERVICE_HOST").is_ok() || env::var("DOCKER_CONTAINER").is_ok();

        Self {
            service_name: env::var("TNT_SERVICE_NAME")
                .unwrap_or_else(|_| DEFAULT_SERVICE_NAME.to_string()),

            log_level: env::var("TNT_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            json_logs: env::var("TNT_JSON_LOGS")
                .map(|v| flag(&v))
                .unwrap_or(is_container),

            with_source: env::var("TNT_LOG_SOURCE").map(|v| flag(&v)).unwrap_or(false),
        }
    }

    /// Configuration for a named tool, honouring the environment otherwise.
    pub fn for_tool(name: &str) -> Self {
        Self {
            service_name: name.to_string(),
            ..Self::from_env()
        }
    }
}

fn flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}
