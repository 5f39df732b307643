//! Gateway configuration from environment variables.

use std::env;
use std::time::Duration;

pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8021/grid";
pub const DEFAULT_WAIT_SECS: u64 = 60;

/// Slack added to the long-poll window for the HTTP request timeout.
const REQUEST_TIMEOUT_SLACK: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Base URL of the ledger gateway, without trailing slash.
    pub gateway_url: String,

    /// Long-poll window passed as `wait` on status requests.
    pub wait_secs: u64,

    /// Whole-request timeout. Must exceed `wait_secs`.
    pub request_timeout: Duration,

    pub connect_timeout: Duration,

    /// Pause between status polls that come back unsettled.
    pub poll_delay: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GATEWAY_URL)
    }
}

impl GatewayConfig {
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            gateway_url: gateway_url.into().trim_end_matches('/').to_string(),
            wait_secs: DEFAULT_WAIT_SECS,
            request_timeout: Duration::from_secs(DEFAULT_WAIT_SECS) + REQUEST_TIMEOUT_SLACK,
            connect_timeout: Duration::from_secs(5),
            poll_delay: Duration::ZERO,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GRID`: Gateway base URL (default: http://localhost:8021/grid)
    /// - `TNT_STATUS_WAIT_SECS`: Long-poll window (default: 60)
    /// - `TNT_POLL_DELAY_MS`: Pause between unsettled polls (default: 0)
    pub fn from_env() -> Self {
        let gateway_url = env::var("GRID").unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let wait_secs = env::var("TNT_STATUS_WAIT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_WAIT_SECS);

        let poll_delay = env::var("TNT_POLL_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::ZERO);

        Self {
            poll_delay,
            ..Self::new(gateway_url).with_wait_secs(wait_secs)
        }
    }

    /// Set the long-poll window, stretching the request timeout to cover it.
    pub fn with_wait_secs(mut self, wait_secs: u64) -> Self {
        self.wait_secs = wait_secs;
        self.request_timeout = Duration::from_secs(wait_secs) + REQUEST_TIMEOUT_SLACK;
        self
    }
}
