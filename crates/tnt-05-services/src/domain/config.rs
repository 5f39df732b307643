//! Client configuration.

use std::env;
use tnt_04_submission::GatewayConfig;

pub const DEFAULT_API_URL: &str = "http://localhost:8021/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Ledger gateway settings.
    pub gateway: GatewayConfig,

    /// Base URL of the application server (users, authorization, info).
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig::default(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>, gateway: GatewayConfig) -> Self {
        Self {
            gateway,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SERVER`: Application server base URL (default: http://localhost:8021/api)
    /// - Gateway variables as read by [`GatewayConfig::from_env`]
    pub fn from_env() -> Self {
        let api_url = env::var("SERVER").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(api_url, GatewayConfig::from_env())
    }
}
