//! Error types for payload encoding

use thiserror::Error;

/// Errors raised while turning an action into payload bytes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("There is no payload action with key '{0}'")]
    UnknownAction(String),

    #[error("Invalid data for action '{key}': {reason}")]
    InvalidActionData { key: String, reason: String },

    #[error("Invalid value for property '{name}': {reason}")]
    InvalidProperty { name: String, reason: String },
}
