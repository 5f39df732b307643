//! Account API request and response bodies.

use serde::{Deserialize, Serialize};

/// `POST {api}/users` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    /// Signing key sealed under `password`.
    pub encrypted_private_key: String,
    pub public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `PATCH {api}/users/{public_key}` body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(
        rename = "encryptedPrivateKey",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub encrypted_private_key: Option<String>,
}

/// Server acknowledgement for user create and update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct StatusReply {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub authorization: Option<String>,
}

impl StatusReply {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// `POST {api}/authorization` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Authorization {
    pub authorization: String,
    #[serde(default)]
    pub user: serde_json::Value,
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"error": {"message": ..}}`, `{"error": ".."}` and
/// `{"message": ..}`; anything else is returned as-is.
pub fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };
    let error = value.get("error").unwrap_or(&value);
    error
        .get("message")
        .and_then(|m| m.as_str())
        .or_else(|| error.as_str())
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}
