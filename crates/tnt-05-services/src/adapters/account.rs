//! reqwest client for the application server's account endpoints.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

use crate::domain::{error_message, Authorization, ClientConfig, NewUser, StatusReply, UserUpdate};
use crate::error::ApiError;
use crate::ports::AccountGateway;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for `{api}/users`, `{api}/authorization` and `{api}/info`.
#[derive(Debug, Clone)]
pub struct AccountApi {
    client: Client,
    base_url: String,
}

impl AccountApi {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(config.gateway.connect_timeout)
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn connection_error(&self, e: reqwest::Error) -> ApiError {
        if e.is_connect() {
            ApiError::Connection(format!("Cannot connect to {}", self.base_url))
        } else {
            ApiError::Http(e)
        }
    }

    /// Decode a success body; map 400 to `Rejected` and 401 to `Unauthorized`.
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status {
                StatusCode::BAD_REQUEST => ApiError::Rejected(error_message(&body)),
                StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
                _ => ApiError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn require_ok(reply: StatusReply, fallback: &str) -> Result<StatusReply, ApiError> {
        if reply.is_ok() {
            Ok(reply)
        } else {
            Err(ApiError::Rejected(fallback.to_string()))
        }
    }
}

#[async_trait]
impl AccountGateway for AccountApi {
    async fn create_user(&self, user: &NewUser) -> Result<StatusReply, ApiError> {
        let url = self.url("users");
        trace!(%url, public_key = %user.public_key, "POST user");

        let response = self
            .client
            .post(&url)
            .json(user)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;

        let reply = Self::read_json(response).await?;
        debug!(email = %user.email, "User created");
        Self::require_ok(reply, "Unable to sign up at this time.")
    }

    async fn update_user(
        &self,
        public_key: &str,
        update: &UserUpdate,
    ) -> Result<StatusReply, ApiError> {
        let url = self.url(&format!("users/{public_key}"));
        trace!(%url, "PATCH user");

        let response = self
            .client
            .patch(&url)
            .json(update)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;

        let reply = Self::read_json(response).await?;
        Self::require_ok(reply, "Unable to change password at this time.")
    }

    async fn authorize(&self, email: &str, password: &str) -> Result<Authorization, ApiError> {
        let url = self.url("authorization");
        trace!(%url, "POST authorization");

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;

        Self::read_json(response).await
    }

    async fn server_info(&self) -> Result<serde_json::Value, ApiError> {
        let response = self
            .client
            .get(self.url("info"))
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;

        Self::read_json(response).await
    }
}
