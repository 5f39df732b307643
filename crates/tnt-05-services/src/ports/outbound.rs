//! Outbound Ports (Driven Ports)
//!
//! What the services need from the application server.

use async_trait::async_trait;

use crate::domain::{Authorization, NewUser, StatusReply, UserUpdate};
use crate::error::ApiError;

/// User accounts on the application server (Driven Port).
#[async_trait]
pub trait AccountGateway: Send + Sync {
    /// `POST {api}/users`.
    async fn create_user(&self, user: &NewUser) -> Result<StatusReply, ApiError>;

    /// `PATCH {api}/users/{public_key}`.
    async fn update_user(
        &self,
        public_key: &str,
        update: &UserUpdate,
    ) -> Result<StatusReply, ApiError>;

    /// `POST {api}/authorization`.
    async fn authorize(&self, email: &str, password: &str) -> Result<Authorization, ApiError>;

    /// `GET {api}/info`; used as a readiness probe.
    async fn server_info(&self) -> Result<serde_json::Value, ApiError>;
}
