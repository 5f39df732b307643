//! In-memory account store.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::domain::{Authorization, NewUser, StatusReply, UserUpdate};
use crate::error::ApiError;
use crate::ports::AccountGateway;

#[derive(Default)]
struct State {
    users: HashMap<String, NewUser>,
    info_failures: usize,
    info_probes: usize,
}

/// Account gateway holding users in a map.
///
/// Duplicate emails are rejected the way the server does. `server_info`
/// can be told to fail a number of times before answering.
#[derive(Default)]
pub struct InMemoryAccounts {
    state: Mutex<State>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the first `count` readiness probes.
    pub fn unavailable_for(self, count: usize) -> Self {
        self.state.lock().info_failures = count;
        self
    }

    pub fn user(&self, public_key: &str) -> Option<NewUser> {
        self.state.lock().users.get(public_key).cloned()
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().users.len()
    }

    pub fn info_probes(&self) -> usize {
        self.state.lock().info_probes
    }
}

#[async_trait]
impl AccountGateway for InMemoryAccounts {
    async fn create_user(&self, user: &NewUser) -> Result<StatusReply, ApiError> {
        let mut state = self.state.lock();
        if state.users.values().any(|u| u.email == user.email) {
            return Err(ApiError::Rejected(format!(
                "A user with email {} already exists",
                user.email
            )));
        }
        state.users.insert(user.public_key.clone(), user.clone());
        Ok(StatusReply {
            status: "ok".into(),
            authorization: Some(format!("token-{}", user.public_key)),
        })
    }

    async fn update_user(
        &self,
        public_key: &str,
        update: &UserUpdate,
    ) -> Result<StatusReply, ApiError> {
        let mut state = self.state.lock();
        let user = state.users.get_mut(public_key).ok_or(ApiError::Unauthorized)?;

        if let Some(password) = &update.password {
            if update.old_password.as_deref() != Some(user.password.as_str()) {
                return Err(ApiError::Unauthorized);
            }
            user.password = password.clone();
        }
        if let Some(key) = &update.encrypted_private_key {
            user.encrypted_private_key = key.clone();
        }
        if update.username.is_some() {
            user.username = update.username.clone();
        }
        Ok(StatusReply {
            status: "ok".into(),
            authorization: None,
        })
    }

    async fn authorize(&self, email: &str, password: &str) -> Result<Authorization, ApiError> {
        let state = self.state.lock();
        let user = state
            .users
            .values()
            .find(|u| u.email == email && u.password == password)
            .ok_or(ApiError::Unauthorized)?;

        Ok(Authorization {
            authorization: format!("token-{}", user.public_key),
            user: serde_json::json!({
                "email": user.email,
                "publicKey": user.public_key,
                "encryptedPrivateKey": user.encrypted_private_key,
            }),
        })
    }

    async fn server_info(&self) -> Result<serde_json::Value, ApiError> {
        let mut state = self.state.lock();
        state.info_probes += 1;
        if state.info_failures > 0 {
            state.info_failures -= 1;
            return Err(ApiError::Connection("Cannot connect to in-memory server".into()));
        }
        Ok(serde_json::json!({ "pubkey": "in-memory" }))
    }
}
