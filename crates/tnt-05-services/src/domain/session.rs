//! Caller context passed explicitly to every operation.

use shared_crypto::Signer;
use std::fmt;
use std::sync::Arc;

use crate::domain::config::ClientConfig;
use crate::error::ServiceError;

/// Signing identity plus read-only client configuration.
///
/// A session without a signer can still run queries; every mutating
/// operation fails with [`ServiceError::MissingSigner`].
#[derive(Clone, Default)]
pub struct Session {
    signer: Option<Arc<dyn Signer>>,
    config: ClientConfig,
}

impl Session {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            signer: None,
            config,
        }
    }

    pub fn with_signer(mut self, signer: Arc<dyn Signer>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn set_signer(&mut self, signer: Option<Arc<dyn Signer>>) {
        self.signer = signer;
    }

    pub fn signer(&self) -> Result<&dyn Signer, ServiceError> {
        self.signer.as_deref().ok_or(ServiceError::MissingSigner)
    }

    pub fn public_key(&self) -> Result<String, ServiceError> {
        Ok(self.signer()?.public_key_hex())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("public_key", &self.signer.as_ref().map(|s| s.public_key_hex()))
            .field("config", &self.config)
            .finish()
    }
}
