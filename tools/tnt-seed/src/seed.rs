//! Seeding flows.

use shared_crypto::{seal_private_key, Secp256k1Signer, Signer};
use std::sync::Arc;
use std::time::Duration;
use tnt_02_payloads::{AgentBody, CreateRecordTypeBody};
use tnt_04_submission::BatchSubmissionApi;
use tnt_05_services::{
    create_schema_transaction, AccountGateway, ClientConfig, NewUser, ServiceError, Session,
    TrackAndTraceApi, TrackAndTraceService,
};
use tracing::{error, info, warn};

use crate::data::SeedOrganization;

/// Roles granted to each seeded organization's admin agent.
pub const ADMIN_ROLES: [&str; 3] = ["admin", "can_create_schema", "can_update_schema"];

/// Per-organization results of a seeding run.
#[derive(Debug, Default)]
pub struct SeedReport {
    pub seeded: Vec<String>,
    pub failed: Vec<(String, ServiceError)>,
}

impl SeedReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Seeder<A: AccountGateway, S: BatchSubmissionApi> {
    accounts: Arc<A>,
    submitter: Arc<S>,
    config: ClientConfig,
    retry_wait: Duration,
}

impl<A: AccountGateway, S: BatchSubmissionApi + 'static> Seeder<A, S> {
    pub fn new(accounts: Arc<A>, submitter: Arc<S>, config: ClientConfig) -> Self {
        Self {
            accounts,
            submitter,
            config,
            retry_wait: Duration::from_millis(5000),
        }
    }

    pub fn with_retry_wait(mut self, retry_wait: Duration) -> Self {
        self.retry_wait = retry_wait;
        self
    }

    /// Probe `{api}/info` until it answers. Never gives up.
    pub async fn await_server_ready(&self) -> serde_json::Value {
        info!(server = %self.config.api_url, "Waiting for server");
        loop {
            match self.accounts.server_info().await {
                Ok(info) => return info,
                Err(e) => {
                    warn!(
                        error = %e,
                        "Server unavailable, retrying in {} seconds...",
                        self.retry_wait.as_secs_f64()
                    );
                    tokio::time::sleep(self.retry_wait).await;
                }
            }
        }
    }

    /// Create each organization with an admin user, grant it schema rights
    /// and register its record types.
    ///
    /// A failing organization is logged and skipped.
    pub async fn seed_organizations(&self, organizations: &[SeedOrganization]) -> SeedReport {
        let mut report = SeedReport::default();
        for org in organizations {
            match self.seed_organization(org).await {
                Ok(()) => {
                    info!(org_id = %org.org_id, schemas = org.schemas.len(), "Organization seeded");
                    report.seeded.push(org.org_id.clone());
                }
                Err(e) => {
                    error!(org_id = %org.org_id, error = %e, "Error seeding organization");
                    report.failed.push((org.org_id.clone(), e));
                }
            }
        }
        report
    }

    async fn seed_organization(&self, org: &SeedOrganization) -> Result<(), ServiceError> {
        let signer = Secp256k1Signer::generate();
        let public_key = signer.public_key_hex();
        let encrypted_private_key = seal_private_key(&org.password, &signer.private_key_hex())?;

        self.accounts
            .create_user(&NewUser {
                email: org.email.clone(),
                password: org.password.clone(),
                encrypted_private_key,
                public_key: public_key.clone(),
                username: None,
                name: None,
            })
            .await?;

        let service = self.service(Arc::new(signer));
        service.create_organization(org.organization()).await?;
        service
            .update_agent(AgentBody {
                org_id: org.org_id.clone(),
                public_key,
                active: true,
                roles: ADMIN_ROLES.iter().map(|r| r.to_string()).collect(),
                metadata: Vec::new(),
            })
            .await?;

        if !org.schemas.is_empty() {
            self.submit_record_types(&service, &org.schemas).await?;
        }
        Ok(())
    }

    /// Register record types in one batch under a fresh key.
    pub async fn seed_record_types(
        &self,
        record_types: &[CreateRecordTypeBody],
    ) -> Result<Vec<String>, ServiceError> {
        let service = self.service(Arc::new(Secp256k1Signer::generate()));
        self.submit_record_types(&service, record_types).await
    }

    async fn submit_record_types(
        &self,
        service: &TrackAndTraceService<S>,
        record_types: &[CreateRecordTypeBody],
    ) -> Result<Vec<String>, ServiceError> {
        let transactions = record_types
            .iter()
            .map(|body| create_schema_transaction(service.session(), body.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        info!(count = transactions.len(), "Submitting record types");
        service.submit(transactions).await
    }

    fn service(&self, signer: Arc<dyn Signer>) -> TrackAndTraceService<S> {
        let session = Session::new(self.config.clone()).with_signer(signer);
        TrackAndTraceService::new(session, Arc::clone(&self.submitter))
    }
}
