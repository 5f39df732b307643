//! Domain services over the batch submitter, and read-only ledger queries.

use async_trait::async_trait;
use shared_protos::Transaction;
use std::sync::Arc;
use tnt_02_payloads::{
    AgentBody, AnswerProposalBody, CreateProposalBody, CreateRecordBody, CreateRecordTypeBody,
    OrganizationBody, PropertyInput, RevokeReporterBody, UpdatePropertiesBody,
    UpdateRecordTypeBody,
};
use tnt_04_submission::{BatchSubmissionApi, CancelSignal, LedgerGateway};
use tracing::info;

use crate::domain::{
    answer_proposal_transaction, create_agent_transaction, create_organization_transaction,
    create_proposal_transaction, create_record_transaction, create_schema_transaction,
    finalize_record_transaction, new_record_id, revoke_reporter_transaction,
    update_agent_transaction, update_organization_transaction, update_properties_transaction,
    update_schema_transaction, CreatedRecord, Session,
};
use crate::error::ServiceError;
use crate::ports::TrackAndTraceApi;

/// Runs named operations for one session.
pub struct TrackAndTraceService<S: BatchSubmissionApi> {
    session: Session,
    submitter: Arc<S>,
    cancel: CancelSignal,
}

impl<S: BatchSubmissionApi + 'static> TrackAndTraceService<S> {
    pub fn new(session: Session, submitter: Arc<S>) -> Self {
        Self {
            session,
            submitter,
            cancel: CancelSignal::never(),
        }
    }

    /// Stop waiting for commits once `cancel` fires.
    pub fn with_cancel(mut self, cancel: CancelSignal) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn submitter(&self) -> &Arc<S> {
        &self.submitter
    }

    async fn submit_one(&self, transaction: Transaction) -> Result<Vec<String>, ServiceError> {
        self.submit(vec![transaction]).await
    }
}

#[async_trait]
impl<S: BatchSubmissionApi + 'static> TrackAndTraceApi for TrackAndTraceService<S> {
    async fn submit(&self, transactions: Vec<Transaction>) -> Result<Vec<String>, ServiceError> {
        let signer = self.session.signer()?;
        Ok(self
            .submitter
            .submit_batch(transactions, signer, self.cancel.clone())
            .await?)
    }

    async fn create_agent(&self, name: &str, org_id: &str) -> Result<Vec<String>, ServiceError> {
        info!(name, org_id, "Creating agent");
        self.submit_one(create_agent_transaction(&self.session, name, org_id)?)
            .await
    }

    async fn update_agent(&self, body: AgentBody) -> Result<Vec<String>, ServiceError> {
        info!(public_key = %body.public_key, roles = ?body.roles, "Updating agent");
        self.submit_one(update_agent_transaction(&self.session, body)?)
            .await
    }

    async fn create_organization(
        &self,
        body: OrganizationBody,
    ) -> Result<Vec<String>, ServiceError> {
        info!(org_id = %body.id, "Creating organization");
        self.submit_one(create_organization_transaction(&self.session, body)?)
            .await
    }

    async fn update_organization(
        &self,
        body: OrganizationBody,
    ) -> Result<Vec<String>, ServiceError> {
        info!(org_id = %body.id, "Updating organization");
        self.submit_one(update_organization_transaction(&self.session, body)?)
            .await
    }

    async fn create_schema(
        &self,
        body: CreateRecordTypeBody,
    ) -> Result<Vec<String>, ServiceError> {
        info!(schema = %body.name, properties = body.properties.len(), "Creating record type");
        self.submit_one(create_schema_transaction(&self.session, body)?)
            .await
    }

    async fn update_schema(
        &self,
        body: UpdateRecordTypeBody,
    ) -> Result<Vec<String>, ServiceError> {
        info!(schema = %body.name, "Updating record type");
        self.submit_one(update_schema_transaction(&self.session, body)?)
            .await
    }

    async fn create_record(
        &self,
        schema: &str,
        properties: Vec<PropertyInput>,
    ) -> Result<CreatedRecord, ServiceError> {
        let record_id = new_record_id();
        info!(%record_id, schema, "Creating record");

        let transaction = create_record_transaction(
            &self.session,
            CreateRecordBody {
                record_id: record_id.clone(),
                schema: schema.to_string(),
                properties,
            },
        )?;
        let transaction_ids = self.submit_one(transaction).await?;
        Ok(CreatedRecord {
            record_id,
            transaction_ids,
        })
    }

    async fn finalize_record(&self, record_id: &str) -> Result<Vec<String>, ServiceError> {
        info!(record_id, "Finalizing record");
        self.submit_one(finalize_record_transaction(&self.session, record_id)?)
            .await
    }

    async fn update_properties(
        &self,
        body: UpdatePropertiesBody,
    ) -> Result<Vec<String>, ServiceError> {
        info!(
            record_id = %body.record_id,
            properties = body.properties.len(),
            "Updating properties"
        );
        self.submit_one(update_properties_transaction(&self.session, body)?)
            .await
    }

    async fn create_proposal(
        &self,
        body: CreateProposalBody,
    ) -> Result<Vec<String>, ServiceError> {
        info!(
            record_id = %body.record_id,
            receiving_agent = %body.receiving_agent,
            role = ?body.role,
            "Creating proposal"
        );
        self.submit_one(create_proposal_transaction(&self.session, body)?)
            .await
    }

    async fn answer_proposal(
        &self,
        body: AnswerProposalBody,
        schema: &str,
        properties: &[String],
    ) -> Result<Vec<String>, ServiceError> {
        info!(
            record_id = %body.record_id,
            response = ?body.response,
            "Answering proposal"
        );
        self.submit_one(answer_proposal_transaction(
            &self.session,
            body,
            schema,
            properties,
        )?)
        .await
    }

    async fn revoke_reporter(
        &self,
        body: RevokeReporterBody,
    ) -> Result<Vec<String>, ServiceError> {
        info!(
            record_id = %body.record_id,
            reporter_id = %body.reporter_id,
            "Revoking reporter"
        );
        self.submit_one(revoke_reporter_transaction(&self.session, body)?)
            .await
    }
}

/// Read-only views of ledger state served by the gateway.
pub struct LedgerQueries<G: LedgerGateway> {
    gateway: Arc<G>,
}

impl<G: LedgerGateway> Clone for LedgerQueries<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: LedgerGateway> LedgerQueries<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn agents(&self) -> Result<serde_json::Value, ServiceError> {
        self.get("agent").await
    }

    pub async fn agent(&self, public_key: &str) -> Result<serde_json::Value, ServiceError> {
        self.get(&format!("agent/{public_key}")).await
    }

    pub async fn organizations(&self) -> Result<serde_json::Value, ServiceError> {
        self.get("organization").await
    }

    pub async fn organization(&self, id: &str) -> Result<serde_json::Value, ServiceError> {
        self.get(&format!("organization/{id}")).await
    }

    pub async fn records(&self) -> Result<serde_json::Value, ServiceError> {
        self.get("record").await
    }

    pub async fn record(&self, record_id: &str) -> Result<serde_json::Value, ServiceError> {
        self.get(&format!("record/{record_id}")).await
    }

    pub async fn schema(&self, name: &str) -> Result<serde_json::Value, ServiceError> {
        self.get(&format!("schema/{name}")).await
    }

    async fn get(&self, path: &str) -> Result<serde_json::Value, ServiceError> {
        Ok(self.gateway.fetch(path).await?)
    }
}
