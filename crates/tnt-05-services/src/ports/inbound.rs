//! Inbound Ports (Driving Ports)
//!
//! Named ledger operations. Each builds its transaction, submits it as a
//! single-transaction batch and resolves once the ledger commits it.

use async_trait::async_trait;
use shared_protos::Transaction;
use tnt_02_payloads::{
    AgentBody, AnswerProposalBody, CreateProposalBody, CreateRecordTypeBody, OrganizationBody,
    PropertyInput, RevokeReporterBody, UpdatePropertiesBody, UpdateRecordTypeBody,
};

use crate::domain::CreatedRecord;
use crate::error::ServiceError;

/// Track-and-Trace operations API (Driving Port).
///
/// All operations return the committed transaction ids.
#[async_trait]
pub trait TrackAndTraceApi: Send + Sync {
    /// Submit prebuilt transactions together as one batch.
    async fn submit(&self, transactions: Vec<Transaction>) -> Result<Vec<String>, ServiceError>;

    async fn create_agent(&self, name: &str, org_id: &str) -> Result<Vec<String>, ServiceError>;

    async fn update_agent(&self, body: AgentBody) -> Result<Vec<String>, ServiceError>;

    async fn create_organization(
        &self,
        body: OrganizationBody,
    ) -> Result<Vec<String>, ServiceError>;

    async fn update_organization(
        &self,
        body: OrganizationBody,
    ) -> Result<Vec<String>, ServiceError>;

    async fn create_schema(&self, body: CreateRecordTypeBody)
        -> Result<Vec<String>, ServiceError>;

    async fn update_schema(&self, body: UpdateRecordTypeBody)
        -> Result<Vec<String>, ServiceError>;

    /// Create a record of type `schema` under a fresh random id.
    async fn create_record(
        &self,
        schema: &str,
        properties: Vec<PropertyInput>,
    ) -> Result<CreatedRecord, ServiceError>;

    async fn finalize_record(&self, record_id: &str) -> Result<Vec<String>, ServiceError>;

    async fn update_properties(
        &self,
        body: UpdatePropertiesBody,
    ) -> Result<Vec<String>, ServiceError>;

    async fn create_proposal(&self, body: CreateProposalBody)
        -> Result<Vec<String>, ServiceError>;

    async fn answer_proposal(
        &self,
        body: AnswerProposalBody,
        schema: &str,
        properties: &[String],
    ) -> Result<Vec<String>, ServiceError>;

    async fn revoke_reporter(&self, body: RevokeReporterBody)
        -> Result<Vec<String>, ServiceError>;
}
