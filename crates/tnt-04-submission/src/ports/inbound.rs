//! Inbound Ports (Driving Ports)
//!
//! The submission API domain services call.

use async_trait::async_trait;
use shared_crypto::Signer;
use shared_protos::Transaction;
use tnt_01_addressing::{FamilyDescriptor, FamilyKey};
use tnt_03_transactions::{PayloadInfo, SubmissionPayload};

use crate::cancel::CancelSignal;
use crate::error::SubmitError;

/// Batch submission API (Driving Port).
#[async_trait]
pub trait BatchSubmissionApi: Send + Sync {
    /// Batch `transactions`, submit once, and wait for the commit outcome.
    ///
    /// Returns the transaction ids in submission order.
    async fn submit_batch(
        &self,
        transactions: Vec<Transaction>,
        signer: &dyn Signer,
        cancel: CancelSignal,
    ) -> Result<Vec<String>, SubmitError>;

    /// Build one dispatched transaction and submit it as its own batch.
    async fn submit_transaction(
        &self,
        info: PayloadInfo,
        signer: &dyn Signer,
        family: FamilyKey,
        dispatched: &[&'static FamilyDescriptor],
        cancel: CancelSignal,
    ) -> Result<Vec<String>, SubmitError>;

    /// Submit direct namespace payloads as a `TransactionList`.
    ///
    /// Does not watch for commit; `wait` asks the gateway to hold the
    /// response until the batch settles.
    async fn submit_transaction_list(
        &self,
        payloads: &[SubmissionPayload],
        signer: &dyn Signer,
        wait: bool,
    ) -> Result<Vec<String>, SubmitError>;
}
