//! Batch submission and commit watching.

use async_trait::async_trait;
use shared_crypto::Signer;
use shared_protos::Transaction;
use std::sync::Arc;
use std::time::Duration;
use tnt_01_addressing::{FamilyDescriptor, FamilyKey};
use tnt_03_transactions::{
    create_batch, create_namespace_transaction, create_transaction, encode_batch_list,
    encode_transaction_list, random_nonce, transaction_ids, PayloadInfo, SubmissionPayload,
};
use tracing::{debug, info, warn};

use crate::cancel::CancelSignal;
use crate::domain::{
    batch_id_from_link, evaluate, form_status_url, with_wait, GatewayConfig, PollOutcome,
};
use crate::error::SubmitError;
use crate::ports::{BatchSubmissionApi, LedgerGateway};

/// Long-polls batch status until a terminal outcome.
pub struct CommitWatcher<G: LedgerGateway> {
    gateway: Arc<G>,
    wait_secs: u64,
    poll_delay: Duration,
}

impl<G: LedgerGateway> Clone for CommitWatcher<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            wait_secs: self.wait_secs,
            poll_delay: self.poll_delay,
        }
    }
}

impl<G: LedgerGateway> CommitWatcher<G> {
    pub fn new(gateway: Arc<G>, wait_secs: u64) -> Self {
        Self {
            gateway,
            wait_secs,
            poll_delay: Duration::ZERO,
        }
    }

    /// Pause between polls that come back unsettled.
    pub fn with_poll_delay(mut self, poll_delay: Duration) -> Self {
        self.poll_delay = poll_delay;
        self
    }

    /// Poll `status_url` until the batch commits or is rejected.
    ///
    /// Indeterminate statuses are re-polled without bound. Transport errors
    /// end the wait immediately.
    pub async fn wait_for_commit(
        &self,
        transaction_ids: Vec<String>,
        status_url: &str,
        mut cancel: CancelSignal,
    ) -> Result<Vec<String>, SubmitError> {
        let url = with_wait(status_url, self.wait_secs);
        let mut polls: u64 = 0;

        loop {
            let response = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    info!(status_url, polls, "Commit wait cancelled");
                    return Err(SubmitError::Cancelled);
                }
                response = self.gateway.batch_statuses(&url) => response?,
            };
            polls += 1;

            match evaluate(&response, &transaction_ids) {
                PollOutcome::Committed => {
                    info!(
                        transaction_count = transaction_ids.len(),
                        polls, "Batch committed"
                    );
                    return Ok(transaction_ids);
                }
                PollOutcome::Rejected(message) => {
                    warn!(%message, polls, "Batch rejected by ledger");
                    return Err(SubmitError::Invalid(message));
                }
                PollOutcome::Pending => {
                    let status = response.data.first().map(|batch| batch.status);
                    debug!(?status, polls, "Batch not settled, polling again");
                    if self.poll_delay.is_zero() {
                        tokio::task::yield_now().await;
                    } else {
                        tokio::time::sleep(self.poll_delay).await;
                    }
                }
            }
        }
    }
}

/// Signs, submits and watches batches.
pub struct BatchSubmitter<G: LedgerGateway> {
    gateway: Arc<G>,
    watcher: CommitWatcher<G>,
}

impl<G: LedgerGateway> Clone for BatchSubmitter<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            watcher: self.watcher.clone(),
        }
    }
}

impl<G: LedgerGateway> BatchSubmitter<G> {
    pub fn new(gateway: Arc<G>, wait_secs: u64) -> Self {
        let watcher = CommitWatcher::new(Arc::clone(&gateway), wait_secs);
        Self { gateway, watcher }
    }

    pub fn from_config(gateway: Arc<G>, config: &GatewayConfig) -> Self {
        let watcher = CommitWatcher::new(Arc::clone(&gateway), config.wait_secs)
            .with_poll_delay(config.poll_delay);
        Self { gateway, watcher }
    }

    pub fn gateway(&self) -> &Arc<G> {
        &self.gateway
    }

    pub fn watcher(&self) -> &CommitWatcher<G> {
        &self.watcher
    }
}

#[async_trait]
impl<G: LedgerGateway + 'static> BatchSubmissionApi for BatchSubmitter<G> {
    async fn submit_batch(
        &self,
        transactions: Vec<Transaction>,
        signer: &dyn Signer,
        cancel: CancelSignal,
    ) -> Result<Vec<String>, SubmitError> {
        let ids = transaction_ids(&transactions);
        if ids.is_empty() {
            return Err(SubmitError::EmptyBatch);
        }

        let batch = create_batch(transactions, signer)?;
        let batch_id = batch.header_signature.clone();
        let body = encode_batch_list(vec![batch]);

        info!(%batch_id, transaction_count = ids.len(), "Submitting batch");
        let response = self.gateway.submit_batches(body).await?;

        let status_id = batch_id_from_link(&response.link)?;
        let status_url = form_status_url(self.gateway.gateway_url(), &status_id);
        self.watcher.wait_for_commit(ids, &status_url, cancel).await
    }

    async fn submit_transaction(
        &self,
        info: PayloadInfo,
        signer: &dyn Signer,
        family: FamilyKey,
        dispatched: &[&'static FamilyDescriptor],
        cancel: CancelSignal,
    ) -> Result<Vec<String>, SubmitError> {
        let transaction = create_transaction(info, Some(signer), family, dispatched)?;
        self.submit_batch(vec![transaction], signer, cancel).await
    }

    async fn submit_transaction_list(
        &self,
        payloads: &[SubmissionPayload],
        signer: &dyn Signer,
        wait: bool,
    ) -> Result<Vec<String>, SubmitError> {
        if payloads.is_empty() {
            return Err(SubmitError::EmptyBatch);
        }

        let transactions = payloads
            .iter()
            .map(|payload| create_namespace_transaction(payload, Some(signer), random_nonce()))
            .collect::<Result<Vec<_>, _>>()?;
        let ids = transaction_ids(&transactions);

        info!(transaction_count = ids.len(), wait, "Submitting transaction list");
        let response = self
            .gateway
            .submit_transaction_list(encode_transaction_list(transactions), wait)
            .await?;
        debug!(%response, "Transaction list accepted");

        Ok(ids)
    }
}
