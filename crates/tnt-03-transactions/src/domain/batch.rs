//! Batch assembly.

use crate::error::BatchError;
use shared_crypto::Signer;
use shared_protos::{Batch, BatchHeader, BatchList, Message, Transaction};
use tracing::debug;

/// Ids of `transactions`, in order.
pub fn transaction_ids(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .map(|txn| txn.header_signature.clone())
        .collect()
}

/// Sign a batch over `transactions`, keeping their order.
pub fn create_batch(transactions: Vec<Transaction>, signer: &dyn Signer) -> Result<Batch, BatchError> {
    if transactions.is_empty() {
        return Err(BatchError::EmptyBatch);
    }

    let header = BatchHeader {
        signer_public_key: signer.public_key_hex(),
        transaction_ids: transaction_ids(&transactions),
    }
    .encode_to_vec();
    let header_signature = signer.sign_hex(&header)?;

    debug!(
        batch_id = %header_signature,
        transaction_count = transactions.len(),
        "Created batch"
    );

    Ok(Batch {
        header,
        header_signature,
        transactions,
        trace: false,
    })
}

/// Serialize batches as a `BatchList`.
pub fn encode_batch_list(batches: Vec<Batch>) -> Vec<u8> {
    BatchList { batches }.encode_to_vec()
}
