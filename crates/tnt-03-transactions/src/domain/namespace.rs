//! Direct namespace transactions, submitted without Sabre dispatch.

use crate::error::TransactionError;
use shared_crypto::{sha512_hex, Signer};
use shared_protos::{Message, Transaction, TransactionHeader, TransactionList};
use tnt_01_addressing::FamilyKey;
use tracing::debug;

/// A payload headed for direct submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionPayload {
    /// Bare payload bytes, targeting Track-and-Trace.
    Raw(Vec<u8>),
    /// Payload bytes for an explicit family.
    Family { family: FamilyKey, bytes: Vec<u8> },
}

impl SubmissionPayload {
    pub fn family(&self) -> FamilyKey {
        match self {
            Self::Raw(_) => FamilyKey::TrackAndTrace,
            Self::Family { family, .. } => *family,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        match self {
            Self::Raw(bytes) => bytes,
            Self::Family { bytes, .. } => bytes,
        }
    }
}

impl From<Vec<u8>> for SubmissionPayload {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Raw(bytes)
    }
}

/// Random transaction nonce.
pub fn random_nonce() -> String {
    hex::encode(rand::random::<[u8; 8]>())
}

/// Build a transaction addressed to the family itself, with the family
/// namespace as its only input and output.
pub fn create_namespace_transaction(
    payload: &SubmissionPayload,
    signer: Option<&dyn Signer>,
    nonce: String,
) -> Result<Transaction, TransactionError> {
    let signer = signer.ok_or(TransactionError::MissingSigner)?;
    let family = payload.family().descriptor();
    let public_key = signer.public_key_hex();

    let header = TransactionHeader {
        batcher_public_key: public_key.clone(),
        dependencies: Vec::new(),
        family_name: family.name.to_string(),
        family_version: family.version.to_string(),
        inputs: vec![family.namespace.to_string()],
        nonce,
        outputs: vec![family.namespace.to_string()],
        payload_sha512: sha512_hex(payload.bytes()),
        signer_public_key: public_key,
    }
    .encode_to_vec();

    let header_signature = signer.sign_hex(&header)?;
    debug!(transaction_id = %header_signature, family = family.name, "Created namespace transaction");

    Ok(Transaction {
        header,
        header_signature,
        payload: payload.bytes().to_vec(),
    })
}

/// Serialize transactions as a `TransactionList`.
pub fn encode_transaction_list(transactions: Vec<Transaction>) -> Vec<u8> {
    TransactionList { transactions }.encode_to_vec()
}
