//! Decoding helpers for inspecting built transactions.

use crate::error::TransactionError;
use shared_protos::{
    ExecuteContractAction, Message, SabrePayload, Transaction, TransactionHeader,
};

/// Decode the header of `transaction`.
pub fn decode_header(transaction: &Transaction) -> Result<TransactionHeader, TransactionError> {
    TransactionHeader::decode(transaction.header.as_slice()).map_err(|e| TransactionError::Decode {
        what: "transaction header",
        reason: e.to_string(),
    })
}

/// Unwrap the Sabre execute-contract action carried by `transaction`.
pub fn unwrap_dispatch(transaction: &Transaction) -> Result<ExecuteContractAction, TransactionError> {
    let payload = SabrePayload::decode(transaction.payload.as_slice()).map_err(|e| {
        TransactionError::Decode {
            what: "sabre payload",
            reason: e.to_string(),
        }
    })?;
    payload.execute_contract.ok_or_else(|| TransactionError::Decode {
        what: "sabre payload",
        reason: "no execute_contract action".to_string(),
    })
}
