//! Encode an action and wrap it in a signed, dispatched transaction.

use shared_crypto::Signer;
use shared_protos::Transaction;
use tnt_01_addressing::FamilyDescriptor;
use tnt_02_payloads::{encode, PayloadAction};
use tnt_03_transactions::{create_transaction, PayloadInfo};

use crate::error::ServiceError;

pub(crate) fn sign_action(
    signer: &dyn Signer,
    action: &PayloadAction,
    inputs: Vec<String>,
    outputs: Vec<String>,
    dispatched: &[&'static FamilyDescriptor],
) -> Result<Transaction, ServiceError> {
    let payload = encode(action)?;
    let info = PayloadInfo {
        payload,
        inputs,
        outputs,
    };
    Ok(create_transaction(
        info,
        Some(signer),
        action.family(),
        dispatched,
    )?)
}
