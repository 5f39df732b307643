//! Sabre-dispatched transaction construction.

use crate::error::TransactionError;
use shared_crypto::{sha512_hex, Signer};
use shared_protos::sabre::sabre_payload;
use shared_protos::{ExecuteContractAction, Message, SabrePayload, Transaction, TransactionHeader};
use tnt_01_addressing::{
    contract_address, contract_registry_address, namespace_registry_address, FamilyDescriptor,
    FamilyKey, SABRE,
};
use tracing::debug;

/// Contract payload plus the state it reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PayloadInfo {
    pub payload: Vec<u8>,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

impl PayloadInfo {
    pub fn new<I, O, A, B>(payload: Vec<u8>, inputs: I, outputs: O) -> Self
    where
        I: IntoIterator<Item = A>,
        O: IntoIterator<Item = B>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            payload,
            inputs: inputs.into_iter().map(Into::into).collect(),
            outputs: outputs.into_iter().map(Into::into).collect(),
        }
    }
}

/// Full address list for a dispatched transaction.
///
/// Order: contract registry entries for each dispatched family, their
/// contract entries, a namespace registry entry per raw address, then the
/// raw addresses themselves.
pub fn dispatch_addresses(dispatched: &[&FamilyDescriptor], raw: &[String]) -> Vec<String> {
    let mut addresses = Vec::with_capacity(dispatched.len() * 2 + raw.len() * 2);
    addresses.extend(
        dispatched
            .iter()
            .map(|family| contract_registry_address(family.name).into_string()),
    );
    addresses.extend(
        dispatched
            .iter()
            .map(|family| contract_address(family.name, family.version).into_string()),
    );
    addresses.extend(
        raw.iter()
            .map(|address| namespace_registry_address(address).into_string()),
    );
    addresses.extend(raw.iter().cloned());
    addresses
}

/// Wrap `info` for `family`, dispatch it through Sabre and sign the header.
///
/// `dispatched` lists the contract families whose registry and contract
/// entries the transaction touches; empty means the target family alone.
pub fn create_transaction(
    info: PayloadInfo,
    signer: Option<&dyn Signer>,
    family: FamilyKey,
    dispatched: &[&FamilyDescriptor],
) -> Result<Transaction, TransactionError> {
    let signer = signer.ok_or(TransactionError::MissingSigner)?;
    let target = family.descriptor();
    let dispatched: Vec<&FamilyDescriptor> = if dispatched.is_empty() {
        vec![target]
    } else {
        dispatched.to_vec()
    };

    let inputs = dispatch_addresses(&dispatched, &info.inputs);
    let outputs = dispatch_addresses(&dispatched, &info.outputs);

    let sabre_payload = SabrePayload {
        action: sabre_payload::Action::ExecuteContract as i32,
        execute_contract: Some(ExecuteContractAction {
            name: target.name.to_string(),
            version: target.version.to_string(),
            inputs: info.inputs,
            outputs: info.outputs,
            payload: info.payload,
        }),
    }
    .encode_to_vec();

    let public_key = signer.public_key_hex();
    let header = TransactionHeader {
        batcher_public_key: public_key.clone(),
        dependencies: Vec::new(),
        family_name: SABRE.name.to_string(),
        family_version: SABRE.version.to_string(),
        inputs,
        nonce: String::new(),
        outputs,
        payload_sha512: sha512_hex(&sabre_payload),
        signer_public_key: public_key,
    }
    .encode_to_vec();

    let header_signature = signer.sign_hex(&header)?;
    debug!(
        transaction_id = %header_signature,
        family = %family,
        dispatched = dispatched.len(),
        "Created transaction"
    );

    Ok(Transaction {
        header,
        header_signature,
        payload: sabre_payload,
    })
}

/// Step-wise form of [`create_transaction`].
#[derive(Default)]
pub struct TransactionBuilder<'a> {
    info: PayloadInfo,
    family: Option<FamilyKey>,
    dispatched: Vec<&'static FamilyDescriptor>,
    signer: Option<&'a dyn Signer>,
}

impl<'a> TransactionBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target family. Defaults to Track-and-Trace.
    pub fn family(mut self, family: FamilyKey) -> Self {
        self.family = Some(family);
        self
    }

    pub fn payload(mut self, payload: Vec<u8>) -> Self {
        self.info.payload = payload;
        self
    }

    pub fn inputs<I, A>(mut self, inputs: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.info.inputs = inputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn outputs<I, A>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.info.outputs = outputs.into_iter().map(Into::into).collect();
        self
    }

    pub fn dispatch(mut self, families: &[&'static FamilyDescriptor]) -> Self {
        self.dispatched = families.to_vec();
        self
    }

    pub fn signer(mut self, signer: &'a dyn Signer) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn build(self) -> Result<Transaction, TransactionError> {
        create_transaction(
            self.info,
            self.signer,
            self.family.unwrap_or(FamilyKey::TrackAndTrace),
            &self.dispatched,
        )
    }
}
