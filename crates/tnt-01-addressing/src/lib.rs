//! # TNT-01 Addressing
//!
//! State address derivation for the Pike, Schema and Track-and-Trace
//! contracts and for the Sabre registries that front them.
//!
//! ## Address Layout
//!
//! Every address is 70 lowercase hex characters: a 6-char namespace, an
//! optional 2-char type infix, then truncated SHA-512 hex digests of the
//! identifying fields.
//!
//! ```text
//! agent         cad11d 00 hash(public_key, 62)
//! organization  cad11d 01 hash(org_id, 62)
//! schema        621dee 01 hash(name, 62)
//! record        a43b46 ec hash(record_id, 62)
//! property      a43b46 ea hash(record_id, 36) hash(name, 22) page(4)
//! proposal      a43b46 aa hash(record_id, 36) hash(agent, 26)
//! ns registry   00ec00    hash(namespace[..6], 64)
//! registry      00ec01    hash(contract_name, 64)
//! contract      00ec02    hash("name,version", 64)
//! ```
//!
//! ## Invariants
//!
//! - Functions are total and deterministic: same input, same address.
//! - Inputs are not validated; the ledger rejects bad references.

pub mod domain;

pub use domain::address::{
    agent_address, contract_address, contract_registry_address, hash, namespace_registry_address,
    organization_address, property_address, property_addresses, property_page_addresses,
    proposal_address, record_address, schema_address, Address, ADDRESS_LEN, AGENT_PREFIX,
    CONTRACT_PREFIX, CONTRACT_REGISTRY_PREFIX, CURRENT_PAGE, HISTORY_PAGE,
    NAMESPACE_REGISTRY_PREFIX, ORGANIZATION_PREFIX, PROPERTY_PREFIX, PROPOSAL_PREFIX,
    RECORD_PREFIX, SCHEMA_PREFIX,
};
pub use domain::families::{FamilyDescriptor, FamilyKey, PIKE, SABRE, SCHEMA, TRACK_AND_TRACE};
