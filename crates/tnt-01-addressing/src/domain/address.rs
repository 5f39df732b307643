//! Address derivation functions.

use shared_crypto::sha512_hex_prefix;
use std::fmt;

/// Length of every state address in hex characters.
pub const ADDRESS_LEN: usize = 70;

pub const AGENT_PREFIX: &str = "cad11d00";
pub const ORGANIZATION_PREFIX: &str = "cad11d01";
pub const SCHEMA_PREFIX: &str = "621dee01";
pub const RECORD_PREFIX: &str = "a43b46ec";
pub const PROPERTY_PREFIX: &str = "a43b46ea";
pub const PROPOSAL_PREFIX: &str = "a43b46aa";
pub const NAMESPACE_REGISTRY_PREFIX: &str = "00ec00";
pub const CONTRACT_REGISTRY_PREFIX: &str = "00ec01";
pub const CONTRACT_PREFIX: &str = "00ec02";

/// Property page holding the pointer to the current reported value.
pub const CURRENT_PAGE: u16 = 0;
/// First page of reported value history.
pub const HISTORY_PAGE: u16 = 1;

/// A 70-char hex state address.
///
/// Only built by the functions in this module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    fn compose(parts: &[&str]) -> Self {
        Self(parts.concat())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl PartialEq<str> for Address {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Address {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// First `len` chars of the SHA-512 hex digest of `input`.
pub fn hash(input: &str, len: usize) -> String {
    sha512_hex_prefix(input, len)
}

pub fn agent_address(public_key: &str) -> Address {
    Address::compose(&[AGENT_PREFIX, &hash(public_key, 62)])
}

pub fn organization_address(org_id: &str) -> Address {
    Address::compose(&[ORGANIZATION_PREFIX, &hash(org_id, 62)])
}

pub fn schema_address(name: &str) -> Address {
    Address::compose(&[SCHEMA_PREFIX, &hash(name, 62)])
}

pub fn record_address(record_id: &str) -> Address {
    Address::compose(&[RECORD_PREFIX, &hash(record_id, 62)])
}

/// Address of one page of a record property.
///
/// Page [`CURRENT_PAGE`] points at the latest value, pages from
/// [`HISTORY_PAGE`] on hold reported history.
pub fn property_address(record_id: &str, property_name: &str, page: u16) -> Address {
    Address::compose(&[
        PROPERTY_PREFIX,
        &hash(record_id, 36),
        &hash(property_name, 22),
        &format!("{page:04x}"),
    ])
}

pub fn proposal_address(record_id: &str, receiving_agent: &str) -> Address {
    Address::compose(&[
        PROPOSAL_PREFIX,
        &hash(record_id, 36),
        &hash(receiving_agent, 26),
    ])
}

pub fn contract_registry_address(contract_name: &str) -> Address {
    Address::compose(&[CONTRACT_REGISTRY_PREFIX, &hash(contract_name, 64)])
}

pub fn contract_address(contract_name: &str, version: &str) -> Address {
    Address::compose(&[
        CONTRACT_PREFIX,
        &hash(&format!("{contract_name},{version}"), 64),
    ])
}

/// Sabre namespace registry entry covering `namespace`.
///
/// Only the first 6 chars of `namespace` are significant, so a full state
/// address may be passed.
pub fn namespace_registry_address(namespace: &str) -> Address {
    let prefix: String = namespace.chars().take(6).collect();
    Address::compose(&[NAMESPACE_REGISTRY_PREFIX, &hash(&prefix, 64)])
}

/// Current-page addresses for each property, in input order.
pub fn property_addresses<S: AsRef<str>>(record_id: &str, names: &[S]) -> Vec<Address> {
    property_page_addresses(record_id, names, CURRENT_PAGE)
}

/// Addresses of `page` for each property, in input order.
pub fn property_page_addresses<S: AsRef<str>>(
    record_id: &str,
    names: &[S],
    page: u16,
) -> Vec<Address> {
    names
        .iter()
        .map(|name| property_address(record_id, name.as_ref(), page))
        .collect()
}
