//! # TNT-03 Transactions
//!
//! Builds signed ledger transactions and batches.
//!
//! ## Dispatch Envelope
//!
//! Contract payloads are not submitted to their family directly. Each one is
//! wrapped in a Sabre `ExecuteContractAction` naming the target contract,
//! and the transaction header targets the `sabre` family:
//!
//! ```text
//! inputs  = registry(f) for f in dispatched
//!         ++ contract(f) for f in dispatched
//!         ++ namespace_registry(a) for a in raw inputs
//!         ++ raw inputs
//! ```
//!
//! Outputs follow the same layout. The header signature is the
//! transaction id.
//!
//! ## Direct Submission
//!
//! [`SubmissionPayload`] payloads skip Sabre: the header names the family
//! and its namespace, with a random nonce. These travel as a
//! `TransactionList`.
//!
//! ## Invariants
//!
//! - A missing signer fails before anything is encoded.
//! - `payload_sha512` is the SHA-512 hex of the exact payload bytes.
//! - A batch keeps its transactions in submission order and is never empty.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::{BatchError, TransactionError};
pub use tnt_01_addressing::FamilyKey;
