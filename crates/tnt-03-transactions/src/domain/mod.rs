//! Domain Layer - transaction and batch assembly.
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod batch;
pub mod decode;
pub mod namespace;
pub mod transaction;

pub use batch::{create_batch, encode_batch_list, transaction_ids};
pub use decode::{decode_header, unwrap_dispatch};
pub use namespace::{
    create_namespace_transaction, encode_transaction_list, random_nonce, SubmissionPayload,
};
pub use transaction::{create_transaction, dispatch_addresses, PayloadInfo, TransactionBuilder};
