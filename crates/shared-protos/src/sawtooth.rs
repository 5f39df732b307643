//! # Sawtooth Envelope
//!
//! Transaction and batch messages accepted by the validator REST API.

/// Header of a single transaction. Its serialized bytes are what the
/// signer signs; the signature becomes the transaction id.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionHeader {
    #[prost(string, tag = "1")]
    pub batcher_public_key: String,
    #[prost(string, repeated, tag = "2")]
    pub dependencies: Vec<String>,
    #[prost(string, tag = "3")]
    pub family_name: String,
    #[prost(string, tag = "4")]
    pub family_version: String,
    #[prost(string, repeated, tag = "5")]
    pub inputs: Vec<String>,
    #[prost(string, tag = "6")]
    pub nonce: String,
    #[prost(string, repeated, tag = "7")]
    pub outputs: Vec<String>,
    #[prost(string, tag = "9")]
    pub payload_sha512: String,
    #[prost(string, tag = "10")]
    pub signer_public_key: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transaction {
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    #[prost(string, tag = "2")]
    pub header_signature: String,
    #[prost(bytes = "vec", tag = "3")]
    pub payload: Vec<u8>,
}

/// Unbatched transactions, for gateways that batch server side.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransactionList {
    #[prost(message, repeated, tag = "1")]
    pub transactions: Vec<Transaction>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchHeader {
    #[prost(string, tag = "1")]
    pub signer_public_key: String,
    /// Header signatures of the batched transactions, in commit order.
    #[prost(string, repeated, tag = "2")]
    pub transaction_ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Batch {
    #[prost(bytes = "vec", tag = "1")]
    pub header: Vec<u8>,
    #[prost(string, tag = "2")]
    pub header_signature: String,
    #[prost(message, repeated, tag = "3")]
    pub transactions: Vec<Transaction>,
    #[prost(bool, tag = "4")]
    pub trace: bool,
}

/// The unit POSTed to `/batches`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BatchList {
    #[prost(message, repeated, tag = "1")]
    pub batches: Vec<Batch>,
}
