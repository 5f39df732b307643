//! # Shared Crypto
//!
//! Cryptographic primitives used to build and authorize ledger submissions.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `signing` | secp256k1 ECDSA | Transaction and batch header signatures |
//! | `hashing` | SHA-512 | Payload digests, state address derivation |
//! | `symmetric` | XChaCha20-Poly1305 | Sealing a private key under a password |
//!
//! ## Signing Scheme
//!
//! Headers are signed the way the Sawtooth SDK signs them: the message is
//! hashed with SHA-256, signed with RFC 6979 deterministic nonces, and the
//! 64-byte compact `r || s` signature is low-S normalized. Public keys travel
//! as hex of the 33-byte compressed SEC1 point.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;
pub mod signing;
pub mod symmetric;

// Re-exports
pub use errors::CryptoError;
pub use hashing::{sha512_hex, sha512_hex_prefix};
pub use signing::{verify_signature, Secp256k1Signer, Signer};
pub use symmetric::{open_private_key, seal_private_key};
