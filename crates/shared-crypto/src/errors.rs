//! Crypto error types.

use thiserror::Error;

/// Failures while signing, verifying or sealing keys.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Not 32 bytes of hex, or outside the curve order.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Not a SEC1-encoded secp256k1 point.
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Not hex, or not a 64-byte compact signature.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Well-formed signature that does not match the message and key.
    #[error("Signature verification failed")]
    SignatureVerificationFailed,

    /// AEAD failure while sealing.
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong password or tampered data.
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    /// Sealed key material is not hex or is too short.
    #[error("Malformed sealed key")]
    MalformedSealedKey,
}
