//! # secp256k1 Signing
//!
//! The [`Signer`] trait is the only capability the transaction pipeline
//! needs from the caller. [`Secp256k1Signer`] is the in-process
//! implementation; hardware or remote signers implement the same trait.
//!
//! ## Security Properties
//!
//! - RFC 6979 deterministic nonces (no RNG dependency for signing)
//! - Low-S normalization
//! - Secret key bytes are zeroized on drop

use crate::CryptoError;
use k256::ecdsa::{
    signature::{Signer as _, Verifier as _},
    Signature, SigningKey, VerifyingKey,
};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use zeroize::Zeroize;

/// A key pair able to authorize ledger submissions.
///
/// Implementations must be usable from several in-flight operations at once,
/// hence `Send + Sync`; signing never mutates the signer.
pub trait Signer: Send + Sync {
    /// Hex of the compressed public key. Used as both signer and batcher key.
    fn public_key_hex(&self) -> String;

    /// Sign `message`, returning the 64-byte compact signature.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Sign `message` and hex-encode the result, the form used for header
    /// signatures and transaction ids.
    fn sign_hex(&self, message: &[u8]) -> Result<String, CryptoError> {
        self.sign(message).map(hex::encode)
    }
}

/// In-process secp256k1 signer.
pub struct Secp256k1Signer {
    signing_key: SigningKey,
    public_key_hex: String,
}

impl Secp256k1Signer {
    /// Generate a random key pair.
    pub fn generate() -> Self {
        Self::from_signing_key(SigningKey::random(&mut rand::thread_rng()))
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let signing_key = SigningKey::from_slice(bytes).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self::from_signing_key(signing_key))
    }

    /// Create from a hex encoded secret key (64 hex characters).
    pub fn from_hex(private_key_hex: &str) -> Result<Self, CryptoError> {
        let mut bytes = hex::decode(private_key_hex.trim()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        let signer = Self::from_bytes(&bytes);
        bytes.zeroize();
        signer
    }

    fn from_signing_key(signing_key: SigningKey) -> Self {
        let public_key_hex = hex::encode(
            signing_key
                .verifying_key()
                .to_encoded_point(true)
                .as_bytes(),
        );
        Self {
            signing_key,
            public_key_hex,
        }
    }

    /// Hex of the secret key, for sealing under a password.
    pub fn private_key_hex(&self) -> String {
        let mut bytes: [u8; 32] = self.signing_key.to_bytes().into();
        let encoded = hex::encode(bytes);
        bytes.zeroize();
        encoded
    }
}

impl Signer for Secp256k1Signer {
    fn public_key_hex(&self) -> String {
        self.public_key_hex.clone()
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let signature: Signature = self.signing_key.sign(message);
        Ok(signature.to_bytes().to_vec())
    }
}

impl std::fmt::Debug for Secp256k1Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secp256k1Signer")
            .field("public_key", &self.public_key_hex)
            .finish_non_exhaustive()
    }
}

/// Verify a hex signature over `message` against a hex compressed public key.
pub fn verify_signature(
    public_key_hex: &str,
    message: &[u8],
    signature_hex: &str,
) -> Result<(), CryptoError> {
    let key_bytes = hex::decode(public_key_hex).map_err(|_| CryptoError::InvalidPublicKey)?;
    let verifying_key =
        VerifyingKey::from_sec1_bytes(&key_bytes).map_err(|_| CryptoError::InvalidPublicKey)?;

    let sig_bytes = hex::decode(signature_hex).map_err(|_| CryptoError::InvalidSignature)?;
    let signature = Signature::from_slice(&sig_bytes).map_err(|_| CryptoError::InvalidSignature)?;

    verifying_key
        .verify(message, &signature)
        .map_err(|_| CryptoError::SignatureVerificationFailed)
}
