//! # Sealed Signing Keys
//!
//! A user's private key is stored by the application server only in sealed
//! form, encrypted under the account password.
//!
//! ## Format
//!
//! `hex(nonce || ciphertext)`: a random 24-byte XChaCha20-Poly1305 nonce,
//! then the sealed hex private key. The cipher key is derived from the
//! password with BLAKE3 in key-derivation mode.

use crate::CryptoError;
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    Key, XChaCha20Poly1305, XNonce,
};
use rand::RngCore;
use zeroize::Zeroizing;

const KEY_DERIVATION_CONTEXT: &str = "track-and-trace client 2024 sealed signing key";
const NONCE_LEN: usize = 24;

fn cipher(password: &str) -> XChaCha20Poly1305 {
    let key = Zeroizing::new(blake3::derive_key(KEY_DERIVATION_CONTEXT, password.as_bytes()));
    XChaCha20Poly1305::new(Key::from_slice(&key[..]))
}

/// Seal a hex private key under `password`.
pub fn seal_private_key(password: &str, private_key_hex: &str) -> Result<String, CryptoError> {
    let mut nonce = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce);

    let ciphertext = cipher(password)
        .encrypt(XNonce::from_slice(&nonce), private_key_hex.as_bytes())
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    Ok(hex::encode(sealed))
}

/// Recover the hex private key sealed by [`seal_private_key`].
///
/// # Errors
///
/// `MalformedSealedKey` when the input is not hex or holds no ciphertext,
/// `DecryptionFailed` when the password is wrong or the data was altered.
pub fn open_private_key(password: &str, sealed_hex: &str) -> Result<String, CryptoError> {
    let sealed = hex::decode(sealed_hex).map_err(|_| CryptoError::MalformedSealedKey)?;
    if sealed.len() <= NONCE_LEN {
        return Err(CryptoError::MalformedSealedKey);
    }
    let (nonce, ciphertext) = sealed.split_at(NONCE_LEN);

    let plaintext = Zeroizing::new(
        cipher(password)
            .decrypt(XNonce::from_slice(nonce), ciphertext)
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?,
    );
    std::str::from_utf8(&plaintext)
        .map(str::to_string)
        .map_err(|_| CryptoError::DecryptionFailed("sealed key is not utf-8".into()))
}
