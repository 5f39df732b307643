//! # SHA-512 Hashing
//!
//! Hex digests used for payload integrity and state addressing.

use sha2::{Digest, Sha512};

/// Lowercase hex SHA-512 digest (128 characters).
pub fn sha512_hex(data: impl AsRef<[u8]>) -> String {
    hex::encode(Sha512::digest(data.as_ref()))
}

/// First `len` characters of the hex SHA-512 digest.
///
/// `len` saturates at the full digest length.
pub fn sha512_hex_prefix(data: impl AsRef<[u8]>, len: usize) -> String {
    let mut digest = sha512_hex(data);
    digest.truncate(len);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            sha512_hex(b"abc"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
    }

    #[test]
    fn test_prefix_truncates() {
        let prefix = sha512_hex_prefix(b"abc", 6);
        assert_eq!(prefix, "ddaf35");
    }

    #[test]
    fn test_prefix_saturates() {
        assert_eq!(sha512_hex_prefix(b"abc", 500).len(), 128);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sha512_hex(b"").len(), 128);
    }

    proptest::proptest! {
        #[test]
        fn prop_prefix_is_prefix_of_digest(data in proptest::collection::vec(proptest::num::u8::ANY, 0..256), len in 0usize..200) {
            let full = sha512_hex(&data);
            let prefix = sha512_hex_prefix(&data, len);
            proptest::prop_assert!(full.starts_with(&prefix));
            proptest::prop_assert_eq!(prefix.len(), len.min(128));
        }
    }
}
