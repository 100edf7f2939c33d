//! # Hashlink Transforms
//!
//! Thin adapters wrapping hash and base-encoding crates as hashlink
//! [`Digest`](hashlink_core::Digest) and [`Encoding`](hashlink_core::Encoding)
//! transforms.
//!
//! | name            | kind     | tag / prefix |
//! |-----------------|----------|--------------|
//! | `mh-sha2-256`   | digest   | `12 20`      |
//! | `mh-blake2b-64` | digest   | `b2 08 08`   |
//! | `mh-blake3`     | digest   | `1e 20`      |
//! | `mb-base58-btc` | encoding | `z`          |
//! | `mb-base32`     | encoding | `b`          |

pub mod digest;
pub mod encoding;

use hashlink_core::{Result, Transform, TransformRegistry};

pub use digest::{Blake2b64, Blake3, Sha2_256};
pub use encoding::{Base32, Base58Btc};

/// Registered transform names.
pub mod names {
    pub const SHA2_256: &str = "mh-sha2-256";
    pub const BLAKE2B_64: &str = "mh-blake2b-64";
    pub const BLAKE3: &str = "mh-blake3";
    pub const BASE58_BTC: &str = "mb-base58-btc";
    pub const BASE32: &str = "mb-base32";
}

/// Every bundled transform paired with its registered name.
pub fn bundled() -> Vec<(&'static str, Transform)> {
    vec![
        (names::SHA2_256, Transform::digest(Sha2_256)),
        (names::BLAKE2B_64, Transform::digest(Blake2b64)),
        (names::BLAKE3, Transform::digest(Blake3)),
        (names::BASE58_BTC, Transform::encoding(Base58Btc)),
        (names::BASE32, Transform::encoding(Base32)),
    ]
}

/// Register every bundled transform.
///
/// Fails with `DuplicateTransform` if any bundled name is already taken.
pub fn register_bundled(registry: &mut TransformRegistry) -> Result<()> {
    for (name, transform) in bundled() {
        registry.register(name, transform)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashlink_core::HashlinkError;

    #[test]
    fn test_register_bundled() {
        let mut registry = TransformRegistry::new();
        register_bundled(&mut registry).unwrap();
        assert_eq!(
            registry.names(),
            vec!["mb-base32", "mb-base58-btc", "mh-blake2b-64", "mh-blake3", "mh-sha2-256"]
        );

        let err = register_bundled(&mut registry).unwrap_err();
        assert!(matches!(err, HashlinkError::DuplicateTransform(_)));
    }
}
