//! Multihash-tagged digest adapters.
//!
//! Each adapter prefixes the raw digest with a fixed tag naming the algorithm
//! and the digest length, so a verifier can tell which hash produced a
//! hashlink from the hashlink alone.

use async_trait::async_trait;
use blake2::digest::{Update, VariableOutput};
use blake2::Blake2bVar;
use sha2::{Digest as _, Sha256};

use hashlink_core::{Digest, TaggedDigest, TransformError};

/// SHA2-256: code `0x12`, 32 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha2_256;

impl Sha2_256 {
    pub const TAG: &'static [u8] = &[0x12, 0x20];
}

#[async_trait]
impl Digest for Sha2_256 {
    fn tag(&self) -> &[u8] {
        Self::TAG
    }

    async fn digest(&self, data: &[u8]) -> Result<TaggedDigest, TransformError> {
        Ok(TaggedDigest::new(Self::TAG, &Sha256::digest(data)))
    }
}

/// BLAKE2b with 64-bit output: code `0xb208`, 8 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake2b64;

impl Blake2b64 {
    pub const TAG: &'static [u8] = &[0xb2, 0x08, 0x08];
    const OUTPUT_LEN: usize = 8;
}

#[async_trait]
impl Digest for Blake2b64 {
    fn tag(&self) -> &[u8] {
        Self::TAG
    }

    async fn digest(&self, data: &[u8]) -> Result<TaggedDigest, TransformError> {
        let mut hasher = Blake2bVar::new(Self::OUTPUT_LEN)
            .map_err(|e| TransformError::Primitive(e.to_string()))?;
        hasher.update(data);

        let mut out = [0u8; Self::OUTPUT_LEN];
        hasher
            .finalize_variable(&mut out)
            .map_err(|e| TransformError::Primitive(e.to_string()))?;

        Ok(TaggedDigest::new(Self::TAG, &out))
    }
}

/// BLAKE3: code `0x1e`, 32 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3;

impl Blake3 {
    pub const TAG: &'static [u8] = &[0x1e, 0x20];
}

#[async_trait]
impl Digest for Blake3 {
    fn tag(&self) -> &[u8] {
        Self::TAG
    }

    async fn digest(&self, data: &[u8]) -> Result<TaggedDigest, TransformError> {
        Ok(TaggedDigest::new(Self::TAG, blake3::hash(data).as_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &[u8] = b"Hello World!";

    #[tokio::test]
    async fn test_sha2_256_known_vector() {
        let d = Sha2_256.digest(HELLO).await.unwrap();
        assert_eq!(
            d.to_hex(),
            "12207f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069"
        );
    }

    #[tokio::test]
    async fn test_blake2b_64_known_vector() {
        let d = Blake2b64.digest(HELLO).await.unwrap();
        assert_eq!(d.to_hex(), "b2080810e647d27758e111");
    }

    #[tokio::test]
    async fn test_blake3_layout() {
        let d = Blake3.digest(HELLO).await.unwrap();
        assert_eq!(d.as_bytes().len(), 34);
        assert!(d.has_tag(Blake3::TAG));
        assert_eq!(&d.as_bytes()[2..], blake3::hash(HELLO).as_bytes());
    }

    #[tokio::test]
    async fn test_empty_input() {
        assert_eq!(Sha2_256.digest(b"").await.unwrap().as_bytes().len(), 34);
        assert_eq!(Blake2b64.digest(b"").await.unwrap().as_bytes().len(), 11);
        assert_eq!(Blake3.digest(b"").await.unwrap().as_bytes().len(), 34);
    }
}
