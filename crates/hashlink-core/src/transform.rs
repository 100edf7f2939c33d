//! Transform capabilities: digesting and encoding.
//!
//! A hashlink is produced by running the resource bytes through one
//! [`Digest`] and rendering the result with one [`Encoding`]. Both are
//! supplied by callers (or by the bundled adapters) and registered by name.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::error::TransformError;

/// Name namespace for digest transforms.
pub const DIGEST_NAMESPACE: &str = "mh-";

/// Name namespace for encoding transforms.
pub const ENCODING_NAMESPACE: &str = "mb-";

/// A hash primitive producing self-describing (tagged) digests.
#[async_trait]
pub trait Digest: Send + Sync {
    /// Fixed prefix identifying the algorithm and digest length.
    ///
    /// For example `[0x12, 0x20]` for SHA2-256.
    fn tag(&self) -> &[u8];

    /// Compute `tag || digest(data)`.
    async fn digest(&self, data: &[u8]) -> Result<TaggedDigest, TransformError>;
}

/// A base encoding producing printable, prefix-tagged strings.
#[async_trait]
pub trait Encoding: Send + Sync {
    /// Single character identifying the base scheme (multibase prefix).
    fn prefix(&self) -> char;

    /// Encode bytes; the output starts with [`Encoding::prefix`].
    async fn encode(&self, data: &[u8]) -> Result<String, TransformError>;

    /// Inverse of [`Encoding::encode`]; expects the prefix to be present.
    async fn decode(&self, text: &str) -> Result<Vec<u8>, TransformError>;
}

/// The kind of a registered transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Digest,
    Encoding,
}

impl TransformKind {
    /// Name namespace expected for this kind.
    pub fn namespace(self) -> &'static str {
        match self {
            TransformKind::Digest => DIGEST_NAMESPACE,
            TransformKind::Encoding => ENCODING_NAMESPACE,
        }
    }

    /// Infer the kind from a namespaced name, if it carries a known namespace.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.starts_with(DIGEST_NAMESPACE) {
            Some(TransformKind::Digest)
        } else if name.starts_with(ENCODING_NAMESPACE) {
            Some(TransformKind::Encoding)
        } else {
            None
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformKind::Digest => f.write_str("digest"),
            TransformKind::Encoding => f.write_str("encoding"),
        }
    }
}

/// A registrable transform. Cheap to clone.
#[derive(Clone)]
pub enum Transform {
    Digest(Arc<dyn Digest>),
    Encoding(Arc<dyn Encoding>),
}

impl Transform {
    /// Wrap a digest implementation.
    pub fn digest(digest: impl Digest + 'static) -> Self {
        Transform::Digest(Arc::new(digest))
    }

    /// Wrap an encoding implementation.
    pub fn encoding(encoding: impl Encoding + 'static) -> Self {
        Transform::Encoding(Arc::new(encoding))
    }

    pub fn kind(&self) -> TransformKind {
        match self {
            Transform::Digest(_) => TransformKind::Digest,
            Transform::Encoding(_) => TransformKind::Encoding,
        }
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Digest(d) => write!(f, "Transform::Digest(tag={})", hex::encode(d.tag())),
            Transform::Encoding(e) => write!(f, "Transform::Encoding(prefix={:?})", e.prefix()),
        }
    }
}

/// Digest bytes prefixed with the algorithm tag.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TaggedDigest(pub Vec<u8>);

impl TaggedDigest {
    /// Concatenate `tag` and the raw digest.
    pub fn new(tag: &[u8], digest: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(tag.len() + digest.len());
        bytes.extend_from_slice(tag);
        bytes.extend_from_slice(digest);
        Self(bytes)
    }

    /// Get the raw bytes (tag included).
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Whether this digest carries the given algorithm tag.
    pub fn has_tag(&self, tag: &[u8]) -> bool {
        !tag.is_empty() && self.0.starts_with(tag)
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for TaggedDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TaggedDigest({})", self.to_hex())
    }
}

impl AsRef<[u8]> for TaggedDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for TaggedDigest {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_name() {
        assert_eq!(TransformKind::from_name("mh-sha2-256"), Some(TransformKind::Digest));
        assert_eq!(TransformKind::from_name("mb-base58-btc"), Some(TransformKind::Encoding));
        assert_eq!(TransformKind::from_name("sha2-256"), None);
    }

    #[test]
    fn test_tagged_digest_layout() {
        let d = TaggedDigest::new(&[0x12, 0x20], &[0xab; 32]);
        assert_eq!(d.as_bytes().len(), 34);
        assert!(d.has_tag(&[0x12, 0x20]));
        assert!(!d.has_tag(&[0xb2, 0x08, 0x08]));
        assert!(!d.has_tag(&[]));
        assert!(d.to_hex().starts_with("1220abab"));
    }
}
