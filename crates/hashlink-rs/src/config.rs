//! Instance configuration.

use hashlink_transforms::names;

/// The digest and encoding used to build a hashlink, in that order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransformPair {
    /// Name of a registered digest transform (`mh-*`).
    pub digest: String,
    /// Name of a registered encoding transform (`mb-*`).
    pub encoding: String,
}

impl TransformPair {
    pub fn new(digest: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self {
            digest: digest.into(),
            encoding: encoding.into(),
        }
    }
}

impl Default for TransformPair {
    /// SHA2-256 rendered as base58-btc.
    fn default() -> Self {
        Self::new(names::SHA2_256, names::BASE58_BTC)
    }
}

/// Configuration for a [`Hashlink`](crate::Hashlink) instance.
#[derive(Debug, Clone, Default)]
pub struct HashlinkConfig {
    /// Transforms used when `CreateOptions` names none.
    ///
    /// `None` makes `transforms` mandatory on every `create` call.
    pub default_transforms: Option<TransformPair>,
}

impl HashlinkConfig {
    /// Configuration used by [`Hashlink::bundled`](crate::Hashlink::bundled).
    pub fn bundled() -> Self {
        Self {
            default_transforms: Some(TransformPair::default()),
        }
    }
}
