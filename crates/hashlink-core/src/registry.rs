//! Named transform registry.
//!
//! Registries are append-only: a name, once bound, keeps its transform for the
//! lifetime of the registry. Registration takes `&mut self`, so it cannot race
//! with lookups performed through a shared reference.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{HashlinkError, Result};
use crate::transform::{Digest, Encoding, TaggedDigest, Transform, TransformKind};

/// Grammar characters that an encoding prefix must never use.
const RESERVED_PREFIXES: &[char] = &[':'];

/// Holds named transforms.
#[derive(Debug, Default, Clone)]
pub struct TransformRegistry {
    entries: HashMap<String, Transform>,
}

impl TransformRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transform under `name`.
    ///
    /// Fails with [`HashlinkError::DuplicateTransform`] if the name is taken and
    /// with [`HashlinkError::InvalidTransform`] if the transform is unusable for
    /// its kind or the name's namespace contradicts the kind.
    pub fn register(&mut self, name: impl Into<String>, transform: Transform) -> Result<()> {
        let name = name.into();
        validate(&name, &transform)?;

        if self.entries.contains_key(&name) {
            return Err(HashlinkError::DuplicateTransform(name));
        }

        tracing::debug!(name = %name, kind = %transform.kind(), "registered transform");
        self.entries.insert(name, transform);
        Ok(())
    }

    /// Look up a transform by name.
    pub fn resolve(&self, name: &str) -> Result<&Transform> {
        self.entries
            .get(name)
            .ok_or_else(|| HashlinkError::UnknownTransform(name.to_string()))
    }

    /// Look up a transform that must be a digest.
    pub fn resolve_digest(&self, name: &str) -> Result<Arc<dyn Digest>> {
        match self.resolve(name)? {
            Transform::Digest(d) => Ok(Arc::clone(d)),
            Transform::Encoding(_) => Err(HashlinkError::InvalidOptions(format!(
                "{name} is an encoding transform, expected a digest"
            ))),
        }
    }

    /// Look up a transform that must be an encoding.
    pub fn resolve_encoding(&self, name: &str) -> Result<Arc<dyn Encoding>> {
        match self.resolve(name)? {
            Transform::Encoding(e) => Ok(Arc::clone(e)),
            Transform::Digest(_) => Err(HashlinkError::InvalidOptions(format!(
                "{name} is a digest transform, expected an encoding"
            ))),
        }
    }

    /// Find the encoding whose prefix introduces `segment`.
    ///
    /// Returns the registered name alongside the encoding.
    pub fn encoding_for_segment(&self, segment: &str) -> Result<(&str, Arc<dyn Encoding>)> {
        let prefix = segment
            .chars()
            .next()
            .ok_or_else(|| HashlinkError::MalformedHashlink("empty segment".into()))?;

        self.entries
            .iter()
            .filter_map(|(name, t)| match t {
                Transform::Encoding(e) if e.prefix() == prefix => Some((name.as_str(), e)),
                _ => None,
            })
            .min_by_key(|(name, _)| *name)
            .map(|(name, e)| (name, Arc::clone(e)))
            .ok_or(HashlinkError::UnsupportedEncoding(prefix))
    }

    /// Find the digest whose tag prefixes `tagged`.
    ///
    /// When several tags match, the longest (most specific) wins.
    pub fn digest_for_tagged(&self, tagged: &TaggedDigest) -> Result<(&str, Arc<dyn Digest>)> {
        self.entries
            .iter()
            .filter_map(|(name, t)| match t {
                Transform::Digest(d) if tagged.has_tag(d.tag()) => Some((name.as_str(), d)),
                _ => None,
            })
            .max_by(|(an, a), (bn, b)| a.tag().len().cmp(&b.tag().len()).then(bn.cmp(an)))
            .map(|(name, d)| (name, Arc::clone(d)))
            .ok_or_else(|| HashlinkError::UnsupportedDigest(tagged.to_hex()))
    }

    /// Whether a transform is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(name: &str, transform: &Transform) -> Result<()> {
    if name.is_empty() {
        return Err(HashlinkError::invalid_transform(name, "name must not be empty"));
    }

    let kind = transform.kind();
    if let Some(named_kind) = TransformKind::from_name(name) {
        if named_kind != kind {
            return Err(HashlinkError::invalid_transform(
                name,
                format!("{kind} transform registered under the {named_kind} namespace"),
            ));
        }
    }

    match transform {
        Transform::Digest(d) => {
            if d.tag().is_empty() {
                return Err(HashlinkError::invalid_transform(name, "digest tag is empty"));
            }
        }
        Transform::Encoding(e) => {
            let prefix = e.prefix();
            if !prefix.is_ascii_graphic() || RESERVED_PREFIXES.contains(&prefix) {
                return Err(HashlinkError::invalid_transform(
                    name,
                    format!("encoding prefix {prefix:?} collides with the hashlink grammar"),
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransformError;
    use async_trait::async_trait;

    struct FixedDigest(&'static [u8]);

    #[async_trait]
    impl Digest for FixedDigest {
        fn tag(&self) -> &[u8] {
            self.0
        }

        async fn digest(&self, data: &[u8]) -> std::result::Result<TaggedDigest, TransformError> {
            Ok(TaggedDigest::new(self.0, &[data.len() as u8]))
        }
    }

    struct HexEncoding(char);

    #[async_trait]
    impl Encoding for HexEncoding {
        fn prefix(&self) -> char {
            self.0
        }

        async fn encode(&self, data: &[u8]) -> std::result::Result<String, TransformError> {
            Ok(format!("{}{}", self.0, hex::encode(data)))
        }

        async fn decode(&self, text: &str) -> std::result::Result<Vec<u8>, TransformError> {
            let body = text
                .strip_prefix(self.0)
                .ok_or_else(|| TransformError::InvalidInput("missing prefix".into()))?;
            hex::decode(body).map_err(|e| TransformError::InvalidInput(e.to_string()))
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let mut registry = TransformRegistry::new();
        registry
            .register("mh-test", Transform::digest(FixedDigest(&[0x01, 0x01])))
            .unwrap();
        registry
            .register("mb-hex", Transform::encoding(HexEncoding('f')))
            .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["mb-hex", "mh-test"]);
        assert_eq!(registry.resolve("mh-test").unwrap().kind(), TransformKind::Digest);
        assert!(registry.resolve_encoding("mb-hex").is_ok());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = TransformRegistry::new();
        registry
            .register("mh-test", Transform::digest(FixedDigest(&[0x01, 0x01])))
            .unwrap();

        let err = registry
            .register("mh-test", Transform::digest(FixedDigest(&[0x02, 0x01])))
            .unwrap_err();
        assert!(matches!(err, HashlinkError::DuplicateTransform(name) if name == "mh-test"));

        // The original binding survives.
        let d = registry.resolve_digest("mh-test").unwrap();
        assert_eq!(d.tag(), &[0x01, 0x01]);
    }

    #[test]
    fn test_unknown_name() {
        let registry = TransformRegistry::new();
        let err = registry.resolve("mh-nope").unwrap_err();
        assert!(matches!(err, HashlinkError::UnknownTransform(name) if name == "mh-nope"));
    }

    #[test]
    fn test_wrong_kind_lookup() {
        let mut registry = TransformRegistry::new();
        registry
            .register("mb-hex", Transform::encoding(HexEncoding('f')))
            .unwrap();
        assert!(matches!(
            registry.resolve_digest("mb-hex"),
            Err(HashlinkError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_invalid_transforms_rejected() {
        let mut registry = TransformRegistry::new();

        let err = registry
            .register("mb-oops", Transform::digest(FixedDigest(&[0x01])))
            .unwrap_err();
        assert!(matches!(err, HashlinkError::InvalidTransform { .. }));

        let err = registry
            .register("mh-empty", Transform::digest(FixedDigest(&[])))
            .unwrap_err();
        assert!(matches!(err, HashlinkError::InvalidTransform { .. }));

        let err = registry
            .register("mb-colon", Transform::encoding(HexEncoding(':')))
            .unwrap_err();
        assert!(matches!(err, HashlinkError::InvalidTransform { .. }));

        let err = registry
            .register("mb-space", Transform::encoding(HexEncoding(' ')))
            .unwrap_err();
        assert!(matches!(err, HashlinkError::InvalidTransform { .. }));

        let err = registry
            .register("", Transform::encoding(HexEncoding('f')))
            .unwrap_err();
        assert!(matches!(err, HashlinkError::InvalidTransform { .. }));

        assert!(registry.is_empty());
    }

    #[test]
    fn test_reverse_lookups() {
        let mut registry = TransformRegistry::new();
        registry
            .register("mh-short", Transform::digest(FixedDigest(&[0x01])))
            .unwrap();
        registry
            .register("mh-long", Transform::digest(FixedDigest(&[0x01, 0x01])))
            .unwrap();
        registry
            .register("mb-hex", Transform::encoding(HexEncoding('f')))
            .unwrap();

        let (name, _) = registry.encoding_for_segment("fdeadbeef").unwrap();
        assert_eq!(name, "mb-hex");
        assert!(matches!(
            registry.encoding_for_segment("zabc"),
            Err(HashlinkError::UnsupportedEncoding('z'))
        ));

        let tagged = TaggedDigest::new(&[0x01, 0x01], &[0x05]);
        let (name, _) = registry.digest_for_tagged(&tagged).unwrap();
        assert_eq!(name, "mh-long");

        let unknown = TaggedDigest::new(&[0x99], &[0x05]);
        assert!(matches!(
            registry.digest_for_tagged(&unknown),
            Err(HashlinkError::UnsupportedDigest(_))
        ));
    }
}
