//! The Hashlink instance: assembles, verifies and decodes identifiers.
//!
//! An instance owns a [`TransformRegistry`]. Registration needs `&mut self`;
//! everything else works through a shared reference, so a populated instance
//! can be shared freely between tasks.

use hashlink_core::{
    parse, Digest, Encoding, HashlinkError, MetadataBlock, ParsedHashlink, Result, TaggedDigest,
    Transform, TransformError, TransformRegistry, SEPARATOR,
};

use crate::config::{HashlinkConfig, TransformPair};
use crate::options::CreateOptions;

/// A hashlink decoded back into its digest and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedHashlink {
    /// The tagged digest carried by the digest segment.
    pub digest: TaggedDigest,
    /// Registered name of the digest transform matching the tag, if any.
    pub digest_transform: Option<String>,
    /// Registered name of the encoding used by the segments.
    pub encoding_transform: String,
    /// URLs and metadata; empty when the hashlink has no metadata segment.
    pub metadata: MetadataBlock,
}

/// Creates and checks hashlinks using a private transform registry.
#[derive(Debug, Default)]
pub struct Hashlink {
    registry: TransformRegistry,
    config: HashlinkConfig,
}

impl Hashlink {
    /// An instance with no transforms and no default transform pair.
    pub fn new() -> Self {
        Self::default()
    }

    /// An instance with no transforms and the given configuration.
    pub fn with_config(config: HashlinkConfig) -> Self {
        Self {
            registry: TransformRegistry::new(),
            config,
        }
    }

    /// An instance with every bundled transform registered and
    /// `mh-sha2-256` / `mb-base58-btc` as defaults.
    pub fn bundled() -> Result<Self> {
        let mut hashlink = Self::with_config(HashlinkConfig::bundled());
        hashlink_transforms::register_bundled(&mut hashlink.registry)?;
        Ok(hashlink)
    }

    /// Register a transform under `name`.
    pub fn register(&mut self, name: impl Into<String>, transform: Transform) -> Result<()> {
        self.registry.register(name, transform)
    }

    pub fn registry(&self) -> &TransformRegistry {
        &self.registry
    }

    pub fn config(&self) -> &HashlinkConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Creation
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a hashlink for `options.data`.
    ///
    /// The digest path (digest, then encode) and the metadata path
    /// (canonicalize, then encode) run concurrently. Either both succeed and
    /// the identifier is returned, or the first error is.
    pub async fn create(&self, options: CreateOptions) -> Result<String> {
        let CreateOptions {
            data,
            urls,
            meta,
            transforms,
        } = options;

        let data = data.ok_or_else(|| HashlinkError::InvalidOptions("data is required".into()))?;
        let pair = self.transform_pair(transforms)?;

        let digest = self.registry.resolve_digest(&pair.digest)?;
        let encoding = self.registry.resolve_encoding(&pair.encoding)?;
        let metadata = MetadataBlock::new(urls, meta);

        let (digest_part, metadata_part) = tokio::join!(
            digest_segment(&pair, &*digest, &*encoding, &data),
            metadata_segment(&pair, &*encoding, &metadata),
        );

        let hashlink = ParsedHashlink::from_segments(digest_part?, metadata_part?)?;

        tracing::debug!(
            digest = %pair.digest,
            encoding = %pair.encoding,
            data_len = data.len(),
            urls = metadata.urls.len(),
            meta = metadata.meta.len(),
            "created hashlink"
        );

        Ok(hashlink.to_string())
    }

    fn transform_pair(&self, requested: Option<TransformPair>) -> Result<TransformPair> {
        requested
            .or_else(|| self.config.default_transforms.clone())
            .ok_or_else(|| HashlinkError::InvalidOptions("transforms are required".into()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Verification
    // ─────────────────────────────────────────────────────────────────────────

    /// Check that `data` hashes to the digest carried by `hashlink`.
    ///
    /// The encoding is identified by the digest segment's prefix and the
    /// digest algorithm by the decoded tag; both must be registered. Returns
    /// `Ok(false)` on a mismatch.
    pub async fn verify(&self, data: &[u8], hashlink: &str) -> Result<bool> {
        let parsed = parse(hashlink)?;
        let (_, expected) = self.decode_digest(&parsed).await?;

        let (name, digest) = self.registry.digest_for_tagged(&expected)?;
        let actual = digest
            .digest(data)
            .await
            .map_err(|e| HashlinkError::execution(name, e))?;

        let matches = actual == expected;
        if !matches {
            tracing::warn!(
                algorithm = name,
                expected = %expected.to_hex(),
                actual = %actual.to_hex(),
                "content does not match hashlink digest"
            );
        }
        Ok(matches)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Decoding
    // ─────────────────────────────────────────────────────────────────────────

    /// Decode both segments of `hashlink`.
    ///
    /// Both segments must use the same encoding. The metadata segment must be
    /// canonical CBOR.
    pub async fn decode(&self, hashlink: &str) -> Result<DecodedHashlink> {
        let parsed = parse(hashlink)?;
        let (encoding_name, digest) = self.decode_digest(&parsed).await?;

        let metadata = match parsed.metadata_segment() {
            Some(segment) => {
                let (name, encoding) = self.registry.encoding_for_segment(segment)?;
                if name != encoding_name {
                    return Err(HashlinkError::MalformedHashlink(
                        "digest and metadata segments use different encodings".into(),
                    ));
                }
                let bytes = encoding
                    .decode(segment)
                    .await
                    .map_err(|e| HashlinkError::execution(name, e))?;
                MetadataBlock::from_canonical_bytes(&bytes)?
            }
            None => MetadataBlock::default(),
        };

        // UnsupportedDigest is the only lookup failure: an unregistered tag.
        let digest_transform = self
            .registry
            .digest_for_tagged(&digest)
            .ok()
            .map(|(name, _)| name.to_string());

        Ok(DecodedHashlink {
            digest,
            digest_transform,
            encoding_transform: encoding_name,
            metadata,
        })
    }

    async fn decode_digest(&self, parsed: &ParsedHashlink) -> Result<(String, TaggedDigest)> {
        let segment = parsed.digest_segment();
        let (name, encoding) = self.registry.encoding_for_segment(segment)?;
        let bytes = encoding
            .decode(segment)
            .await
            .map_err(|e| HashlinkError::execution(name, e))?;
        Ok((name.to_string(), TaggedDigest::from(bytes)))
    }
}

async fn digest_segment(
    pair: &TransformPair,
    digest: &dyn Digest,
    encoding: &dyn Encoding,
    data: &[u8],
) -> Result<String> {
    let tagged = digest
        .digest(data)
        .await
        .map_err(|e| HashlinkError::execution(&pair.digest, e))?;
    encode_segment(&pair.encoding, encoding, tagged.as_bytes()).await
}

async fn metadata_segment(
    pair: &TransformPair,
    encoding: &dyn Encoding,
    metadata: &MetadataBlock,
) -> Result<Option<String>> {
    if metadata.is_empty() {
        return Ok(None);
    }
    let bytes = metadata.canonical_bytes()?;
    encode_segment(&pair.encoding, encoding, &bytes)
        .await
        .map(Some)
}

/// Encode and reject output that would break the identifier grammar.
async fn encode_segment(name: &str, encoding: &dyn Encoding, bytes: &[u8]) -> Result<String> {
    let text = encoding
        .encode(bytes)
        .await
        .map_err(|e| HashlinkError::execution(name, e))?;

    if !text.starts_with(encoding.prefix())
        || text.contains(SEPARATOR)
        || text.chars().any(char::is_whitespace)
    {
        return Err(HashlinkError::execution(
            name,
            TransformError::Primitive(format!("encoded output {text:?} violates the hashlink grammar")),
        ));
    }

    tracing::trace!(encoding = name, input_len = bytes.len(), segment = %text, "encoded segment");
    Ok(text)
}
