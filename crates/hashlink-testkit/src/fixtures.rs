//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use hashlink_rs::{CreateOptions, Hashlink, HashlinkConfig, Result, Transform, TransformPair};
use hashlink_transforms::{names, Base58Btc, Blake2b64, Blake3, Sha2_256};

/// A test fixture wrapping a fully populated instance.
pub struct TestFixture {
    pub hashlink: Hashlink,
}

impl TestFixture {
    /// Create a fixture with every bundled transform registered.
    pub fn new() -> Self {
        Self::with_defaults(TransformPair::default())
    }

    /// Create a fixture whose instance defaults to `pair`.
    pub fn with_defaults(pair: TransformPair) -> Self {
        let mut hashlink = Hashlink::with_config(HashlinkConfig {
            default_transforms: Some(pair),
        });
        for (name, transform) in hashlink_transforms::bundled() {
            hashlink
                .register(name, transform)
                .expect("bundled transform names are unique");
        }
        Self { hashlink }
    }

    /// Hashlink for `data` with no metadata, using the instance defaults.
    pub async fn make_plain(&self, data: &[u8]) -> Result<String> {
        self.hashlink
            .create(CreateOptions::new(data.to_vec()))
            .await
    }

    /// Hashlink for `data` retrievable from `url`.
    pub async fn make_with_url(&self, data: &[u8], url: &str) -> Result<String> {
        self.hashlink
            .create(CreateOptions::new(data.to_vec()).url(url))
            .await
    }

    /// Hashlink for `data` with a URL and content type.
    pub async fn make_with_content_type(
        &self,
        data: &[u8],
        url: &str,
        content_type: &str,
    ) -> Result<String> {
        self.hashlink
            .create(
                CreateOptions::new(data.to_vec())
                    .url(url)
                    .content_type(content_type),
            )
            .await
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create one isolated instance per bundled digest, each knowing only that
/// digest plus base58-btc.
pub fn single_digest_fixtures() -> Vec<TestFixture> {
    [
        (names::SHA2_256, Transform::digest(Sha2_256)),
        (names::BLAKE2B_64, Transform::digest(Blake2b64)),
        (names::BLAKE3, Transform::digest(Blake3)),
    ]
    .into_iter()
    .map(|(name, digest)| {
        let mut hashlink = Hashlink::with_config(HashlinkConfig {
            default_transforms: Some(TransformPair::new(name, names::BASE58_BTC)),
        });
        hashlink.register(name, digest).expect("fresh registry");
        hashlink
            .register(names::BASE58_BTC, Transform::encoding(Base58Btc))
            .expect("fresh registry");
        TestFixture { hashlink }
    })
    .collect()
}
