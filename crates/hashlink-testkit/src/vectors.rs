//! Golden test vectors for cross-implementation verification.
//!
//! Every implementation must produce these exact identifiers, and the exact
//! canonical metadata bytes behind them.

use hashlink_rs::{CreateOptions, Hashlink, MetadataBlock};
use hashlink_transforms::names;

const HELLO: &[u8] = b"Hello World!";
const HW_URL: &str = "https://example.com/hw.txt";

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Registered name of the digest transform.
    pub digest: &'static str,
    /// Registered name of the encoding transform.
    pub encoding: &'static str,
    /// Resource bytes.
    pub data: &'static [u8],
    /// Retrieval URLs.
    pub urls: &'static [&'static str],
    /// `content-type` metadata, if any.
    pub content_type: Option<&'static str>,
    /// Canonical CBOR of the metadata (hex), empty when there is none.
    pub expected_metadata_cbor: &'static str,
    /// Expected hashlink.
    pub expected_hashlink: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "sha2-256 without metadata",
            digest: names::SHA2_256,
            encoding: names::BASE58_BTC,
            data: HELLO,
            urls: &[],
            content_type: None,
            expected_metadata_cbor: "",
            expected_hashlink: "hl:zQmWvQxTqbG2Z9HPJgG57jjwR154cKhbtJenbyYTWkjgF3e",
        },
        GoldenVector {
            name: "sha2-256 with url",
            digest: names::SHA2_256,
            encoding: names::BASE58_BTC,
            data: HELLO,
            urls: &[HW_URL],
            content_type: None,
            expected_metadata_cbor:
                "a10f81781a68747470733a2f2f6578616d706c652e636f6d2f68772e747874",
            expected_hashlink: "hl:zQmWvQxTqbG2Z9HPJgG57jjwR154cKhbtJenbyYTWkjgF3e:z3TSgXTuaHxY2tsArhUreJ4ixgw9NW7DYuQ9QTPQyLHy",
        },
        GoldenVector {
            name: "sha2-256 with url and content-type",
            digest: names::SHA2_256,
            encoding: names::BASE58_BTC,
            data: HELLO,
            urls: &[HW_URL],
            content_type: Some("text/plain"),
            expected_metadata_cbor: "a20e6a746578742f706c61696e0f81781a68747470733a2f2f6578616d706c652e636f6d2f68772e747874",
            expected_hashlink: "hl:zQmWvQxTqbG2Z9HPJgG57jjwR154cKhbtJenbyYTWkjgF3e:zCwPSdabLuj3jue1qYujzunnKwpL4myKdyeqySyFhnzZ8qdfW3bb6W8dVdRu",
        },
        GoldenVector {
            name: "blake2b-64 without metadata",
            digest: names::BLAKE2B_64,
            encoding: names::BASE58_BTC,
            data: HELLO,
            urls: &[],
            content_type: None,
            expected_metadata_cbor: "",
            expected_hashlink: "hl:zm9YZiJ7LARpE6oz",
        },
        GoldenVector {
            name: "blake2b-64 with url",
            digest: names::BLAKE2B_64,
            encoding: names::BASE58_BTC,
            data: HELLO,
            urls: &[HW_URL],
            content_type: None,
            expected_metadata_cbor:
                "a10f81781a68747470733a2f2f6578616d706c652e636f6d2f68772e747874",
            expected_hashlink: "hl:zm9YZiJ7LARpE6oz:z3TSgXTuaHxY2tsArhUreJ4ixgw9NW7DYuQ9QTPQyLHy",
        },
        GoldenVector {
            name: "blake2b-64 with url and content-type",
            digest: names::BLAKE2B_64,
            encoding: names::BASE58_BTC,
            data: HELLO,
            urls: &[HW_URL],
            content_type: Some("text/plain"),
            expected_metadata_cbor: "a20e6a746578742f706c61696e0f81781a68747470733a2f2f6578616d706c652e636f6d2f68772e747874",
            expected_hashlink: "hl:zm9YZiJ7LARpE6oz:zCwPSdabLuj3jue1qYujzunnKwpL4myKdyeqySyFhnzZ8qdfW3bb6W8dVdRu",
        },
    ]
}

/// Build the create options described by a golden vector.
pub fn options_from_vector(vector: &GoldenVector) -> CreateOptions {
    let mut options = CreateOptions::new(vector.data)
        .urls(vector.urls.iter().copied())
        .transforms(vector.digest, vector.encoding);

    if let Some(content_type) = vector.content_type {
        options = options.content_type(content_type);
    }
    options
}

/// The metadata block a golden vector's options produce.
pub fn metadata_from_vector(vector: &GoldenVector) -> MetadataBlock {
    let options = options_from_vector(vector);
    MetadataBlock::new(options.urls, options.meta)
}

/// Create every golden vector with the bundled transforms.
///
/// Returns `(name, matches, actual)` per vector, where `actual` is the
/// produced hashlink or the error that prevented it.
pub async fn verify_all_vectors() -> Vec<(String, bool, String)> {
    let hashlink = match Hashlink::bundled() {
        Ok(hashlink) => hashlink,
        Err(e) => {
            return all_vectors()
                .iter()
                .map(|v| (v.name.to_string(), false, e.to_string()))
                .collect()
        }
    };

    let mut results = Vec::new();
    for vector in all_vectors() {
        let (matches, actual) = match hashlink.create(options_from_vector(&vector)).await {
            Ok(id) => (id == vector.expected_hashlink, id),
            Err(e) => (false, e.to_string()),
        };
        results.push((vector.name.to_string(), matches, actual));
    }
    results
}
