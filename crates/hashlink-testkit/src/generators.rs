//! Proptest generators for property-based testing.

use std::collections::BTreeMap;

use proptest::prelude::*;

use hashlink_rs::{CreateOptions, MetaValue, MetadataBlock, TransformPair};
use hashlink_transforms::names;

/// Generate resource bytes of specified max length.
pub fn data(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a retrieval URL.
pub fn url() -> impl Strategy<Value = String> {
    "https://[a-z]{1,12}\\.example/[a-z0-9/._-]{0,24}".prop_map(String::from)
}

/// Generate an ordered list of retrieval URLs.
pub fn urls(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(url(), 0..=max_len)
}

/// Generate a MIME type.
pub fn content_type() -> impl Strategy<Value = String> {
    "(text|application|image)/[a-z][a-z0-9.+-]{0,15}".prop_map(String::from)
}

/// Generate a metadata key.
pub fn meta_key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}".prop_map(String::from)
}

/// Generate a metadata value with a canonical encoding.
pub fn meta_value() -> impl Strategy<Value = MetaValue> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(|i| MetaValue::Integer(i.into())),
        "[ -~]{0,32}".prop_map(MetaValue::Text),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(MetaValue::Bytes),
        any::<bool>().prop_map(MetaValue::Bool),
        Just(MetaValue::Null),
    ];

    leaf.prop_recursive(2, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(MetaValue::Array),
            prop::collection::btree_map(meta_key(), inner, 0..4).prop_map(|entries| {
                MetaValue::Map(
                    entries
                        .into_iter()
                        .map(|(k, v)| (MetaValue::Text(k), v))
                        .collect(),
                )
            }),
        ]
    })
}

/// Generate additional metadata entries.
pub fn meta(max_len: usize) -> impl Strategy<Value = BTreeMap<String, MetaValue>> {
    prop::collection::btree_map(meta_key(), meta_value(), 0..=max_len)
}

/// Generate a metadata block.
pub fn metadata_block() -> impl Strategy<Value = MetadataBlock> {
    (urls(3), meta(4)).prop_map(|(urls, meta)| MetadataBlock::new(urls, meta))
}

/// Generate a pair of bundled transform names.
pub fn transform_pair() -> impl Strategy<Value = TransformPair> {
    let digest = prop_oneof![
        Just(names::SHA2_256),
        Just(names::BLAKE2B_64),
        Just(names::BLAKE3),
    ];
    let encoding = prop_oneof![Just(names::BASE58_BTC), Just(names::BASE32)];
    (digest, encoding).prop_map(|(d, e)| TransformPair::new(d, e))
}

/// Parameters for creating a hashlink.
#[derive(Debug, Clone)]
pub struct CreateParams {
    pub data: Vec<u8>,
    pub urls: Vec<String>,
    pub content_type: Option<String>,
    pub meta: BTreeMap<String, MetaValue>,
    pub transforms: TransformPair,
}

impl Arbitrary for CreateParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            data(1000),
            urls(3),
            prop::option::of(content_type()),
            meta(3),
            transform_pair(),
        )
            .prop_map(|(data, urls, content_type, meta, transforms)| CreateParams {
                data,
                urls,
                content_type,
                meta,
                transforms,
            })
            .boxed()
    }
}

impl CreateParams {
    /// Build create options from the parameters.
    pub fn to_options(&self) -> CreateOptions {
        let mut options = CreateOptions::new(self.data.clone()).urls(self.urls.clone());
        for (key, value) in &self.meta {
            options = options.meta(key.clone(), value.clone());
        }
        if let Some(content_type) = &self.content_type {
            options = options.content_type(content_type.clone());
        }
        options.transforms(
            self.transforms.digest.clone(),
            self.transforms.encoding.clone(),
        )
    }

    /// Whether the resulting hashlink carries a metadata segment.
    pub fn has_metadata(&self) -> bool {
        !self.urls.is_empty() || self.content_type.is_some() || !self.meta.is_empty()
    }
}
