//! Options for creating a hashlink.

use bytes::Bytes;
use std::collections::BTreeMap;

use hashlink_core::{MetaValue, MetadataBlock};

use crate::config::TransformPair;

/// Inputs to [`Hashlink::create`](crate::Hashlink::create).
///
/// Built fluently:
///
/// ```rust
/// use hashlink_rs::CreateOptions;
///
/// let options = CreateOptions::new(&b"Hello World!"[..])
///     .url("https://example.com/hw.txt")
///     .content_type("text/plain")
///     .transforms("mh-sha2-256", "mb-base58-btc");
/// assert_eq!(options.urls.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Resource bytes. Required.
    pub data: Option<Bytes>,
    /// Retrieval URLs, most preferred first.
    pub urls: Vec<String>,
    /// Additional metadata.
    pub meta: BTreeMap<String, MetaValue>,
    /// Digest and encoding to use; falls back to the instance default.
    pub transforms: Option<TransformPair>,
}

impl CreateOptions {
    /// Options for hashing `data`.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::default()
        }
    }

    /// Set the resource bytes.
    pub fn data(mut self, data: impl Into<Bytes>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Append a retrieval URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.urls.push(url.into());
        self
    }

    /// Append several retrieval URLs, keeping their order.
    pub fn urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls.extend(urls.into_iter().map(Into::into));
        self
    }

    /// Set a metadata entry, replacing any previous value for `key`.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<MetaValue>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Set the `content-type` metadata entry.
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.meta
            .insert("content-type".to_string(), MetaValue::Text(content_type.into()));
        self
    }

    /// Name the digest and encoding transforms, in that order.
    pub fn transforms(mut self, digest: impl Into<String>, encoding: impl Into<String>) -> Self {
        self.transforms = Some(TransformPair::new(digest, encoding));
        self
    }

    /// The metadata block these options describe.
    pub fn metadata(&self) -> MetadataBlock {
        MetadataBlock::new(self.urls.clone(), self.meta.clone())
    }
}
