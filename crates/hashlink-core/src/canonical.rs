//! Canonical CBOR encoding of hashlink metadata.
//!
//! This module implements RFC 8949 Core Deterministic Encoding:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats, tags or undefined
//!
//! The metadata block depends only on the URLs and metadata map, never on the
//! digest algorithm, so hashlinks for the same resource location produced with
//! different hash functions share an identical metadata segment.

use ciborium::value::{Integer, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{HashlinkError, Result};

/// Value type accepted for metadata entries.
pub type MetaValue = Value;

/// Reserved integer keys (single byte in CBOR).
pub mod keys {
    /// Ordered list of retrieval URLs.
    pub const URLS: u64 = 0x0f;
    /// `content-type` metadata.
    pub const CONTENT_TYPE: u64 = 0x0e;
    /// `experimental` metadata.
    pub const EXPERIMENTAL: u64 = 0x0d;
    /// `transforms` metadata.
    pub const TRANSFORMS: u64 = 0x0c;
}

/// Well-known metadata names and the integer keys they are stored under.
const WELL_KNOWN: &[(&str, u64)] = &[
    ("content-type", keys::CONTENT_TYPE),
    ("experimental", keys::EXPERIMENTAL),
    ("transforms", keys::TRANSFORMS),
];

fn reserved_key(name: &str) -> Option<u64> {
    WELL_KNOWN.iter().find(|(n, _)| *n == name).map(|(_, k)| *k)
}

fn reserved_name(key: u64) -> Option<&'static str> {
    WELL_KNOWN.iter().find(|(_, k)| *k == key).map(|(n, _)| *n)
}

/// Retrieval URLs plus arbitrary metadata attached to a hashlink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataBlock {
    /// Retrieval URLs, most preferred first.
    pub urls: Vec<String>,
    /// Metadata entries (e.g. `content-type`).
    pub meta: BTreeMap<String, MetaValue>,
}

impl MetadataBlock {
    pub fn new(urls: Vec<String>, meta: BTreeMap<String, MetaValue>) -> Self {
        Self { urls, meta }
    }

    /// An empty block produces no metadata segment.
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.meta.is_empty()
    }

    /// The `content-type` entry, when it is text.
    pub fn content_type(&self) -> Option<&str> {
        match self.meta.get("content-type") {
            Some(Value::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Encode to canonical CBOR bytes.
    ///
    /// Fails with [`HashlinkError::InvalidOptions`] if a value has no canonical
    /// form.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        encode_value_to(&mut buf, &self.to_cbor_value())?;
        Ok(buf)
    }

    /// Decode from canonical CBOR bytes.
    ///
    /// Bytes that decode but are not in canonical form, or hold values with no
    /// canonical form, are rejected as [`HashlinkError::MalformedHashlink`].
    pub fn from_canonical_bytes(bytes: &[u8]) -> Result<Self> {
        let value: Value = ciborium::from_reader(bytes)
            .map_err(|e| HashlinkError::MalformedHashlink(format!("metadata: {e}")))?;

        let block = Self::from_cbor_value(&value)?;
        let canonical = block
            .canonical_bytes()
            .map_err(|e| malformed(&e.to_string()))?;
        if canonical != bytes {
            return Err(HashlinkError::MalformedHashlink(
                "metadata is not canonically encoded".into(),
            ));
        }
        Ok(block)
    }

    /// Convert to a CBOR map (integer keys for reserved entries).
    fn to_cbor_value(&self) -> Value {
        let mut entries = Vec::with_capacity(self.meta.len() + 1);

        if !self.urls.is_empty() {
            let urls = self.urls.iter().map(|u| Value::Text(u.clone())).collect();
            entries.push((Value::Integer(keys::URLS.into()), Value::Array(urls)));
        }

        for (name, value) in &self.meta {
            let key = match reserved_key(name) {
                Some(k) => Value::Integer(k.into()),
                None => Value::Text(name.clone()),
            };
            entries.push((key, value.clone()));
        }

        Value::Map(entries)
    }

    fn from_cbor_value(value: &Value) -> Result<Self> {
        let map = match value {
            Value::Map(m) => m,
            _ => return Err(malformed("expected map")),
        };

        let mut block = MetadataBlock::default();
        for (key, value) in map {
            match key {
                Value::Integer(i) => {
                    let key = u64::try_from(i128::from(*i))
                        .map_err(|_| malformed("negative metadata key"))?;
                    if key == keys::URLS {
                        block.urls = decode_urls(value)?;
                    } else if let Some(name) = reserved_name(key) {
                        block.meta.insert(name.to_string(), value.clone());
                    } else {
                        return Err(malformed(&format!("unknown metadata key {key:#04x}")));
                    }
                }
                Value::Text(name) => {
                    if reserved_key(name).is_some() {
                        return Err(malformed(&format!("reserved name {name} stored as text")));
                    }
                    block.meta.insert(name.clone(), value.clone());
                }
                _ => return Err(malformed("metadata keys must be integers or text")),
            }
        }

        Ok(block)
    }
}

fn decode_urls(value: &Value) -> Result<Vec<String>> {
    let items = match value {
        Value::Array(items) => items,
        _ => return Err(malformed("urls must be an array")),
    };

    items
        .iter()
        .map(|item| match item {
            Value::Text(url) => Ok(url.clone()),
            _ => Err(malformed("urls must be text")),
        })
        .collect()
}

fn malformed(msg: &str) -> HashlinkError {
    HashlinkError::MalformedHashlink(format!("metadata: {msg}"))
}

fn not_canonical(msg: &str) -> HashlinkError {
    HashlinkError::InvalidOptions(format!("metadata has no canonical encoding: {msg}"))
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) -> Result<()> {
    match value {
        Value::Integer(i) => encode_integer(buf, *i),
        Value::Bytes(b) => encode_bytes(buf, b),
        Value::Text(s) => encode_text(buf, s),
        Value::Array(arr) => encode_array(buf, arr)?,
        Value::Map(entries) => encode_map_canonical(buf, entries)?,
        Value::Bool(b) => buf.push(if *b { 0xf5 } else { 0xf4 }),
        Value::Null => buf.push(0xf6),
        Value::Float(_) => return Err(not_canonical("floats are not supported")),
        Value::Tag(..) => return Err(not_canonical("tags are not supported")),
        _ => return Err(not_canonical("unsupported value type")),
    }
    Ok(())
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        encode_uint(buf, 0, n as u64);
    } else {
        // CBOR encodes -1 as 0, -2 as 1, etc.
        encode_uint(buf, 1, (-1 - n) as u64);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffff_ffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

fn encode_array(buf: &mut Vec<u8>, arr: &[Value]) -> Result<()> {
    encode_uint(buf, 4, arr.len() as u64);
    for item in arr {
        encode_value_to(buf, item)?;
    }
    Ok(())
}

/// Encode a map canonically (major type 5).
///
/// Keys are sorted by their encoded byte comparison; duplicate keys are
/// rejected.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) -> Result<()> {
    let mut pairs: Vec<(Vec<u8>, &Value)> = Vec::with_capacity(entries.len());
    for (k, v) in entries {
        let mut key_buf = Vec::new();
        encode_value_to(&mut key_buf, k)?;
        pairs.push((key_buf, v));
    }

    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    if pairs.windows(2).any(|w| w[0].0 == w[1].0) {
        return Err(not_canonical("duplicate map key"));
    }

    encode_uint(buf, 5, pairs.len() as u64);
    for (key_bytes, value) in pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value)?;
    }
    Ok(())
}
