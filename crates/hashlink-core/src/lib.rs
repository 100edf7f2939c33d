//! # Hashlink Core
//!
//! Pure primitives for hashlinks: transform traits, the transform registry,
//! canonical metadata encoding and the `hl:` grammar.
//!
//! This crate contains no I/O and no concrete hash or encoding algorithms.
//! Algorithms are plugged in through the [`Digest`] and [`Encoding`] traits.
//!
//! ## Key Types
//!
//! - [`Transform`] - A registrable digest or encoding capability
//! - [`TransformRegistry`] - Named, append-only set of transforms
//! - [`MetadataBlock`] - URLs and metadata carried by a hashlink
//! - [`ParsedHashlink`] - An identifier split into its segments
//!
//! ## Canonicalization
//!
//! Metadata is encoded using deterministic CBOR. See [`canonical`] module.

pub mod canonical;
pub mod error;
pub mod hashlink;
pub mod registry;
pub mod transform;

pub use canonical::{MetaValue, MetadataBlock};
pub use error::{HashlinkError, Result, TransformError};
pub use hashlink::{parse, ParsedHashlink, SCHEME, SEPARATOR};
pub use registry::TransformRegistry;
pub use transform::{Digest, Encoding, TaggedDigest, Transform, TransformKind};
