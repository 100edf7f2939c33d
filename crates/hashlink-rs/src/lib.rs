//! # Hashlink
//!
//! Compact, self-describing identifiers that bind content to a cryptographic
//! digest plus optional retrieval URLs and metadata.
//!
//! ## Overview
//!
//! ```text
//! hl:<encoded-digest>[:<encoded-metadata>]
//! ```
//!
//! - **Digest segment**: a tagged digest (the tag names the hash algorithm),
//!   rendered by a prefix-tagged encoding such as base58-btc.
//! - **Metadata segment**: canonical CBOR of the URLs and metadata, rendered
//!   with the same encoding. Identical metadata always produces an identical
//!   segment, whatever digest algorithm is used.
//!
//! Holding a hashlink is enough to verify content fetched from any source.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hashlink_rs::{CreateOptions, Hashlink, Transform};
//! use hashlink_rs::transforms::{Base58Btc, Sha2_256};
//!
//! async fn example() -> hashlink_rs::Result<()> {
//!     // An isolated instance with explicitly registered transforms
//!     let mut hl = Hashlink::new();
//!     hl.register("mh-sha2-256", Transform::digest(Sha2_256))?;
//!     hl.register("mb-base58-btc", Transform::encoding(Base58Btc))?;
//!
//!     let id = hl
//!         .create(
//!             CreateOptions::new(&b"Hello World!"[..])
//!                 .url("https://example.com/hw.txt")
//!                 .transforms("mh-sha2-256", "mb-base58-btc"),
//!         )
//!         .await?;
//!
//!     assert!(hl.verify(b"Hello World!", &id).await?);
//!
//!     // Or the process-wide default instance
//!     let id = hashlink_rs::create(CreateOptions::new(&b"Hello World!"[..])).await?;
//!     assert_eq!(id, "hl:zQmWvQxTqbG2Z9HPJgG57jjwR154cKhbtJenbyYTWkjgF3e");
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `hashlink_rs::core` - Transform traits, registry, canonical metadata, parser
//! - `hashlink_rs::transforms` - Bundled digest and encoding adapters

pub mod config;
pub mod default;
pub mod hashlink;
pub mod options;

// Re-export component crates
pub use hashlink_core as core;
pub use hashlink_transforms as transforms;

pub use config::{HashlinkConfig, TransformPair};
pub use default::{create, decode, default_instance, verify};
pub use hashlink::{DecodedHashlink, Hashlink};
pub use options::CreateOptions;

// Re-export commonly used core types
pub use hashlink_core::{
    parse, Digest, Encoding, HashlinkError, MetaValue, MetadataBlock, ParsedHashlink, Result,
    TaggedDigest, Transform, TransformError, TransformKind, TransformRegistry,
};
