//! # Hashlink Testkit
//!
//! Testing utilities for hashlink implementations.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with the exact identifiers every implementation must produce
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Pre-populated instances for setting up test scenarios
//!
//! ## Golden Vectors
//!
//! ```rust,no_run
//! use hashlink_testkit::vectors::verify_all_vectors;
//!
//! async fn check() {
//!     for (name, matches, actual) in verify_all_vectors().await {
//!         println!("{name}: {matches} ({actual})");
//!     }
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use hashlink_testkit::generators::CreateParams;
//!
//! proptest! {
//!     #[test]
//!     fn hashlink_is_deterministic(params: CreateParams) {
//!         let a = params.to_options();
//!         let b = params.to_options();
//!         // create both and compare
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use hashlink_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! assert!(fixture.hashlink.registry().contains("mh-sha2-256"));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{single_digest_fixtures, TestFixture};
pub use generators::CreateParams;
pub use vectors::{all_vectors, options_from_vector, verify_all_vectors, GoldenVector};
