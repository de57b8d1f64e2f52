//! Synthetic document generator for OpenSilex JSON test fixtures.
//!
//! This crate provides the `DocumentGenerator` which produces randomized
//! `Document` values for an external test suite. With a seed, generation is
//! fully reproducible: every sample goes through a single `StdRng` in a fixed
//! order.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────┐
//! │ DocumentGenerator │
//! │                   │
//! │  - rng (StdRng)   │
//! └─────────┬─────────┘
//!           │ generate_documents(count)
//!           ▼
//!   nested pool (indices count+1..=2*count, no nested content)
//!           │
//!           ▼
//!   primary set (indices 1..=count, references into the pool)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_generator::DocumentGenerator;
//!
//! let mut generator = DocumentGenerator::new(Some(42));
//! let documents = generator.generate_documents(10).unwrap();
//! assert_eq!(documents.len(), 10);
//! assert_eq!(documents[0].uri, "opensilex:1");
//! ```

pub mod document;
pub mod generator;
pub mod sampling;

// Re-exports for convenience
pub use document::Document;
pub use generator::{DocumentGenerator, GeneratorError};
