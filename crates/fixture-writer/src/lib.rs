//! JSON fixture file writer.
//!
//! This crate serializes generated documents to a pretty-printed JSON array
//! on disk, for consumption by an external test suite.
//!
//! # Example
//!
//! ```ignore
//! use fixture_generator::DocumentGenerator;
//! use fixture_writer::write_documents;
//!
//! let mut generator = DocumentGenerator::new(Some(42));
//! let documents = generator.generate_documents(100)?;
//! let metrics = write_documents(&documents, "generated_documents.json")?;
//! println!("Wrote {} documents in {:?}", metrics.documents_written, metrics.total_duration);
//! ```

pub mod args;
pub mod error;
pub mod writer;

pub use args::GenerateArgs;
pub use error::WriterError;
pub use writer::{write_documents, WriteMetrics};
