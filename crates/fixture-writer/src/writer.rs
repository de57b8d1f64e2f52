//! Fixture file writing.

use crate::error::WriterError;
use fixture_generator::Document;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Metrics from a write operation.
#[derive(Debug, Clone, Default)]
pub struct WriteMetrics {
    /// Number of documents written.
    pub documents_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl WriteMetrics {
    /// Calculate documents per second.
    pub fn documents_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.documents_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Write the documents to `output_path` as a pretty-printed JSON array.
///
/// The full array is serialized in memory before the destination is created,
/// so a serialization failure leaves no file behind. Indentation is 2 spaces
/// at every nesting level.
pub fn write_documents<P: AsRef<Path>>(
    documents: &[Document],
    output_path: P,
) -> Result<WriteMetrics, WriterError> {
    let start_time = Instant::now();
    let output_path = output_path.as_ref();

    info!(
        "Writing {} documents to '{}'",
        documents.len(),
        output_path.display()
    );

    let json = serde_json::to_vec_pretty(documents)?;
    debug!("Serialized {} bytes", json.len());

    let mut file = File::create(output_path)?;
    file.write_all(&json)?;
    file.flush()?;
    drop(file);

    let metrics = WriteMetrics {
        documents_written: documents.len() as u64,
        total_duration: start_time.elapsed(),
        file_size_bytes: std::fs::metadata(output_path)?.len(),
    };

    info!(
        "Write complete: {} documents, {} bytes in {:?} ({:.2} docs/sec)",
        metrics.documents_written,
        metrics.file_size_bytes,
        metrics.total_duration,
        metrics.documents_per_second()
    );

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_generator::DocumentGenerator;
    use tempfile::TempDir;

    #[test]
    fn test_metrics() {
        let metrics = WriteMetrics {
            documents_written: 1000,
            total_duration: Duration::from_secs(10),
            file_size_bytes: 100000,
        };

        assert_eq!(metrics.documents_per_second(), 100.0);
    }

    #[test]
    fn test_write_and_read_back() {
        let mut generator = DocumentGenerator::new(Some(42));
        let documents = generator.generate_documents(10).unwrap();

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("generated_documents.json");

        let metrics = write_documents(&documents, &output_path).unwrap();

        assert_eq!(metrics.documents_written, 10);
        assert!(output_path.exists());
        assert_eq!(
            metrics.file_size_bytes,
            std::fs::metadata(&output_path).unwrap().len()
        );

        let content = std::fs::read_to_string(&output_path).unwrap();
        let parsed: Vec<Document> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, documents);
    }

    #[test]
    fn test_output_is_pretty_printed() {
        let mut generator = DocumentGenerator::new(Some(42));
        let documents = generator.generate_documents(3).unwrap();

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("generated_documents.json");

        write_documents(&documents, &output_path).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.starts_with("[\n"));
        // Top-level objects at 2 spaces, their fields at 4
        assert!(content.contains("\n  {"));
        assert!(content.contains("\n    \"uri\""));
    }

    #[test]
    fn test_write_to_invalid_path() {
        let mut generator = DocumentGenerator::new(Some(42));
        let documents = generator.generate_documents(3).unwrap();

        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("no_such_dir").join("out.json");

        let result = write_documents(&documents, &output_path);
        assert!(matches!(result, Err(WriterError::Io(_))));
    }

    #[test]
    fn test_deterministic_files() {
        let temp_dir = TempDir::new().unwrap();

        let mut gen1 = DocumentGenerator::new(Some(42));
        let path1 = temp_dir.path().join("documents1.json");
        write_documents(&gen1.generate_documents(5).unwrap(), &path1).unwrap();

        let mut gen2 = DocumentGenerator::new(Some(42));
        let path2 = temp_dir.path().join("documents2.json");
        write_documents(&gen2.generate_documents(5).unwrap(), &path2).unwrap();

        let content1 = std::fs::read_to_string(&path1).unwrap();
        let content2 = std::fs::read_to_string(&path2).unwrap();
        assert_eq!(content1, content2);
    }
}
