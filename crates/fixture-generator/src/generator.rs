//! Document generator producing the nested pool and the primary set.

use crate::document::{fixed_timestamp, Document, COLOR_NAMES, PLANT_NAMES};
use crate::sampling::{sample_distinct, sample_distinct_range};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of tags sampled per document.
pub const TAGS_PER_DOCUMENT: usize = 3;

/// Number of values sampled per document.
pub const VALUES_PER_DOCUMENT: usize = 5;

/// Number of nested references sampled per primary document.
pub const NESTED_LIST_SIZE: usize = 3;

/// Inclusive bounds for sampled values.
pub const VALUE_MIN: i64 = 1;
pub const VALUE_MAX: i64 = 9999;

/// Smallest document count for which nested sampling is well-defined.
pub const MIN_DOCUMENT_COUNT: u64 = NESTED_LIST_SIZE as u64;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Document count too small for nested sampling.
    #[error("Document count must be at least {MIN_DOCUMENT_COUNT}, got {0}")]
    InvalidCount(u64),
}

/// Generator that produces randomized test documents.
///
/// With a seed, the generator is deterministic: every sample is drawn from a
/// single `StdRng` in a fixed order (name, tags, values, nested, nestedList),
/// so the same seed and count reproduce the same documents.
pub struct DocumentGenerator {
    rng: StdRng,
}

impl DocumentGenerator {
    /// Create a new document generator.
    ///
    /// Without a seed the generator draws from OS entropy and each run
    /// produces a different fixture set.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Generate one fully populated document at `index`, drawing nested
    /// references from `candidate_pool`.
    ///
    /// With an empty pool, `nested` is null and `nestedList` is empty. An
    /// undersized pool (fewer than [`NESTED_LIST_SIZE`] entries) clamps
    /// `nestedList` to the pool size.
    pub fn generate_document(&mut self, index: u64, candidate_pool: &[Document]) -> Document {
        let name = PLANT_NAMES[self.rng.gen_range(0..PLANT_NAMES.len())].to_string();

        let tags = sample_distinct(&mut self.rng, &COLOR_NAMES, TAGS_PER_DOCUMENT)
            .into_iter()
            .map(str::to_string)
            .collect();

        let values = sample_distinct_range(&mut self.rng, VALUE_MIN, VALUE_MAX, VALUES_PER_DOCUMENT);

        let nested = if candidate_pool.is_empty() {
            None
        } else {
            let pick = self.rng.gen_range(0..candidate_pool.len());
            Some(Box::new(candidate_pool[pick].clone()))
        };

        let nested_list = sample_distinct(&mut self.rng, candidate_pool, NESTED_LIST_SIZE);

        Document {
            uri: Document::uri_for(index),
            rdf_type: Document::rdf_type_for(index),
            publication_date: fixed_timestamp(),
            last_update_date: fixed_timestamp(),
            name,
            tags,
            id: index,
            values,
            nested,
            nested_list,
        }
    }

    /// Generate `count` primary documents, each referencing a pool of `count`
    /// nested documents.
    ///
    /// The pool is built first at indices `count+1..=2*count` with no nested
    /// content of its own, so reference depth never exceeds one level. The
    /// primary set at indices `1..=count` then samples the pool. Only the
    /// primary set is returned.
    pub fn generate_documents(&mut self, count: u64) -> Result<Vec<Document>, GeneratorError> {
        if count < MIN_DOCUMENT_COUNT {
            return Err(GeneratorError::InvalidCount(count));
        }

        let candidate_pool: Vec<Document> = (count + 1..=2 * count)
            .map(|index| self.generate_document(index, &[]))
            .collect();

        let documents = (1..=count)
            .map(|index| self.generate_document(index, &candidate_pool))
            .collect();

        Ok(documents)
    }
}
