//! The document model and the fixed pools it samples from.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Prefix for document URIs (`opensilex:{index}`).
pub const BASE_URI: &str = "opensilex:";

/// Prefix for document RDF types (`opensilex:type_{index % 10}`).
pub const BASE_TYPE_URI: &str = "opensilex:type_";

/// Number of RDF type buckets documents cycle through.
pub const TYPE_BUCKETS: u64 = 10;

/// Plant names documents draw from (uniformly, with replacement).
pub const PLANT_NAMES: [&str; 20] = [
    "Zea mays",
    "Triticum aestivum",
    "Hordeum vulgare",
    "Helianthus annuus",
    "Arabidopsis thaliana",
    "Vitis vinifera",
    "Solanum lycopersicum",
    "Oryza sativa",
    "Glycine max",
    "Sorghum bicolor",
    "Medicago truncatula",
    "Brassica napus",
    "Pisum sativum",
    "Beta vulgaris",
    "Avena sativa",
    "Secale cereale",
    "Lactuca sativa",
    "Daucus carota",
    "Cucumis sativus",
    "Phaseolus vulgaris",
];

/// Color names document tags draw from (without replacement).
pub const COLOR_NAMES: [&str; 20] = [
    "red", "orange", "yellow", "green", "blue", "purple", "pink", "brown", "black", "white",
    "gray", "cyan", "magenta", "teal", "maroon", "navy", "olive", "coral", "turquoise", "beige",
];

/// Timestamp stamped on every document.
///
/// A constant rather than wall-clock time, so two runs with the same seed
/// produce byte-identical files.
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()
        .expect("constant timestamp is a valid UTC datetime")
}

/// A synthetic document as serialized into the fixture file.
///
/// Field declaration order fixes the JSON field order, which the external
/// test suite relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// `opensilex:{index}`, unique within one generation run.
    pub uri: String,
    /// `opensilex:type_{index % 10}`.
    pub rdf_type: String,
    pub publication_date: DateTime<Utc>,
    pub last_update_date: DateTime<Utc>,
    /// One of [`PLANT_NAMES`].
    pub name: String,
    /// Three distinct entries from [`COLOR_NAMES`].
    pub tags: Vec<String>,
    /// The generation index.
    pub id: u64,
    /// Five distinct integers in `[1, 9999]`.
    pub values: Vec<i64>,
    /// One document from the candidate pool, or null when the pool is empty.
    pub nested: Option<Box<Document>>,
    /// Three distinct documents from the candidate pool (empty when the pool is).
    pub nested_list: Vec<Document>,
}

impl Document {
    /// URI of the document at `index`.
    pub fn uri_for(index: u64) -> String {
        format!("{BASE_URI}{index}")
    }

    /// RDF type of the document at `index`, cycling through the type buckets.
    pub fn rdf_type_for(index: u64) -> String {
        format!("{BASE_TYPE_URI}{}", index % TYPE_BUCKETS)
    }
}
