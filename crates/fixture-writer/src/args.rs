//! CLI argument definitions for fixture generation.

use clap::Args;
use std::path::PathBuf;

/// Arguments controlling a fixture generation run.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of primary documents to generate
    #[arg(long, short = 'c', default_value = "100")]
    pub count: u64,

    /// Output path for the generated JSON document array
    #[arg(long, short = 'o', default_value = "generated_documents.json")]
    pub output: PathBuf,

    /// Random seed for deterministic generation (same seed = same documents)
    #[arg(long)]
    pub seed: Option<u64>,
}
