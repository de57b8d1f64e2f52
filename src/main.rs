//! Command-line interface for opensilex-fixtures
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate the default 100 documents into generated_documents.json
//! opensilex-fixtures
//!
//! # Reproducible fixture set for a test suite
//! opensilex-fixtures --count 500 --seed 42 --output fixtures/documents.json
//! ```

use anyhow::Context;
use clap::Parser;
use fixture_generator::DocumentGenerator;
use fixture_writer::{write_documents, GenerateArgs};

#[derive(Parser)]
#[command(name = "opensilex-fixtures")]
#[command(about = "A tool for generating synthetic OpenSilex document fixtures as JSON")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let args = cli.args;

    match args.seed {
        Some(seed) => tracing::info!("Generating {} documents (seed={})", args.count, seed),
        None => tracing::info!("Generating {} documents (unseeded)", args.count),
    }

    let mut generator = DocumentGenerator::new(args.seed);
    let documents = generator
        .generate_documents(args.count)
        .context("Failed to generate documents")?;

    let metrics = write_documents(&documents, &args.output)
        .with_context(|| format!("Failed to write fixtures to {:?}", args.output))?;

    tracing::info!(
        "Generated {:?}: {} documents in {:?}",
        args.output,
        metrics.documents_written,
        metrics.total_duration
    );

    Ok(())
}
