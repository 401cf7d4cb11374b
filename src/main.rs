//! # Species Builder
//!
//! Resolves every seed species against the GBIF backbone, fetches its
//! classification and writes the enriched list to a JSON file.
//!
//! ## Usage
//!
//! ```text
//! cargo run --bin build_species
//! cargo run --bin build_species -- --output public/species.json --delay-ms 500
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tokio::time::Duration;
use tracing::info;

use gbif_species::config::PipelineConfig;
use gbif_species::gbif::GbifClient;
use gbif_species::logging::configure_logging;
use gbif_species::pipeline::run_pipeline;
use gbif_species::seed::SEED;
use gbif_species::taxonomy::rank_summary;
use gbif_species::writer::write_records;

#[derive(Parser, Debug)]
#[clap(
    name = "build_species",
    about = "Fetch GBIF taxonomy for the seed species and write it as JSON"
)]
struct Args {
    /// Output file (overrides SPECIES_OUTPUT_PATH)
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Pause after each request in milliseconds (overrides GBIF_DELAY_MS)
    #[clap(long)]
    delay_ms: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    configure_logging();

    let args = Args::parse();

    let mut config = PipelineConfig::from_env()?;
    if let Some(output) = args.output {
        config = config.with_output_path(output);
    }
    if let Some(ms) = args.delay_ms {
        config = config.with_delay(Duration::from_millis(ms));
    }

    info!(
        "Match endpoint {}, species endpoint {}, delay {:?}",
        config.match_url, config.species_url, config.delay
    );

    let client = GbifClient::new(&config)?;
    let report = run_pipeline(&client, SEED).await;

    for (rank, values) in rank_summary(&report.records) {
        info!("{}: {} distinct", rank, values.len());
    }

    write_records(&config.output_path, &report.records)?;

    Ok(())
}
