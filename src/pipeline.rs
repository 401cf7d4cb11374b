//! Sequential fetch-match-merge over the seed list.
//!
//! Each seed entry ends in exactly one [`EntryOutcome`]: a record, or a skip with its
//! reason. Failures never cross the per-entry boundary and nothing partial is kept.

use tracing::{info, warn};

use crate::error::SkipReason;
use crate::gbif::SpeciesDetail;
use crate::seed::SeedEntry;
use crate::taxonomy::{assemble, canonical_name, OutputRecord, TaxonKey, TaxonomyDetail};
use crate::TARGET_PIPELINE;

/// The two remote lookups the pipeline depends on.
#[allow(async_fn_in_trait)]
pub trait TaxonLookup {
    /// Name to taxon key.
    async fn resolve(&self, scientific_name: &str) -> Result<TaxonKey, SkipReason>;

    /// Taxon key to classification.
    async fn enrich(&self, key: TaxonKey) -> Result<SpeciesDetail, SkipReason>;
}

/// Which lookup a skipped entry failed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolve,
    Enrich,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub scientific_name: String,
    pub stage: Stage,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Resolved(OutputRecord),
    Skipped(SkippedEntry),
}

impl EntryOutcome {
    fn skipped(seed: &SeedEntry, stage: Stage, reason: SkipReason) -> Self {
        EntryOutcome::Skipped(SkippedEntry {
            scientific_name: seed.scientific_name.to_string(),
            stage,
            reason,
        })
    }
}

/// Everything a run produced, records in seed order.
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    pub records: Vec<OutputRecord>,
    pub skipped: Vec<SkippedEntry>,
}

impl PipelineReport {
    pub fn push(&mut self, outcome: EntryOutcome) {
        match outcome {
            EntryOutcome::Resolved(record) => self.records.push(record),
            EntryOutcome::Skipped(entry) => self.skipped.push(entry),
        }
    }

    pub fn processed(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// Resolve, enrich and assemble a single seed entry.
pub async fn process_entry<L: TaxonLookup>(lookup: &L, seed: &SeedEntry) -> EntryOutcome {
    info!(target: TARGET_PIPELINE, "Processing: {}", seed.scientific_name);

    let key = match lookup.resolve(seed.scientific_name).await {
        Ok(key) => key,
        Err(reason) => {
            warn!(target: TARGET_PIPELINE, "  -> No valid match, skipping {}: {}", seed.scientific_name, reason);
            return EntryOutcome::skipped(seed, Stage::Resolve, reason);
        }
    };

    let detail = match lookup.enrich(key).await {
        Ok(detail) => detail,
        Err(reason) => {
            warn!(target: TARGET_PIPELINE, "  -> No details for key {}, skipping {}: {}", key, seed.scientific_name, reason);
            return EntryOutcome::skipped(seed, Stage::Enrich, reason);
        }
    };

    let name = canonical_name(&detail, seed.scientific_name);
    let taxonomy = TaxonomyDetail::from_detail(&detail, &name);
    let record = assemble(&name, seed.display_name, taxonomy);

    info!(target: TARGET_PIPELINE, "  -> Added: {}", record.id);
    EntryOutcome::Resolved(record)
}

/// Run every seed entry through the pipeline, strictly in order.
pub async fn run_pipeline<L: TaxonLookup>(lookup: &L, seeds: &[SeedEntry]) -> PipelineReport {
    info!(target: TARGET_PIPELINE, "{} seed entries to process", seeds.len());

    let mut report = PipelineReport::default();
    for seed in seeds {
        report.push(process_entry(lookup, seed).await);
    }

    info!(target: TARGET_PIPELINE, "Total valid species: {}", report.records.len());
    if !report.skipped.is_empty() {
        info!(target: TARGET_PIPELINE, "Skipped {} entries", report.skipped.len());
    }

    report
}
