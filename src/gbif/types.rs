//! Type definitions for the GBIF module.

use serde::Deserialize;
use tokio::time::Duration;

/// Response of `GET /v1/species/match?name=...`.
///
/// Only `usage_key` drives the pipeline; the rest is kept for diagnostics.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub usage_key: Option<u64>,
    pub match_type: Option<String>,
    pub confidence: Option<i64>,
    pub scientific_name: Option<String>,
}

/// Response of `GET /v1/species/{key}`, reduced to the fields a record needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesDetail {
    pub phylum: Option<String>,
    pub class: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub species: Option<String>,
    pub canonical_name: Option<String>,
}

// Constants
pub const GBIF_MATCH_URL: &str = "https://api.gbif.org/v1/species/match";
pub const GBIF_SPECIES_URL: &str = "https://api.gbif.org/v1/species";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_DELAY: Duration = Duration::from_millis(250);
pub const USER_AGENT: &str = concat!("gbif-species/", env!("CARGO_PKG_VERSION"));
