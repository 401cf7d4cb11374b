//! Runtime configuration for a species build.
//!
//! Defaults are compile-time constants. Environment variables override them,
//! and the binary's command-line flags override both.

use anyhow::Result;
use std::path::PathBuf;
use tokio::time::Duration;

use crate::environment::{get_env_var_as_u64, get_env_var_or};
use crate::gbif::{DEFAULT_DELAY, GBIF_MATCH_URL, GBIF_SPECIES_URL, REQUEST_TIMEOUT};

pub const DEFAULT_OUTPUT_PATH: &str = "species_100_gbif.json";

pub const ENV_MATCH_URL: &str = "GBIF_MATCH_URL";
pub const ENV_SPECIES_URL: &str = "GBIF_SPECIES_URL";
pub const ENV_DELAY_MS: &str = "GBIF_DELAY_MS";
pub const ENV_OUTPUT_PATH: &str = "SPECIES_OUTPUT_PATH";

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Name-match endpoint; the scientific name is sent as the `name` query pair.
    pub match_url: String,
    /// Species detail endpoint; the taxon key is appended as a path segment.
    pub species_url: String,
    /// Pause observed after every request, successful or not.
    pub delay: Duration,
    pub request_timeout: Duration,
    pub output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            match_url: GBIF_MATCH_URL.to_string(),
            species_url: GBIF_SPECIES_URL.to_string(),
            delay: DEFAULT_DELAY,
            request_timeout: REQUEST_TIMEOUT,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl PipelineConfig {
    /// Builds a config from the defaults plus any environment overrides.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let delay = match get_env_var_as_u64(ENV_DELAY_MS)? {
            Some(ms) => Duration::from_millis(ms),
            None => defaults.delay,
        };

        Ok(Self {
            match_url: get_env_var_or(ENV_MATCH_URL, &defaults.match_url),
            species_url: get_env_var_or(ENV_SPECIES_URL, &defaults.species_url),
            delay,
            request_timeout: defaults.request_timeout,
            output_path: PathBuf::from(get_env_var_or(
                ENV_OUTPUT_PATH,
                &defaults.output_path.to_string_lossy(),
            )),
        })
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.match_url, "https://api.gbif.org/v1/species/match");
        assert_eq!(config.species_url, "https://api.gbif.org/v1/species");
        assert_eq!(config.delay, Duration::from_millis(250));
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.output_path, PathBuf::from("species_100_gbif.json"));
    }

    #[test]
    fn test_builders_override() {
        let config = PipelineConfig::default()
            .with_output_path("out/taxa.json")
            .with_delay(Duration::ZERO);
        assert_eq!(config.output_path, PathBuf::from("out/taxa.json"));
        assert_eq!(config.delay, Duration::ZERO);
    }

    #[test]
    fn test_from_env_overrides() {
        std::env::set_var(ENV_DELAY_MS, "40");
        std::env::set_var(ENV_OUTPUT_PATH, "taxa.json");
        let config = PipelineConfig::from_env().unwrap();
        assert_eq!(config.delay, Duration::from_millis(40));
        assert_eq!(config.output_path, PathBuf::from("taxa.json"));

        std::env::set_var(ENV_DELAY_MS, "soon");
        assert!(PipelineConfig::from_env().is_err());

        std::env::remove_var(ENV_DELAY_MS);
        std::env::remove_var(ENV_OUTPUT_PATH);
    }
}
