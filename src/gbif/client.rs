//! HTTP client creation and request handling for the GBIF API.

use anyhow::{Context, Result};
use reqwest::{header, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::{sleep, timeout, Duration};
use tracing::{debug, warn};
use url::Url;

use super::types::{MatchResponse, SpeciesDetail, USER_AGENT};
use crate::config::PipelineConfig;
use crate::error::SkipReason;
use crate::pipeline::TaxonLookup;
use crate::taxonomy::TaxonKey;
use crate::TARGET_WEB_REQUEST;

/// Helper function to validate a URL
pub fn is_valid_url(url: &str) -> bool {
    if let Ok(parsed) = Url::parse(url) {
        parsed.scheme() == "http" || parsed.scheme() == "https"
    } else {
        false
    }
}

/// Create the HTTP client shared by every request of a run
pub fn create_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .gzip(true)
        .redirect(reqwest::redirect::Policy::default())
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))
}

/// Sequential, rate-limited client for the name match and species detail endpoints.
pub struct GbifClient {
    http: reqwest::Client,
    match_url: Url,
    species_url: Url,
    delay: Duration,
    request_timeout: Duration,
}

impl GbifClient {
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        Ok(Self {
            http: create_http_client()?,
            match_url: parse_endpoint(&config.match_url)?,
            species_url: parse_endpoint(&config.species_url)?,
            delay: config.delay,
            request_timeout: config.request_timeout,
        })
    }

    /// Name match URL with `name` form-encoded into the query string.
    pub fn match_url(&self, scientific_name: &str) -> Url {
        let mut url = self.match_url.clone();
        url.query_pairs_mut().append_pair("name", scientific_name);
        url
    }

    /// Species detail URL with the key appended as the last path segment.
    pub fn species_url(&self, key: TaxonKey) -> Result<Url, SkipReason> {
        let mut url = self.species_url.clone();
        url.path_segments_mut()
            .map_err(|_| SkipReason::InvalidUrl(self.species_url.to_string()))?
            .pop_if_empty()
            .push(&key.to_string());
        Ok(url)
    }

    /// Resolve a scientific name to its backbone taxon key.
    pub async fn match_name(&self, scientific_name: &str) -> Result<TaxonKey, SkipReason> {
        let url = self.match_url(scientific_name);
        let response: Option<MatchResponse> = self.get_json(url).await?;
        let response = response.unwrap_or_default();

        debug!(target: TARGET_WEB_REQUEST,
               "Match for {}: type={:?} confidence={:?} name={:?} key={:?}",
               scientific_name, response.match_type, response.confidence,
               response.scientific_name, response.usage_key);

        match response.usage_key {
            Some(key) if key > 0 => Ok(TaxonKey(key)),
            _ => Err(SkipReason::NoMatch),
        }
    }

    /// Fetch the classification for a resolved taxon key.
    pub async fn species_detail(&self, key: TaxonKey) -> Result<SpeciesDetail, SkipReason> {
        let url = self.species_url(key)?;
        let payload: Value = self.get_json(url).await?;

        let is_empty = match &payload {
            Value::Null => true,
            Value::Object(fields) => fields.is_empty(),
            _ => false,
        };
        if is_empty {
            return Err(SkipReason::EmptyDetail);
        }

        serde_json::from_value(payload).map_err(|e| SkipReason::Decode(e.to_string()))
    }

    /// GET a JSON document, then wait out the rate-limit delay whatever the outcome.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SkipReason> {
        debug!(target: TARGET_WEB_REQUEST, "GET {}", url);

        let result = match timeout(self.request_timeout, self.fetch_json(url.clone())).await {
            Ok(result) => result,
            Err(_) => Err(SkipReason::Timeout(self.request_timeout)),
        };

        sleep(self.delay).await;

        if let Err(reason) = &result {
            warn!(target: TARGET_WEB_REQUEST, "Request to {} failed: {}", url, reason);
        }
        result
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SkipReason> {
        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SkipReason::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

impl TaxonLookup for GbifClient {
    async fn resolve(&self, scientific_name: &str) -> Result<TaxonKey, SkipReason> {
        self.match_name(scientific_name).await
    }

    async fn enrich(&self, key: TaxonKey) -> Result<SpeciesDetail, SkipReason> {
        self.species_detail(key).await
    }
}

fn parse_endpoint(endpoint: &str) -> Result<Url> {
    if !is_valid_url(endpoint) {
        anyhow::bail!("Endpoint must be an absolute http(s) URL: {}", endpoint);
    }
    Url::parse(endpoint).with_context(|| format!("Invalid endpoint URL: {}", endpoint))
}
