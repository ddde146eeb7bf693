//! GBIF API HTTP client

use crate::error::{GbifError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for interacting with the GBIF (Global Biodiversity Information Facility) API
pub struct GbifClient {
    http: reqwest::Client,
    base_url: String,
}

impl GbifClient {
    /// Base URL for GBIF API v1
    pub const V1_BASE_URL: &'static str = "https://api.gbif.org/v1";

    /// Media type filter used for occurrence image searches
    pub const STILL_IMAGE: &'static str = "StillImage";

    /// Create a new GBIF client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new GBIF client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: Self::V1_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root (mirrors, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Match a scientific name against the GBIF backbone taxonomy
    ///
    /// GBIF always answers with a body; a failed match carries
    /// `matchType: NONE` and no usage key. Use [`NameMatch::is_match`] to
    /// tell the two apart.
    ///
    /// # Arguments
    /// * `name` - Scientific name to match
    pub async fn match_name(&self, name: &str) -> Result<NameMatch> {
        self.get_json(&self.match_url(name)).await
    }

    /// Fetch one page of occurrences with still images for a taxon
    ///
    /// # Arguments
    /// * `taxon_key` - GBIF backbone key; occurrences of descendant taxa are included
    /// * `offset` - Number of records to skip
    /// * `limit` - Page size (GBIF caps this at 300)
    pub async fn search_occurrence_images(
        &self,
        taxon_key: u64,
        offset: u64,
        limit: u32,
    ) -> Result<OccurrencePage> {
        self.get_json(&self.occurrence_search_url(taxon_key, offset, limit))
            .await
    }

    fn match_url(&self, name: &str) -> String {
        format!(
            "{}/species/match?name={}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    fn occurrence_search_url(&self, taxon_key: u64, offset: u64, limit: u32) -> String {
        format!(
            "{}/occurrence/search?taxonKey={}&mediaType={}&limit={}&offset={}",
            self.base_url,
            taxon_key,
            Self::STILL_IMAGE,
            limit,
            offset
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GbifError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for GbifClient {
    fn default() -> Self {
        Self::new()
    }
}
