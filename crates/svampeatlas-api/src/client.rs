//! Svampeatlas HTTP client

use crate::error::{SvampeatlasError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Client for the Danmarks Svampeatlas checklist API
pub struct SvampeatlasClient {
    http: reqwest::Client,
    base_url: String,
}

impl SvampeatlasClient {
    /// Base URL of the public API
    pub const BASE_URL: &'static str = "https://svampe.databasen.org/api";

    /// Create a new client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: Self::BASE_URL.to_string(),
        }
    }

    /// Point the client at a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Query species-rank taxa by full name
    pub async fn find_taxa(&self, filter: &NameFilter) -> Result<Vec<Taxon>> {
        self.get_json(&self.taxa_query_url(filter)).await
    }

    /// Fetch a taxon together with its image gallery
    pub async fn get_taxon_with_images(&self, taxon_id: u64) -> Result<Taxon> {
        self.get_json(&self.taxon_images_url(taxon_id)).await
    }

    fn taxa_query_url(&self, filter: &NameFilter) -> String {
        format!(
            "{}/taxa?nocount=true&where={}",
            self.base_url,
            urlencoding::encode(&filter.to_where().to_string())
        )
    }

    fn taxon_images_url(&self, taxon_id: u64) -> String {
        format!(
            "{}/taxa/{}?{}=TaxonImages&{}=images",
            self.base_url,
            taxon_id,
            urlencoding::encode("include[0][model]"),
            urlencoding::encode("include[0][as]")
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
            return Err(SvampeatlasError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Default for SvampeatlasClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_taxa_query_url() {
        let client = SvampeatlasClient::new();
        let url = client.taxa_query_url(&NameFilter::Exact("Amanita muscaria".to_string()));
        let encoded = url
            .strip_prefix("https://svampe.databasen.org/api/taxa?nocount=true&where=")
            .unwrap();
        assert!(!encoded.contains(' '));

        let decoded = urlencoding::decode(encoded).unwrap();
        let clause: serde_json::Value = serde_json::from_str(&decoded).unwrap();
        assert_eq!(
            clause,
            serde_json::json!({"RankID": 10000, "FullName": "Amanita muscaria"})
        );
    }

    #[test]
    fn test_taxon_images_url() {
        let client = SvampeatlasClient::new().with_base_url("http://localhost:9000/api/");
        assert_eq!(
            client.taxon_images_url(10451),
            "http://localhost:9000/api/taxa/10451?include%5B0%5D%5Bmodel%5D=TaxonImages&include%5B0%5D%5Bas%5D=images"
        );
    }

    #[tokio::test]
    async fn test_find_taxa_not_found_is_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/taxa"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = SvampeatlasClient::new().with_base_url(server.uri());
        let result = client
            .find_taxa(&NameFilter::Exact("Amanita regalis".to_string()))
            .await;
        match result {
            Err(SvampeatlasError::Status { status, url }) => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert!(url.contains("/taxa?nocount=true&where="));
            }
            other => panic!("expected status error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[tokio::test]
    async fn test_find_taxa_sends_where_clause() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/taxa"))
            .and(query_param("nocount", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"_id": 10460, "FullName": "Amanita spissa", "accepted_id": 10451}]"#,
            ))
            .mount(&server)
            .await;

        let client = SvampeatlasClient::new().with_base_url(server.uri());
        let taxa = client
            .find_taxa(&NameFilter::Contains("Amanita spissa".to_string()))
            .await
            .unwrap();
        assert_eq!(taxa.len(), 1);
        assert_eq!(taxa[0].accepted_or_own_id(), Some(10451));

        let requests = server.received_requests().await.unwrap();
        let clause = requests[0]
            .url
            .query_pairs()
            .find(|(k, _)| k == "where")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        let clause: serde_json::Value = serde_json::from_str(&clause).unwrap();
        assert_eq!(
            clause,
            serde_json::json!({"RankID": 10000, "FullName": {"like": "%Amanita spissa%"}})
        );
    }

    #[tokio::test]
    async fn test_malformed_gallery_is_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/taxa/10451"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = SvampeatlasClient::new().with_base_url(server.uri());
        let result = client.get_taxon_with_images(10451).await;
        assert!(matches!(result, Err(SvampeatlasError::Json(_))));
    }
}
