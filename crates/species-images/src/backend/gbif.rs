//! GBIF backbone matching and occurrence images

use super::{MediaPage, TaxonBackend, TaxonMatch};
use crate::constants::GBIF_OCCURRENCE_PAGE_SIZE;
use crate::error::Result;
use async_trait::async_trait;
use gbif_api::{GbifClient, NameMatch};
use tracing::debug;

pub struct GbifBackend {
    api: GbifClient,
}

impl GbifBackend {
    pub fn new(api: GbifClient) -> Self {
        Self { api }
    }
}

/// Convert a backbone match, dropping `matchType: NONE` answers
fn to_taxon_match(matched: NameMatch, candidate: &str) -> Option<TaxonMatch> {
    if !matched.is_match() {
        return None;
    }
    let accepted_id = matched.accepted_key()?;
    Some(TaxonMatch {
        id: matched.usage_key.unwrap_or(accepted_id),
        accepted_id,
        scientific_name: matched
            .scientific_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| candidate.to_string()),
    })
}

#[async_trait]
impl TaxonBackend for GbifBackend {
    fn name(&self) -> &'static str {
        "GBIF"
    }

    fn page_size(&self) -> u32 {
        GBIF_OCCURRENCE_PAGE_SIZE
    }

    async fn lookup_exact(&self, name: &str) -> Result<Vec<TaxonMatch>> {
        let matched = self.api.match_name(name).await?;
        debug!(
            candidate = name,
            match_type = ?matched.match_type,
            usage_key = ?matched.usage_key,
            "GBIF backbone match"
        );
        Ok(to_taxon_match(matched, name).into_iter().collect())
    }

    async fn media_page(&self, taxon_id: u64, offset: u64, limit: u32) -> Result<MediaPage> {
        let page = self
            .api
            .search_occurrence_images(taxon_id, offset, limit)
            .await?;
        Ok(MediaPage {
            records: page.results.iter().map(|r| r.image_urls()).collect(),
            total: page.count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> NameMatch {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_exact_match() {
        let matched = parse(
            r#"{"usageKey": 2524598, "scientificName": "Amanita muscaria (L.) Lam.", "matchType": "EXACT"}"#,
        );
        assert_eq!(
            to_taxon_match(matched, "Amanita muscaria"),
            Some(TaxonMatch {
                id: 2524598,
                accepted_id: 2524598,
                scientific_name: "Amanita muscaria (L.) Lam.".to_string(),
            })
        );
    }

    #[test]
    fn test_synonym_redirects_to_accepted_key() {
        let matched = parse(
            r#"{"usageKey": 10, "acceptedUsageKey": 20, "scientificName": "Amanita spissa", "matchType": "EXACT", "synonym": true}"#,
        );
        let taxon = to_taxon_match(matched, "Amanita spissa").unwrap();
        assert!(taxon.is_synonym());
        assert_eq!(taxon.effective_id(), 20);
    }

    #[test]
    fn test_missing_scientific_name_falls_back_to_candidate() {
        let matched = parse(r#"{"usageKey": 7, "matchType": "FUZZY"}"#);
        let taxon = to_taxon_match(matched, "Panaeolus subfirmus").unwrap();
        assert_eq!(taxon.scientific_name, "Panaeolus subfirmus");
    }

    #[test]
    fn test_none_match_is_dropped() {
        let matched = parse(r#"{"usageKey": 7, "matchType": "NONE"}"#);
        assert_eq!(to_taxon_match(matched, "x"), None);
        let matched = parse(r#"{"matchType": "EXACT"}"#);
        assert_eq!(to_taxon_match(matched, "x"), None);
    }
}
