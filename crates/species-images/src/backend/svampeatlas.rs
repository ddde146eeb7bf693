//! Svampeatlas checklist lookups and taxon image galleries

use super::{FileNaming, MediaPage, TaxonBackend, TaxonMatch};
use crate::error::Result;
use async_trait::async_trait;
use svampeatlas_api::{NameFilter, SvampeatlasClient, Taxon};
use tracing::debug;

pub struct SvampeatlasBackend {
    api: SvampeatlasClient,
}

impl SvampeatlasBackend {
    pub fn new(api: SvampeatlasClient) -> Self {
        Self { api }
    }

    async fn find(&self, filter: NameFilter) -> Result<Vec<TaxonMatch>> {
        let taxa = self.api.find_taxa(&filter).await?;
        debug!(filter = ?filter, results = taxa.len(), "Svampeatlas taxa query");
        Ok(taxa.into_iter().filter_map(to_taxon_match).collect())
    }
}

fn to_taxon_match(taxon: Taxon) -> Option<TaxonMatch> {
    let id = taxon.id?;
    Some(TaxonMatch {
        id,
        accepted_id: taxon.accepted_id.unwrap_or(id),
        scientific_name: taxon.full_name,
    })
}

#[async_trait]
impl TaxonBackend for SvampeatlasBackend {
    fn name(&self) -> &'static str {
        "Svampeatlas"
    }

    /// The gallery endpoint is not paginated; one request returns every image
    fn page_size(&self) -> u32 {
        u32::MAX
    }

    /// Gallery position numbers the files and no extension is invented
    fn file_naming(&self) -> FileNaming {
        FileNaming {
            number_by_record: true,
            default_extension: None,
        }
    }

    async fn lookup_exact(&self, name: &str) -> Result<Vec<TaxonMatch>> {
        self.find(NameFilter::Exact(name.to_string())).await
    }

    async fn lookup_contains(&self, name: &str) -> Result<Vec<TaxonMatch>> {
        self.find(NameFilter::Contains(name.to_string())).await
    }

    async fn media_page(&self, taxon_id: u64, offset: u64, _limit: u32) -> Result<MediaPage> {
        if offset > 0 {
            return Ok(MediaPage::default());
        }
        let taxon = self.api.get_taxon_with_images(taxon_id).await?;
        let records: Vec<Vec<String>> = taxon
            .images
            .into_iter()
            .map(|image| image.uri.filter(|uri| !uri.is_empty()).into_iter().collect())
            .collect();
        Ok(MediaPage {
            total: records.len() as u64,
            records,
        })
    }
}
