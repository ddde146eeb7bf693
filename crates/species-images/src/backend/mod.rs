//! Taxonomy backends the harvester can resolve names and list images against

mod gbif;
mod svampeatlas;

pub use gbif::GbifBackend;
pub use svampeatlas::SvampeatlasBackend;

use crate::error::Result;
use async_trait::async_trait;

/// A taxon resolved from a candidate name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonMatch {
    /// Identifier of the entry that matched the name
    pub id: u64,
    /// Identifier of the accepted taxon; equals `id` unless the match is a synonym
    pub accepted_id: u64,
    pub scientific_name: String,
}

impl TaxonMatch {
    /// Identifier used for media lookups
    pub fn effective_id(&self) -> u64 {
        self.accepted_id
    }

    pub fn is_synonym(&self) -> bool {
        self.id != self.accepted_id
    }
}

/// One page of media records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaPage {
    /// Image URLs per record, in record order. Records without media are empty.
    pub records: Vec<Vec<String>>,
    /// Total number of records the backend reports for the query
    pub total: u64,
}

/// How a backend's images are numbered and named on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileNaming {
    /// Number images by record position, counting records without a URL,
    /// instead of by position among the collected URLs
    pub number_by_record: bool,
    /// Extension for placeholder names and for suffixed names that have none
    pub default_extension: Option<&'static str>,
}

impl Default for FileNaming {
    fn default() -> Self {
        Self {
            number_by_record: false,
            default_extension: Some(crate::download::DEFAULT_EXTENSION),
        }
    }
}

/// Dialect of a taxonomy API: how names are looked up and how images are paged
#[async_trait]
pub trait TaxonBackend: Send + Sync {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Records requested per media page
    fn page_size(&self) -> u32;

    fn file_naming(&self) -> FileNaming {
        FileNaming::default()
    }

    /// Exact-name lookup. Entries the backend flags as "no match" are left out.
    async fn lookup_exact(&self, name: &str) -> Result<Vec<TaxonMatch>>;

    /// Substring lookup used when no candidate matched exactly.
    ///
    /// Backends without such a query return nothing.
    async fn lookup_contains(&self, _name: &str) -> Result<Vec<TaxonMatch>> {
        Ok(Vec::new())
    }

    /// Fetch one page of media records for a taxon
    async fn media_page(&self, taxon_id: u64, offset: u64, limit: u32) -> Result<MediaPage>;
}
