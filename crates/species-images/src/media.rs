//! Collect image URLs for a resolved taxon across paginated media listings

use crate::backend::TaxonBackend;
use crate::error::Result;
use std::collections::HashSet;
use tracing::debug;

/// An image URL and the 1-based position of the record it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrl {
    pub url: String,
    pub record: usize,
}

/// Collect up to `max` unique image URLs for `taxon_id`; `None` collects all.
///
/// Pages are requested at the backend's page size until enough URLs are
/// gathered, a page comes back without records, or the offset reaches the
/// reported total. URLs are deduplicated by exact string and kept in
/// discovery order.
pub async fn collect_media_urls<B>(
    backend: &B,
    taxon_id: u64,
    max: Option<usize>,
) -> Result<Vec<MediaUrl>>
where
    B: TaxonBackend + ?Sized,
{
    let limit = max.unwrap_or(usize::MAX);
    let mut urls = Vec::new();
    let mut seen = HashSet::new();
    let mut offset: u64 = 0;

    while urls.len() < limit {
        let page = backend
            .media_page(taxon_id, offset, backend.page_size())
            .await?;
        if page.records.is_empty() {
            break;
        }

        'records: for (i, record) in page.records.iter().enumerate() {
            for url in record {
                if seen.insert(url.clone()) {
                    urls.push(MediaUrl {
                        url: url.clone(),
                        record: offset as usize + i + 1,
                    });
                    if urls.len() >= limit {
                        break 'records;
                    }
                }
            }
        }

        offset += page.records.len() as u64;
        debug!(
            taxon_id,
            offset,
            total = page.total,
            collected = urls.len(),
            "Fetched media page"
        );
        if offset >= page.total {
            break;
        }
    }

    Ok(urls)
}
