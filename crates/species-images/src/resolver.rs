//! Resolve species labels to taxa, trying each candidate name in turn

use crate::backend::{TaxonBackend, TaxonMatch};
use crate::candidates::expand_candidates;
use crate::error::Result;
use tracing::debug;

/// Resolve a species label against `backend`.
///
/// Every candidate is first tried with an exact lookup; the first candidate
/// that yields a match wins and later ones are never queried. When none
/// matches, every candidate is retried with the substring lookup as a
/// lower-confidence fallback. Returns `Ok(None)` when both passes come up empty.
pub async fn resolve_taxon<B>(backend: &B, label: &str) -> Result<Option<TaxonMatch>>
where
    B: TaxonBackend + ?Sized,
{
    let candidates = expand_candidates(label);

    for candidate in &candidates {
        let results = backend.lookup_exact(candidate).await?;
        if let Some(found) = select_best_match(results, candidate) {
            debug!(label, candidate = %candidate, id = found.id, "Exact match");
            return Ok(Some(found));
        }
    }

    for candidate in &candidates {
        let results = backend.lookup_contains(candidate).await?;
        if let Some(found) = select_best_match(results, candidate) {
            debug!(label, candidate = %candidate, id = found.id, "Substring match");
            return Ok(Some(found));
        }
    }

    Ok(None)
}

/// First result whose name equals `candidate` ignoring case, else the first result
pub fn select_best_match(results: Vec<TaxonMatch>, candidate: &str) -> Option<TaxonMatch> {
    let wanted = candidate.to_lowercase();
    let mut first = None;
    for result in results {
        if result.scientific_name.to_lowercase() == wanted {
            return Some(result);
        }
        if first.is_none() {
            first = Some(result);
        }
    }
    first
}
