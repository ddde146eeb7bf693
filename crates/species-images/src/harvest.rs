//! Per-species orchestration: resolve, list media, download

use crate::backend::{TaxonBackend, TaxonMatch};
use crate::config::HarvestConfig;
use crate::download::SpeciesDownloader;
use crate::error::Result;
use crate::fetch::ImageFetcher;
use crate::media::collect_media_urls;
use crate::resolver::resolve_taxon;
use crate::slug::slugify;
use std::path::PathBuf;
use tracing::{info, warn};

/// Directory name used when a scientific name slugifies to nothing
const UNNAMED_SPECIES_DIR: &str = "unnamed";

/// What happened to one species label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeciesOutcome {
    /// No candidate name matched in either lookup pass
    Unresolved,
    /// Resolved, but the backend lists no images for the taxon
    NoImages { taxon: TaxonMatch },
    Downloaded {
        taxon: TaxonMatch,
        /// Number of unique image URLs listed
        found: usize,
        saved: Vec<PathBuf>,
        /// URLs whose download failed
        failed: Vec<String>,
    },
}

#[derive(Debug, Clone)]
pub struct SpeciesReport {
    pub label: String,
    pub outcome: SpeciesOutcome,
}

/// Outcome of a whole run, in species order
#[derive(Debug, Clone, Default)]
pub struct HarvestReport {
    pub species: Vec<SpeciesReport>,
}

impl HarvestReport {
    /// Labels that could not be resolved
    pub fn unresolved(&self) -> Vec<&str> {
        self.species
            .iter()
            .filter(|s| s.outcome == SpeciesOutcome::Unresolved)
            .map(|s| s.label.as_str())
            .collect()
    }

    /// True when every label resolved. Missing images do not count against this.
    pub fn all_resolved(&self) -> bool {
        self.unresolved().is_empty()
    }

    pub fn log_summary(&self) {
        let unresolved = self.unresolved();
        if unresolved.is_empty() {
            info!("Done.");
            return;
        }
        warn!("Species that could not be resolved:");
        for label in unresolved {
            warn!("  - {}", label);
        }
    }
}

/// Runs the configured species list against one backend
pub struct Harvester<'a, B: ?Sized, F: ?Sized> {
    config: &'a HarvestConfig,
    backend: &'a B,
    fetcher: &'a F,
}

impl<'a, B, F> Harvester<'a, B, F>
where
    B: TaxonBackend + ?Sized,
    F: ImageFetcher + ?Sized,
{
    pub fn new(config: &'a HarvestConfig, backend: &'a B, fetcher: &'a F) -> Self {
        Self {
            config,
            backend,
            fetcher,
        }
    }

    /// Process every species in order.
    ///
    /// Unresolved species and failed image downloads are recorded in the
    /// report; errors from the backend's lookup or listing queries abort the run.
    pub async fn run(&self) -> Result<HarvestReport> {
        tokio::fs::create_dir_all(&self.config.output_root).await?;

        let mut report = HarvestReport::default();
        for label in &self.config.species {
            let outcome = self.harvest_species(label).await?;
            report.species.push(SpeciesReport {
                label: label.clone(),
                outcome,
            });
        }
        Ok(report)
    }

    pub async fn harvest_species(&self, label: &str) -> Result<SpeciesOutcome> {
        info!("Processing: {}", label);

        let Some(taxon) = resolve_taxon(self.backend, label).await? else {
            warn!(
                "Unable to resolve species '{}' in {}",
                label,
                self.backend.name()
            );
            return Ok(SpeciesOutcome::Unresolved);
        };
        info!(
            "Resolved to taxon #{} ({})",
            taxon.effective_id(),
            taxon.scientific_name
        );

        let urls =
            collect_media_urls(self.backend, taxon.effective_id(), self.config.max_images).await?;
        if urls.is_empty() {
            warn!("No images found for {}", taxon.scientific_name);
            return Ok(SpeciesOutcome::NoImages { taxon });
        }

        let naming = self.backend.file_naming();
        let mut downloader = SpeciesDownloader::new(self.fetcher, self.species_dir(&taxon))
            .with_default_extension(naming.default_extension);
        let mut saved = Vec::new();
        let mut failed = Vec::new();
        for (i, media) in urls.iter().enumerate() {
            let index = if naming.number_by_record {
                media.record
            } else {
                i + 1
            };
            let url = &media.url;
            match downloader.download(url, index).await {
                Ok(path) => {
                    info!("Saved {}", path.display());
                    saved.push(path);
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "Failed to download image");
                    failed.push(url.clone());
                }
            }
        }

        if let Some(target) = self.config.max_images {
            if urls.len() < target {
                warn!(
                    "Only {} images were available (requested {})",
                    urls.len(),
                    target
                );
            }
        }

        Ok(SpeciesOutcome::Downloaded {
            taxon,
            found: urls.len(),
            saved,
            failed,
        })
    }

    fn species_dir(&self, taxon: &TaxonMatch) -> PathBuf {
        let slug = slugify(&taxon.scientific_name);
        let name = if slug.is_empty() {
            UNNAMED_SPECIES_DIR.to_string()
        } else {
            slug
        };
        self.config.output_root.join(name)
    }
}
