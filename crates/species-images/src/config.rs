//! Run configuration handed to the harvester

use crate::constants::*;
use std::path::PathBuf;
use std::time::Duration;

/// Read-only parameters of one harvest run
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Species labels, processed in order
    pub species: Vec<String>,
    /// Directory that receives one subdirectory per resolved species
    pub output_root: PathBuf,
    /// Target image count per species; `None` downloads everything listed
    pub max_images: Option<usize>,
    pub request_timeout: Duration,
}

impl HarvestConfig {
    /// Settings for the GBIF occurrence-image harvester
    pub fn gbif() -> Self {
        Self {
            species: default_species(),
            output_root: PathBuf::from(GBIF_OUTPUT_ROOT),
            max_images: Some(GBIF_IMAGES_PER_SPECIES),
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }

    /// Settings for the Svampeatlas checklist harvester
    pub fn svampeatlas() -> Self {
        Self {
            species: default_species(),
            output_root: PathBuf::from(SVAMPEATLAS_OUTPUT_ROOT),
            max_images: None,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

fn default_species() -> Vec<String> {
    SPECIES_NAMES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gbif_config() {
        let config = HarvestConfig::gbif();
        assert_eq!(config.species.len(), SPECIES_NAMES.len());
        assert_eq!(config.output_root, PathBuf::from("gbif_images"));
        assert_eq!(config.max_images, Some(25));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_svampeatlas_config_downloads_everything() {
        let config = HarvestConfig::svampeatlas();
        assert_eq!(config.output_root, PathBuf::from("species_images"));
        assert_eq!(config.max_images, None);
        assert_eq!(config.species[11], "Amanita excelsa (syn. Amanita spissa)");
    }
}
