//! Species image harvester
//!
//! Resolves a fixed list of mushroom species against a taxonomy API and
//! downloads their images into one directory per species. Two backends are
//! supported: GBIF occurrence images and the Danmarks Svampeatlas checklist.

pub mod app;
pub mod backend;
pub mod candidates;
pub mod config;
pub mod constants;
pub mod download;
pub mod error;
pub mod fetch;
pub mod harvest;
pub mod logging;
pub mod media;
pub mod resolver;
pub mod slug;

#[cfg(test)]
mod testing;

pub use backend::{FileNaming, GbifBackend, MediaPage, SvampeatlasBackend, TaxonBackend, TaxonMatch};
pub use candidates::expand_candidates;
pub use config::HarvestConfig;
pub use error::{HarvestError, Result};
pub use harvest::{HarvestReport, Harvester, SpeciesOutcome, SpeciesReport};
pub use slug::slugify;
