//! Rust client for the GBIF (Global Biodiversity Information Facility) API
//!
//! This crate provides type-safe bindings to the parts of the GBIF API needed
//! to resolve a scientific name and page through its occurrence images.
//!
//! # Example
//!
//! ```no_run
//! use gbif_api::GbifClient;
//!
//! # async fn example() -> Result<(), gbif_api::GbifError> {
//! let client = GbifClient::new();
//!
//! let matched = client.match_name("Amanita muscaria").await?;
//! if let Some(key) = matched.accepted_key() {
//!     let page = client.search_occurrence_images(key, 0, 300).await?;
//!     for record in page.results {
//!         println!("{:?}", record.image_urls());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! ## Species API v1
//! - `GET /species/match` - Match name to backbone taxonomy
//!
//! ## Occurrence API v1
//! - `GET /occurrence/search` - Paginated occurrence search (filtered to still images)

mod client;
mod error;
mod types;

pub use client::GbifClient;
pub use error::{GbifError, Result};
pub use types::{MatchType, NameMatch, Occurrence, OccurrenceMedia, OccurrencePage};
