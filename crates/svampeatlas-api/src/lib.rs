//! Rust client for the Danmarks Svampeatlas checklist API
//!
//! The checklist exposes a loopback-style REST API where taxa are queried
//! with a JSON `where` filter and related models are pulled in with
//! `include` parameters.
//!
//! # API Coverage
//!
//! - `GET /taxa?where=...` - Filter taxa by rank and full name
//! - `GET /taxa/{id}?include=TaxonImages` - Taxon with its image gallery

mod client;
mod error;
mod types;

pub use client::SvampeatlasClient;
pub use error::{Result, SvampeatlasError};
pub use types::{NameFilter, Taxon, TaxonImage};
