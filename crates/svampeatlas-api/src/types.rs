//! Data types for Svampeatlas API requests and responses

use serde::Deserialize;
use serde_json::{json, Value};

/// Taxon record from `/taxa`
#[derive(Debug, Clone, Deserialize)]
pub struct Taxon {
    #[serde(rename = "_id")]
    pub id: Option<u64>,
    #[serde(rename = "FullName", default)]
    pub full_name: String,
    #[serde(rename = "Author")]
    pub author: Option<String>,
    #[serde(rename = "RankID")]
    pub rank_id: Option<u32>,
    /// Set when this entry is a synonym of another taxon
    pub accepted_id: Option<u64>,
    /// Only present when requested with the `TaxonImages` include
    #[serde(default)]
    pub images: Vec<TaxonImage>,
}

impl Taxon {
    /// Id of the accepted taxon, falling back to this entry's own id
    pub fn accepted_or_own_id(&self) -> Option<u64> {
        self.accepted_id.or(self.id)
    }
}

/// Image attached to a taxon
#[derive(Debug, Clone, Deserialize)]
pub struct TaxonImage {
    #[serde(rename = "_id")]
    pub id: Option<u64>,
    pub uri: Option<String>,
    pub thumburi: Option<String>,
    pub photographer: Option<String>,
    pub country: Option<String>,
}

/// Full-name filter for taxon queries, always restricted to species rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameFilter {
    /// `FullName` equals the value
    Exact(String),
    /// `FullName` contains the value (SQL `LIKE %value%`)
    Contains(String),
}

impl NameFilter {
    /// `RankID` of the species rank in the checklist
    pub const SPECIES_RANK_ID: u32 = 10000;

    /// The `where` clause sent to `/taxa`
    pub fn to_where(&self) -> Value {
        let full_name = match self {
            Self::Exact(name) => json!(name),
            Self::Contains(name) => json!({ "like": format!("%{}%", name) }),
        };
        json!({ "RankID": Self::SPECIES_RANK_ID, "FullName": full_name })
    }
}
