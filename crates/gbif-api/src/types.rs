//! Data types for GBIF API responses
//!
//! These structs mirror the GBIF API responses. Some fields may not be used
//! but are kept for completeness and future use.

use serde::Deserialize;

/// How a name was matched against the backbone taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Exact,
    Fuzzy,
    HigherRank,
    None,
}

impl MatchType {
    /// Parse a GBIF `matchType` value, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "EXACT" => Some(Self::Exact),
            "FUZZY" => Some(Self::Fuzzy),
            "HIGHERRANK" => Some(Self::HigherRank),
            "NONE" => Some(Self::None),
            _ => None,
        }
    }
}

/// Result from GBIF v1 `/species/match` endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameMatch {
    pub usage_key: Option<u64>,
    pub accepted_usage_key: Option<u64>,
    pub scientific_name: Option<String>,
    pub canonical_name: Option<String>,
    pub rank: Option<String>,
    pub status: Option<String>,
    pub confidence: Option<u32>,
    pub match_type: Option<String>,
    #[serde(default)]
    pub synonym: bool,
}

impl NameMatch {
    /// Key to use for follow-up lookups: the accepted usage when the
    /// matched name is a synonym, otherwise the matched usage itself
    pub fn accepted_key(&self) -> Option<u64> {
        self.accepted_usage_key.or(self.usage_key)
    }

    /// True when GBIF reported a key and a match type other than `NONE`.
    ///
    /// Unknown match types still count as a match.
    pub fn is_match(&self) -> bool {
        let Some(raw) = self.match_type.as_deref() else {
            return false;
        };
        self.accepted_key().is_some() && MatchType::parse(raw) != Some(MatchType::None)
    }
}

/// Paginated response from GBIF v1 `/occurrence/search`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrencePage {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub end_of_records: bool,
    /// Total number of matching occurrences across all pages
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub results: Vec<Occurrence>,
}

/// A single occurrence record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub key: Option<u64>,
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub media: Option<Vec<OccurrenceMedia>>,
}

impl Occurrence {
    /// Image URLs attached to this record, in record order.
    ///
    /// Prefers the media `identifier` and falls back to `references`.
    pub fn image_urls(&self) -> Vec<String> {
        self.media
            .iter()
            .flatten()
            .filter_map(|m| {
                m.identifier
                    .as_deref()
                    .filter(|s| !s.is_empty())
                    .or_else(|| m.references.as_deref().filter(|s| !s.is_empty()))
                    .map(str::to_string)
            })
            .collect()
    }
}

/// Media item attached to an occurrence
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceMedia {
    pub r#type: Option<String>,
    pub format: Option<String>,
    pub identifier: Option<String>,
    pub references: Option<String>,
    pub creator: Option<String>,
    pub license: Option<String>,
}
