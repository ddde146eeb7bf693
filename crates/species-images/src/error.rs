//! Error types for the species image harvester

use std::fmt;

#[derive(Debug)]
pub enum HarvestError {
    /// GBIF API error
    Gbif(gbif_api::GbifError),
    /// Svampeatlas API error
    Svampeatlas(svampeatlas_api::SvampeatlasError),
    /// Image download failed or returned a non-success status
    Http(reqwest::Error),
    Io(Box<std::io::Error>),
    /// Configuration error
    Config(String),
}

impl fmt::Display for HarvestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gbif(e) => write!(f, "{}", e),
            Self::Svampeatlas(e) => write!(f, "{}", e),
            Self::Http(e) => write!(f, "HTTP error: {}", e),
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for HarvestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gbif(e) => Some(e),
            Self::Svampeatlas(e) => Some(e),
            Self::Http(e) => Some(e),
            Self::Io(e) => Some(e.as_ref()),
            Self::Config(_) => None,
        }
    }
}

impl From<gbif_api::GbifError> for HarvestError {
    fn from(e: gbif_api::GbifError) -> Self {
        Self::Gbif(e)
    }
}

impl From<svampeatlas_api::SvampeatlasError> for HarvestError {
    fn from(e: svampeatlas_api::SvampeatlasError) -> Self {
        Self::Svampeatlas(e)
    }
}

impl From<reqwest::Error> for HarvestError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<std::io::Error> for HarvestError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(Box::new(e))
    }
}

impl From<tracing_subscriber::filter::ParseError> for HarvestError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;
