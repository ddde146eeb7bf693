//! Error types for the Svampeatlas client

use std::fmt;

/// Errors that can occur when interacting with the Svampeatlas API
#[derive(Debug)]
pub enum SvampeatlasError {
    /// Transport failure: connection, timeout or body read
    Http(reqwest::Error),
    /// The API answered with a non-success status
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    /// Failed to parse JSON response
    Json(serde_json::Error),
}

impl fmt::Display for SvampeatlasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Svampeatlas HTTP error: {}", e),
            Self::Status { status, url } => {
                write!(f, "Svampeatlas returned status {} for {}", status, url)
            }
            Self::Json(e) => write!(f, "Svampeatlas JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for SvampeatlasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for SvampeatlasError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for SvampeatlasError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, SvampeatlasError>;
