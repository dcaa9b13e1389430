//! Error types for the vignettes API client

use std::fmt;

/// Errors that can occur when calling the vignettes backend
#[derive(Debug)]
pub enum VignettesError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Backend answered with a non-success status
    Status(u16),
    /// Failed to parse JSON response
    Json(serde_json::Error),
}

impl fmt::Display for VignettesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Vignettes HTTP error: {}", e),
            Self::Status(code) => write!(f, "Vignettes backend returned status {}", code),
            Self::Json(e) => write!(f, "Vignettes JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for VignettesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Status(_) => None,
            Self::Json(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for VignettesError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for VignettesError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for vignettes API operations
pub type Result<T> = std::result::Result<T, VignettesError>;
