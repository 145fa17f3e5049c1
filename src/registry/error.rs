// ABOUTME: Error types for Harbor API calls.
// ABOUTME: Any response outside the 2xx range becomes a Status error carrying the body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("invalid registry url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported url scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
}

impl RegistryError {
    /// HTTP status of the failed response, if the registry answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RegistryError::Status { status, .. } => Some(*status),
            RegistryError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
