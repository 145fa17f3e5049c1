// ABOUTME: Content digest newtype for image manifests.
// ABOUTME: Digests are the identity used to deduplicate tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content-addressed identifier of an image, e.g. `sha256:4f2a...`.
///
/// Several tag names may point at the same digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Algorithm prefix plus the first 12 hex characters, for log lines.
    pub fn short(&self) -> &str {
        let cut = match self.0.find(':') {
            Some(colon) => colon + 1 + 12,
            None => 12,
        };
        self.0.get(..cut).unwrap_or(&self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Digest {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
