// ABOUTME: Registry connection settings: URL, API version, credentials, timeout.
// ABOUTME: Debug output redacts the password.

use crate::registry::ApiVersion;
use std::fmt;
use std::time::Duration;

#[derive(Clone)]
pub struct RegistryConfig {
    pub url: String,
    pub version: ApiVersion,
    pub user: String,
    pub password: String,
    pub request_timeout: Duration,
}

pub(crate) fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

impl fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("url", &self.url)
            .field("version", &self.version)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
