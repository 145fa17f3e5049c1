// ABOUTME: Harbor API version parsing and endpoint URL construction.
// ABOUTME: Selects the login endpoint by version and percent-encodes path segments.

use std::fmt;
use std::str::FromStr;

/// Harbor API version as configured, compared numerically (`1.10 > 1.7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    major: u32,
    minor: u32,
}

impl ApiVersion {
    /// First release serving the login form under `/c/login`.
    pub const PREFIXED_LOGIN: ApiVersion = ApiVersion::new(1, 7);

    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid Harbor version '{0}': expected MAJOR[.MINOR[.PATCH]]")]
pub struct ParseApiVersionError(String);

impl FromStr for ApiVersion {
    type Err = ParseApiVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let mut parts = digits.split('.');
        let parse = |part: Option<&str>| -> Result<Option<u32>, ParseApiVersionError> {
            part.map(|p| p.parse::<u32>())
                .transpose()
                .map_err(|_| ParseApiVersionError(s.to_string()))
        };

        let major = parse(parts.next())?.ok_or_else(|| ParseApiVersionError(s.to_string()))?;
        let minor = parse(parts.next())?.unwrap_or(0);
        // Patch level doesn't change any endpoint, but it still has to be numeric.
        parse(parts.next())?;
        if parts.next().is_some() {
            return Err(ParseApiVersionError(s.to_string()));
        }

        Ok(Self::new(major, minor))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Builds endpoint URLs for one Harbor instance.
#[derive(Debug, Clone)]
pub struct ApiPath {
    base: String,
    version: ApiVersion,
}

impl ApiPath {
    pub fn new(base: &str, version: ApiVersion) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
            version,
        }
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    pub fn ping(&self) -> String {
        format!("{}/api/ping", self.base)
    }

    pub fn login(&self) -> String {
        if self.version >= ApiVersion::PREFIXED_LOGIN {
            format!("{}/c/login", self.base)
        } else {
            format!("{}/login", self.base)
        }
    }

    pub fn projects(&self) -> String {
        format!("{}/api/projects", self.base)
    }

    /// Repository listing; the project filter goes in the query string.
    pub fn repositories(&self) -> String {
        format!("{}/api/repositories", self.base)
    }

    pub fn tags(&self, repository: &str) -> String {
        format!(
            "{}/api/repositories/{}/tags",
            self.base,
            encode_repository(repository)
        )
    }

    pub fn tag(&self, repository: &str, tag: &str) -> String {
        format!(
            "{}/api/repositories/{}/tags/{}",
            self.base,
            encode_repository(repository),
            urlencoding::encode(tag)
        )
    }
}

/// Repository names are `project/repo[/more]`; the slashes are part of the path.
fn encode_repository(repository: &str) -> String {
    repository
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
