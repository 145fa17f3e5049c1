// ABOUTME: Retention rules: which project, which repositories, how many images to keep.
// ABOUTME: Repository patterns are compiled once when the rule is loaded.

use regex::Regex;
use std::fmt;

/// A declarative retention rule, immutable for the run.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Project name, matched exactly against the registry's projects.
    pub project: String,
    pub pattern: RepoPattern,
    /// Number of distinct digests to retain per repository. Zero deletes everything.
    pub keep_count: usize,
}

impl Rule {
    pub fn new(project: impl Into<String>, pattern: RepoPattern, keep_count: usize) -> Self {
        Self {
            project: project.into(),
            pattern,
            keep_count,
        }
    }
}

/// How a rule selects repositories by name.
#[derive(Debug, Clone)]
pub enum RepoPattern {
    /// Unanchored regular expression search.
    Regex(Regex),
    /// Exact name, requested explicitly.
    Literal(String),
    /// Did not compile as a regular expression; matched by exact name.
    Fallback { pattern: String, reason: String },
}

impl RepoPattern {
    /// Compile `pattern` as a regex, falling back to exact matching when it is invalid.
    ///
    /// The fallback lets users write literal repository names without escaping
    /// metacharacters.
    pub fn compile(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(re) => RepoPattern::Regex(re),
            Err(e) => RepoPattern::Fallback {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            },
        }
    }

    /// Compile `pattern` as a regex and fail if it is invalid.
    pub fn strict(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(RepoPattern::Regex)
    }

    pub fn literal(name: impl Into<String>) -> Self {
        RepoPattern::Literal(name.into())
    }

    pub fn is_match(&self, repository: &str) -> bool {
        match self {
            RepoPattern::Regex(re) => re.is_match(repository),
            RepoPattern::Literal(name) => name == repository,
            RepoPattern::Fallback { pattern, .. } => pattern == repository,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RepoPattern::Regex(re) => re.as_str(),
            RepoPattern::Literal(name) => name,
            RepoPattern::Fallback { pattern, .. } => pattern,
        }
    }

    /// Why the pattern is being matched literally, when that was not asked for.
    pub fn fallback_reason(&self) -> Option<&str> {
        match self {
            RepoPattern::Fallback { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for RepoPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
