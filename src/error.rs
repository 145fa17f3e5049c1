// ABOUTME: Application-wide error types for harbor-job.
// ABOUTME: Uses thiserror for ergonomic error handling.

use std::path::PathBuf;
use thiserror::Error;

use crate::job::JobError;
use crate::registry::RegistryError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("configuration is missing the [{0}] section")]
    MissingSection(&'static str),

    #[error("missing required key '{key}' in section [{section}]")]
    MissingKey { section: String, key: &'static str },

    #[error("invalid value for '{key}' in section [{section}]: {reason}")]
    InvalidValue {
        section: String,
        key: &'static str,
        reason: String,
    },

    #[error("invalid repository pattern '{pattern}' for project {project}: {source}")]
    InvalidPattern {
        project: String,
        pattern: String,
        source: regex::Error,
    },

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error("authentication failed: {0}")]
    Authentication(#[source] RegistryError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Job(#[from] JobError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("INI parse error: {0}")]
    Ini(#[from] ini::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
