// ABOUTME: Fatal retention-run errors with SNAFU context selectors.
// ABOUTME: Listing failures abort the run; per-tag delete failures never reach here.

use snafu::Snafu;

use crate::registry::RegistryError;

/// A failure that aborts the whole run.
///
/// A listing call failing means the registry is unreachable or misbehaving,
/// not that one item is bad, so there is nothing worth continuing with.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum JobError {
    #[snafu(display("failed to list projects: {source}"))]
    ListProjects { source: RegistryError },

    #[snafu(display("failed to list repositories of project {project}: {source}"))]
    ListRepositories {
        project: String,
        source: RegistryError,
    },

    #[snafu(display("failed to list tags of repository {repository}: {source}"))]
    ListTags {
        repository: String,
        source: RegistryError,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobErrorKind {
    ListProjects,
    ListRepositories,
    ListTags,
}

impl JobError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> JobErrorKind {
        match self {
            JobError::ListProjects { .. } => JobErrorKind::ListProjects,
            JobError::ListRepositories { .. } => JobErrorKind::ListRepositories,
            JobError::ListTags { .. } => JobErrorKind::ListTags,
        }
    }

    /// The registry error underneath.
    pub fn registry_error(&self) -> &RegistryError {
        match self {
            JobError::ListProjects { source }
            | JobError::ListRepositories { source, .. }
            | JobError::ListTags { source, .. } => source,
        }
    }
}
