// ABOUTME: Registry access for the retention job.
// ABOUTME: Defines the RegistryOps capability trait and the Harbor HTTP implementation.

mod api_path;
mod client;
mod error;
mod models;

pub use api_path::{ApiPath, ApiVersion, ParseApiVersionError};
pub use client::HarborClient;
pub use error::RegistryError;
pub use models::{Project, Repository, Tag};

use crate::types::ProjectId;
use async_trait::async_trait;

/// The four registry operations retention needs.
///
/// Implementations are expected to be already authenticated.
#[async_trait]
pub trait RegistryOps: Send + Sync {
    /// List every project visible to the session.
    async fn list_projects(&self) -> Result<Vec<Project>, RegistryError>;

    /// List the repositories of one project.
    async fn list_repositories(&self, project: ProjectId)
    -> Result<Vec<Repository>, RegistryError>;

    /// List all tags of a repository, in the registry's own order.
    async fn list_tags(&self, repository: &str) -> Result<Vec<Tag>, RegistryError>;

    /// Delete a single tag by name.
    async fn delete_tag(&self, repository: &str, tag: &str) -> Result<(), RegistryError>;
}
