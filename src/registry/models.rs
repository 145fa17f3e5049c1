// ABOUTME: Harbor v1 API payloads for projects, repositories and tags.
// ABOUTME: Only the fields the retention job reads are modelled; the rest are ignored.

use crate::types::{Digest, ProjectId, RepositoryId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    #[serde(rename = "project_id")]
    pub id: ProjectId,
    pub name: String,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub id: RepositoryId,
    /// Fully qualified, `project/repo`.
    pub name: String,
    pub project_id: ProjectId,
}

impl Repository {
    pub fn new(id: RepositoryId, name: impl Into<String>, project_id: ProjectId) -> Self {
        Self {
            id,
            name: name.into(),
            project_id,
        }
    }
}

/// One tag of a repository. Several tags may share a digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub digest: Digest,
    pub created: DateTime<Utc>,
}

impl Tag {
    pub fn new(
        name: impl Into<String>,
        digest: impl Into<Digest>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            digest: digest.into(),
            created,
        }
    }
}
