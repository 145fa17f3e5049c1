// ABOUTME: In-memory RegistryOps implementation for job tests.
// ABOUTME: Records every call and can be told to fail listings or individual deletes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use harbor_job::registry::{Project, RegistryError, RegistryOps, Repository, Tag};
use harbor_job::types::{ProjectId, RepositoryId};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// A registry call, in the order it was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListProjects,
    ListRepositories(i64),
    ListTags(String),
    DeleteTag(String, String),
}

#[derive(Default)]
pub struct FakeRegistry {
    projects: Vec<Project>,
    repositories: HashMap<i64, Vec<Repository>>,
    tags: Mutex<HashMap<String, Vec<Tag>>>,
    failing_deletes: HashSet<(String, String)>,
    failing_tag_lists: HashSet<String>,
    fail_projects: bool,
    fail_repositories: bool,
    calls: Mutex<Vec<Call>>,
}

pub fn at(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap()
}

fn server_error(body: &str) -> RegistryError {
    RegistryError::Status {
        url: "http://fake/api".to_string(),
        status: 500,
        body: body.to_string(),
    }
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, id: i64, name: &str) -> Self {
        self.projects.push(Project::new(ProjectId::new(id), name));
        self
    }

    /// Add a repository named `name` to project `project_id`, with `(tag, digest, created)` tags.
    pub fn with_repository(mut self, project_id: i64, name: &str, tags: &[(&str, &str, i64)]) -> Self {
        let repos = self.repositories.entry(project_id).or_default();
        let id = RepositoryId::new(repos.len() as i64 + 1);
        repos.push(Repository::new(id, name, ProjectId::new(project_id)));

        let tags = tags
            .iter()
            .map(|(tag, digest, secs)| Tag::new(*tag, *digest, at(*secs)))
            .collect();
        self.tags.lock().unwrap().insert(name.to_string(), tags);
        self
    }

    pub fn failing_delete(mut self, repository: &str, tag: &str) -> Self {
        self.failing_deletes
            .insert((repository.to_string(), tag.to_string()));
        self
    }

    pub fn failing_tag_list(mut self, repository: &str) -> Self {
        self.failing_tag_lists.insert(repository.to_string());
        self
    }

    pub fn failing_projects(mut self) -> Self {
        self.fail_projects = true;
        self
    }

    pub fn failing_repositories(mut self) -> Self {
        self.fail_repositories = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Delete calls made so far, as `(repository, tag)`.
    pub fn deletes(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::DeleteTag(repo, tag) => Some((repo, tag)),
                _ => None,
            })
            .collect()
    }

    /// Tag names currently stored for a repository, in listing order.
    pub fn tag_names(&self, repository: &str) -> Vec<String> {
        self.tags
            .lock()
            .unwrap()
            .get(repository)
            .map(|tags| tags.iter().map(|t| t.name.clone()).collect())
            .unwrap_or_default()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl RegistryOps for FakeRegistry {
    async fn list_projects(&self) -> Result<Vec<Project>, RegistryError> {
        self.record(Call::ListProjects);
        if self.fail_projects {
            return Err(server_error("projects unavailable"));
        }
        Ok(self.projects.clone())
    }

    async fn list_repositories(
        &self,
        project: ProjectId,
    ) -> Result<Vec<Repository>, RegistryError> {
        self.record(Call::ListRepositories(project.value()));
        if self.fail_repositories {
            return Err(server_error("repositories unavailable"));
        }
        Ok(self
            .repositories
            .get(&project.value())
            .cloned()
            .unwrap_or_default())
    }

    async fn list_tags(&self, repository: &str) -> Result<Vec<Tag>, RegistryError> {
        self.record(Call::ListTags(repository.to_string()));
        if self.failing_tag_lists.contains(repository) {
            return Err(server_error("tags unavailable"));
        }
        Ok(self
            .tags
            .lock()
            .unwrap()
            .get(repository)
            .cloned()
            .unwrap_or_default())
    }

    async fn delete_tag(&self, repository: &str, tag: &str) -> Result<(), RegistryError> {
        self.record(Call::DeleteTag(repository.to_string(), tag.to_string()));
        if self
            .failing_deletes
            .contains(&(repository.to_string(), tag.to_string()))
        {
            return Err(server_error("tag is locked"));
        }
        if let Some(tags) = self.tags.lock().unwrap().get_mut(repository) {
            tags.retain(|t| t.name != tag);
        }
        Ok(())
    }
}
