// ABOUTME: Run mode and immutable options for a retention run.
// ABOUTME: Built once from configuration and CLI flags, then handed to the job.

use serde::Serialize;
use std::time::Duration;

/// What a run is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    /// Plan and delete.
    #[default]
    Delete,
    /// Plan and report deletions without issuing them.
    DryRun,
    /// Only report which repositories each rule selects; tags are never listed.
    MeanRepo,
}

impl RunMode {
    /// Resolve CLI flags. The repository preview wins over dry run.
    pub fn from_flags(dry_run: bool, mean_repo: bool) -> Self {
        match (dry_run, mean_repo) {
            (_, true) => RunMode::MeanRepo,
            (true, false) => RunMode::DryRun,
            (false, false) => RunMode::Delete,
        }
    }

    /// Whether delete calls are actually sent.
    pub fn deletes(&self) -> bool {
        matches!(self, RunMode::Delete)
    }
}

#[derive(Debug, Clone)]
pub struct JobOptions {
    pub mode: RunMode,
    /// Pause between consecutive delete calls within a repository.
    pub delete_interval: Duration,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            mode: RunMode::default(),
            delete_interval: Duration::from_millis(200),
        }
    }
}
