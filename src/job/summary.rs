// ABOUTME: Run summary returned by the retention job.
// ABOUTME: Records per-rule outcomes and per-tag deletion results for output and tests.

use serde::Serialize;

use super::options::RunMode;
use crate::diagnostics::Warning;
use crate::types::{Digest, ProjectId};

/// Everything a run did, in rule order.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub mode: RunMode,
    pub rules: Vec<RuleReport>,
    pub warnings: Vec<Warning>,
}

impl RunSummary {
    fn repositories(&self) -> impl Iterator<Item = &RepositoryReport> {
        self.rules.iter().flat_map(|r| r.outcome.repositories())
    }

    fn deletions(&self) -> impl Iterator<Item = &TagDeletion> {
        self.repositories().flat_map(|r| r.deletions.iter())
    }

    /// Repositories selected by some rule.
    pub fn repositories_matched(&self) -> usize {
        self.repositories().count()
    }

    /// Tags the plans marked for deletion, whether or not they were deleted.
    pub fn tags_planned(&self) -> usize {
        self.deletions().count()
    }

    pub fn tags_deleted(&self) -> usize {
        self.deletions()
            .filter(|d| matches!(d.status, DeletionStatus::Deleted))
            .count()
    }

    pub fn deletions_failed(&self) -> usize {
        self.deletions()
            .filter(|d| matches!(d.status, DeletionStatus::Failed { .. }))
            .count()
    }

    /// One-line result, e.g. for quiet output.
    pub fn headline(&self) -> String {
        match self.mode {
            RunMode::Delete => format!(
                "{} repositories matched, {} tags deleted, {} deletions failed",
                self.repositories_matched(),
                self.tags_deleted(),
                self.deletions_failed()
            ),
            RunMode::DryRun => format!(
                "{} repositories matched, {} tags would be deleted (dry run)",
                self.repositories_matched(),
                self.tags_planned()
            ),
            RunMode::MeanRepo => format!(
                "{} repositories matched (preview)",
                self.repositories_matched()
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RuleReport {
    pub project: String,
    pub pattern: String,
    pub keep_count: usize,
    pub outcome: RuleOutcome,
}

/// Terminal state of one rule.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RuleOutcome {
    /// Every matched repository was processed.
    Completed {
        project_id: ProjectId,
        /// Repositories in the project, matched or not.
        repositories_listed: usize,
        repositories: Vec<RepositoryReport>,
    },
    /// An earlier rule already processed this project in this run.
    SkippedDuplicate,
    /// The registry has no project with this name.
    ProjectNotFound,
}

impl RuleOutcome {
    pub fn repositories(&self) -> &[RepositoryReport] {
        match self {
            RuleOutcome::Completed { repositories, .. } => repositories,
            RuleOutcome::SkippedDuplicate | RuleOutcome::ProjectNotFound => &[],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RepositoryReport {
    pub name: String,
    /// Tags listed; `None` when tags were not fetched (repository preview).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_listed: Option<usize>,
    pub digests_kept: usize,
    pub deletions: Vec<TagDeletion>,
}

impl RepositoryReport {
    /// A repository that was matched but not inspected.
    pub fn previewed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags_listed: None,
            digests_kept: 0,
            deletions: Vec::new(),
        }
    }

    pub fn failed(&self) -> impl Iterator<Item = &TagDeletion> {
        self.deletions
            .iter()
            .filter(|d| matches!(d.status, DeletionStatus::Failed { .. }))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagDeletion {
    pub tag: String,
    pub digest: Digest,
    #[serde(flatten)]
    pub status: DeletionStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeletionStatus {
    Deleted,
    /// Planned only; dry run.
    Skipped,
    Failed { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deletion(tag: &str, status: DeletionStatus) -> TagDeletion {
        TagDeletion {
            tag: tag.to_string(),
            digest: Digest::new("sha256:aa"),
            status,
        }
    }

    fn summary(mode: RunMode, deletions: Vec<TagDeletion>) -> RunSummary {
        RunSummary {
            mode,
            rules: vec![
                RuleReport {
                    project: "library".to_string(),
                    pattern: ".*".to_string(),
                    keep_count: 1,
                    outcome: RuleOutcome::Completed {
                        project_id: ProjectId::new(1),
                        repositories_listed: 2,
                        repositories: vec![RepositoryReport {
                            name: "library/app".to_string(),
                            tags_listed: Some(4),
                            digests_kept: 1,
                            deletions,
                        }],
                    },
                },
                RuleReport {
                    project: "ghost".to_string(),
                    pattern: ".*".to_string(),
                    keep_count: 1,
                    outcome: RuleOutcome::ProjectNotFound,
                },
            ],
            warnings: Vec::new(),
        }
    }

    #[test]
    fn counts_deletions_by_status() {
        let s = summary(
            RunMode::Delete,
            vec![
                deletion("a", DeletionStatus::Deleted),
                deletion("b", DeletionStatus::Failed {
                    error: "500".to_string(),
                }),
                deletion("c", DeletionStatus::Deleted),
            ],
        );
        assert_eq!(s.repositories_matched(), 1);
        assert_eq!(s.tags_planned(), 3);
        assert_eq!(s.tags_deleted(), 2);
        assert_eq!(s.deletions_failed(), 1);
        assert_eq!(
            s.headline(),
            "1 repositories matched, 2 tags deleted, 1 deletions failed"
        );
    }

    #[test]
    fn dry_run_headline_reports_planned() {
        let s = summary(
            RunMode::DryRun,
            vec![deletion("a", DeletionStatus::Skipped)],
        );
        assert_eq!(
            s.headline(),
            "1 repositories matched, 1 tags would be deleted (dry run)"
        );
    }

    #[test]
    fn serializes_tagged_states() {
        let s = summary(
            RunMode::Delete,
            vec![deletion("b", DeletionStatus::Failed {
                error: "boom".to_string(),
            })],
        );
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["mode"], "delete");
        assert_eq!(json["rules"][0]["outcome"]["state"], "completed");
        assert_eq!(json["rules"][1]["outcome"]["state"], "project_not_found");
        let deletion = &json["rules"][0]["outcome"]["repositories"][0]["deletions"][0];
        assert_eq!(deletion["status"], "failed");
        assert_eq!(deletion["error"], "boom");
        assert_eq!(deletion["digest"], "sha256:aa");
    }
}
