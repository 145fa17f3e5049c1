// ABOUTME: Retention job orchestrator: walks rules, projects and repositories in order.
// ABOUTME: Applies planner decisions through the registry and isolates per-tag failures.

use snafu::ResultExt;
use std::collections::HashSet;

use super::error::{JobError, ListProjectsSnafu, ListRepositoriesSnafu, ListTagsSnafu};
use super::options::{JobOptions, RunMode};
use super::summary::{
    DeletionStatus, RepositoryReport, RuleOutcome, RuleReport, RunSummary, TagDeletion,
};
use crate::diagnostics::{Diagnostics, Warning};
use crate::registry::{Project, RegistryOps, Repository};
use crate::retention::{Rule, plan, resolve_project, select_repositories};

/// One retention run. Construct per run; `run` consumes it.
///
/// Processing is strictly sequential: one rule, one repository and one delete
/// call at a time.
#[derive(Debug)]
pub struct Job {
    options: JobOptions,
    projects_done: HashSet<String>,
    diag: Diagnostics,
}

impl Job {
    pub fn new(options: JobOptions) -> Self {
        Self {
            options,
            projects_done: HashSet::new(),
            diag: Diagnostics::default(),
        }
    }

    /// Apply `rules` in order against `registry`.
    ///
    /// Listing failures abort with an error. Missing projects and failed tag
    /// deletions are recorded in the summary and the run carries on.
    pub async fn run<R>(mut self, rules: &[Rule], registry: &R) -> Result<RunSummary, JobError>
    where
        R: RegistryOps + ?Sized,
    {
        for rule in rules {
            if let Some(reason) = rule.pattern.fallback_reason() {
                self.diag.warn(Warning::pattern_fallback(format!(
                    "pattern '{}' for project {} is not a valid regex ({}), matching it as an exact repository name",
                    rule.pattern,
                    rule.project,
                    reason.lines().last().unwrap_or(reason)
                )));
            }
        }

        let projects = registry.list_projects().await.context(ListProjectsSnafu)?;
        tracing::info!("found {} projects", projects.len());

        let mut reports = Vec::with_capacity(rules.len());
        for rule in rules {
            let outcome = self.run_rule(rule, &projects, registry).await?;
            reports.push(RuleReport {
                project: rule.project.clone(),
                pattern: rule.pattern.to_string(),
                keep_count: rule.keep_count,
                outcome,
            });
        }

        tracing::info!("all rules done");
        Ok(RunSummary {
            mode: self.options.mode,
            rules: reports,
            warnings: self.diag.into_warnings(),
        })
    }

    async fn run_rule<R>(
        &mut self,
        rule: &Rule,
        projects: &[Project],
        registry: &R,
    ) -> Result<RuleOutcome, JobError>
    where
        R: RegistryOps + ?Sized,
    {
        if self.projects_done.contains(&rule.project) {
            tracing::info!(
                project = %rule.project,
                pattern = %rule.pattern,
                "project already processed in this run, skipping rule"
            );
            return Ok(RuleOutcome::SkippedDuplicate);
        }

        let Some(project) = resolve_project(&rule.project, projects) else {
            self.diag.warn(Warning::project_not_found(format!(
                "project {} not found in registry, skipping rule",
                rule.project
            )));
            return Ok(RuleOutcome::ProjectNotFound);
        };

        let listed = registry
            .list_repositories(project.id)
            .await
            .context(ListRepositoriesSnafu {
                project: &project.name,
            })?;
        tracing::info!(
            "found {} repositories in project {}",
            listed.len(),
            project.name
        );

        let mut repositories = Vec::new();
        for repo in select_repositories(&rule.pattern, &listed) {
            tracing::debug!(repository = %repo.name, pattern = %rule.pattern, "repository matched");

            let report = if self.options.mode == RunMode::MeanRepo {
                tracing::info!("rule {} matches repository {}", rule.project, repo.name);
                RepositoryReport::previewed(&repo.name)
            } else {
                self.process_repository(rule, repo, registry).await?
            };
            repositories.push(report);
        }

        self.projects_done.insert(rule.project.clone());
        tracing::info!("project {} done", project.name);

        Ok(RuleOutcome::Completed {
            project_id: project.id,
            repositories_listed: listed.len(),
            repositories,
        })
    }

    async fn process_repository<R>(
        &mut self,
        rule: &Rule,
        repo: &Repository,
        registry: &R,
    ) -> Result<RepositoryReport, JobError>
    where
        R: RegistryOps + ?Sized,
    {
        let tags = registry
            .list_tags(&repo.name)
            .await
            .context(ListTagsSnafu {
                repository: &repo.name,
            })?;
        let tags_listed = tags.len();
        tracing::debug!("found {} tags in repository {}", tags_listed, repo.name);

        let decision = plan(tags, rule.keep_count);
        for tag in decision.retained() {
            tracing::trace!(
                repository = %repo.name,
                tag = %tag.name,
                digest = %tag.digest.short(),
                created = %tag.created.format("%Y-%m-%d %H:%M:%S"),
                "keeping tag"
            );
        }
        tracing::info!(
            repository = %repo.name,
            tags = tags_listed,
            digests_kept = decision.keep_set().len(),
            to_delete = decision.delete_list().len(),
            "retention planned"
        );

        let mut deletions = Vec::with_capacity(decision.delete_list().len());
        for (idx, tag) in decision.delete_list().iter().enumerate() {
            let status = if !self.options.mode.deletes() {
                tracing::info!("[dry-run] would delete tag {}:{}", repo.name, tag.name);
                DeletionStatus::Skipped
            } else {
                if idx > 0 && !self.options.delete_interval.is_zero() {
                    tokio::time::sleep(self.options.delete_interval).await;
                }

                tracing::info!("deleting tag {}:{}", repo.name, tag.name);
                match registry.delete_tag(&repo.name, &tag.name).await {
                    Ok(()) => DeletionStatus::Deleted,
                    Err(e) => {
                        self.diag.warn(Warning::delete_failed(format!(
                            "failed to delete tag {}:{}: {}",
                            repo.name, tag.name, e
                        )));
                        DeletionStatus::Failed {
                            error: e.to_string(),
                        }
                    }
                }
            };

            deletions.push(TagDeletion {
                tag: tag.name.clone(),
                digest: tag.digest.clone(),
                status,
            });
        }

        Ok(RepositoryReport {
            name: repo.name.clone(),
            tags_listed: Some(tags_listed),
            digests_kept: decision.keep_set().len(),
            deletions,
        })
    }
}
