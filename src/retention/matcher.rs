// ABOUTME: Repository matching and project resolution for retention rules.
// ABOUTME: Pure functions over registry listings; no I/O.

use super::rule::RepoPattern;
use crate::registry::{Project, Repository};

/// Whether `repository` is selected by `pattern`.
///
/// A pattern that compiles as a regular expression matches anywhere in the
/// name. One that doesn't compile only matches a repository with exactly that
/// name.
pub fn matches(pattern: &str, repository: &str) -> bool {
    RepoPattern::compile(pattern).is_match(repository)
}

/// Find the project a rule targets. Names are assumed unique; the first wins.
pub fn resolve_project<'a>(name: &str, projects: &'a [Project]) -> Option<&'a Project> {
    projects.iter().find(|p| p.name == name)
}

/// Repositories of a listing selected by `pattern`, in listing order.
pub fn select_repositories<'a>(
    pattern: &'a RepoPattern,
    repositories: &'a [Repository],
) -> impl Iterator<Item = &'a Repository> + 'a {
    repositories.iter().filter(move |repo| {
        let selected = pattern.is_match(&repo.name);
        if !selected {
            tracing::debug!(repository = %repo.name, %pattern, "repository not matched by rule");
        }
        selected
    })
}
