// ABOUTME: Retention decision engine: rules, repository matching, tag planning.
// ABOUTME: Everything here is pure; the job module applies the decisions.

mod matcher;
mod planner;
mod rule;

pub use matcher::{matches, resolve_project, select_repositories};
pub use planner::{RetentionDecision, plan};
pub use rule::{RepoPattern, Rule};
