// ABOUTME: Retention job: drives rules against a registry and applies decisions.
// ABOUTME: Exports the orchestrator, its options, fatal errors and the run summary.

mod error;
mod options;
mod orchestrator;
mod summary;

pub use error::{JobError, JobErrorKind};
pub use options::{JobOptions, RunMode};
pub use orchestrator::Job;
pub use summary::{
    DeletionStatus, RepositoryReport, RuleOutcome, RuleReport, RunSummary, TagDeletion,
};
