// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (cron), and JSON output modes.

use crate::job::{DeletionStatus, RuleOutcome, RunMode, RunSummary};
use serde::Serialize;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly per-rule report
    Normal,
    /// Only the final result line, for cron mail
    Quiet,
    /// One JSON document for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Start timing the run.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print the run summary.
    pub fn summary(&self, summary: &RunSummary) {
        match self.mode {
            OutputMode::Normal => {
                print!("{}", render_report(summary));
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{} ({:.1}s)", summary.headline(), elapsed);
                } else {
                    println!("{}", summary.headline());
                }
            }
            OutputMode::Quiet => {
                println!("{}", summary.headline());
            }
            OutputMode::Json => {
                let event = JsonSummary {
                    event: "summary",
                    summary,
                    duration_secs: self.start_time.map(|_| self.elapsed_secs()),
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    println!("{json}");
                }
            }
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("Error: {message}");
            }
            OutputMode::Json => {
                let event = JsonError {
                    event: "error",
                    message,
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }
}

/// Human-readable report, one block per rule.
pub fn render_report(summary: &RunSummary) -> String {
    let mut out = String::new();
    for rule in &summary.rules {
        out.push_str(&format!(
            "[{}] pattern '{}', keep {}\n",
            rule.project, rule.pattern, rule.keep_count
        ));
        match &rule.outcome {
            RuleOutcome::SkippedDuplicate => {
                out.push_str("  skipped: project already processed\n");
            }
            RuleOutcome::ProjectNotFound => {
                out.push_str("  skipped: project not found\n");
            }
            RuleOutcome::Completed {
                repositories_listed,
                repositories,
                ..
            } => {
                out.push_str(&format!(
                    "  {} of {} repositories matched\n",
                    repositories.len(),
                    repositories_listed
                ));
                for repo in repositories {
                    let Some(tags) = repo.tags_listed else {
                        out.push_str(&format!("  → {}\n", repo.name));
                        continue;
                    };
                    out.push_str(&format!(
                        "  → {}: {} tags, {} images kept\n",
                        repo.name, tags, repo.digests_kept
                    ));
                    for deletion in &repo.deletions {
                        let marker = match (&deletion.status, summary.mode) {
                            (DeletionStatus::Deleted, _) => "✓ deleted".to_string(),
                            (DeletionStatus::Skipped, RunMode::DryRun) => {
                                "would delete".to_string()
                            }
                            (DeletionStatus::Skipped, _) => "skipped".to_string(),
                            (DeletionStatus::Failed { error }, _) => format!("✗ failed: {error}"),
                        };
                        out.push_str(&format!("      {} {}\n", deletion.tag, marker));
                    }
                }
            }
        }
    }
    out
}

#[derive(Serialize)]
struct JsonSummary<'a> {
    event: &'a str,
    summary: &'a RunSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

#[derive(Serialize)]
struct JsonError<'a> {
    event: &'a str,
    message: &'a str,
}
