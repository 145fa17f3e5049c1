// ABOUTME: Diagnostics accumulator for non-fatal problems during a retention run.
// ABOUTME: Collects warnings that shouldn't abort the run but belong in its summary.

use serde::Serialize;

/// Collects non-fatal warnings during a run.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// A non-fatal warning collected during a run.
#[derive(Debug, Clone, Serialize)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// A rule names a project the registry doesn't have.
    pub fn project_not_found(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::ProjectNotFound,
            message: message.into(),
        }
    }

    /// A single tag deletion was rejected by the registry.
    pub fn delete_failed(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::DeleteFailed,
            message: message.into(),
        }
    }

    /// A rule's pattern is matched literally because it isn't a valid regex.
    pub fn pattern_fallback(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::PatternFallback,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// Rule skipped: project missing from the registry.
    ProjectNotFound,
    /// Tag left in place after a failed delete call.
    DeleteFailed,
    /// Invalid regex treated as an exact repository name.
    PatternFallback,
}
