// ABOUTME: Logging settings: level, optional log file, caller reporting.
// ABOUTME: Logs go to stderr unless a log directory is configured.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Existing directory to write the log file into.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// A tracing filter directive, e.g. `info` or `harbor_job=debug`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Include source file and line in each event.
    #[serde(default)]
    pub report_caller: bool,
}

pub(crate) fn default_file_name() -> String {
    "harbor-job.log".to_string()
}

pub(crate) fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: None,
            file_name: default_file_name(),
            level: default_level(),
            report_caller: false,
        }
    }
}

impl LoggingConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(dir) = &self.dir
            && !dir.is_dir()
        {
            return Err(Error::InvalidConfig(format!(
                "log dir {} is not a directory or does not exist",
                dir.display()
            )));
        }
        if self.file_name.trim().is_empty() {
            return Err(Error::InvalidConfig("log file name cannot be empty".to_string()));
        }
        Ok(())
    }
}
