// ABOUTME: Configuration types and loading for harbor-job.
// ABOUTME: Reads INI (default) or YAML files into one immutable Config value.

mod deserialize;
mod env_value;
mod file;
mod ini_file;
mod logging;
mod registry;

pub use env_value::EnvValue;
pub use ini_file::MAIN_SECTION;
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;

use crate::error::{Error, Result};
use crate::job::{JobOptions, RunMode};
use crate::retention::Rule;
use file::ConfigFile;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "harbor-job.ini";

/// Everything a run needs, loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
    /// Pause between consecutive tag deletions.
    pub delete_interval: Duration,
    /// Rules in file order.
    pub rules: Vec<Rule>,
}

pub(crate) fn default_delete_interval() -> Duration {
    Duration::from_millis(200)
}

impl Config {
    pub fn from_ini(content: &str) -> Result<Self> {
        ini_file::parse(content)?.into_config()
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str::<ConfigFile>(yaml)?.into_config()
    }

    /// Load a config file; `.yml` and `.yaml` are YAML, anything else is INI.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml" | "yaml") => Self::from_yaml(&content),
            _ => Self::from_ini(&content),
        }
    }

    /// Options for a run in the given mode.
    pub fn job_options(&self, mode: RunMode) -> JobOptions {
        JobOptions {
            mode,
            delete_interval: self.delete_interval,
        }
    }
}
