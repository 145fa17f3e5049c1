// ABOUTME: On-disk configuration shape shared by the INI and YAML loaders.
// ABOUTME: Resolves credentials, compiles rule patterns and validates into Config.

use super::deserialize::deserialize_api_version;
use super::env_value::EnvValue;
use super::logging::LoggingConfig;
use super::registry::{RegistryConfig, default_request_timeout};
use super::{Config, default_delete_interval};
use crate::error::{Error, Result};
use crate::registry::ApiVersion;
use crate::retention::{RepoPattern, Rule};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub(crate) struct ConfigFile {
    pub harbor: RegistrySection,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default = "default_delete_interval", with = "humantime_serde")]
    pub delete_interval: Duration,

    /// Reject invalid regexes instead of matching them literally.
    #[serde(default)]
    pub strict_patterns: bool,

    #[serde(default)]
    pub rules: Vec<RuleSection>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegistrySection {
    pub url: String,

    #[serde(default, deserialize_with = "deserialize_api_version")]
    pub version: ApiVersion,

    pub user: EnvValue,

    pub password: EnvValue,

    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RuleSection {
    pub project: String,
    pub repo_regexp: String,
    pub repo_save_num: usize,
    #[serde(default)]
    pub repo_literal: bool,
}

impl ConfigFile {
    pub fn into_config(self) -> Result<Config> {
        let url = self.harbor.url.trim().to_string();
        if url.is_empty() {
            return Err(Error::InvalidConfig("harbor url cannot be empty".to_string()));
        }

        let registry = RegistryConfig {
            url,
            version: self.harbor.version,
            user: self.harbor.user.resolve()?,
            password: self.harbor.password.resolve()?,
            request_timeout: self.harbor.request_timeout,
        };

        self.logging.validate()?;

        let strict = self.strict_patterns;
        let rules = self
            .rules
            .into_iter()
            .map(|section| section.into_rule(strict))
            .collect::<Result<Vec<_>>>()?;

        Ok(Config {
            registry,
            logging: self.logging,
            delete_interval: self.delete_interval,
            rules,
        })
    }
}

impl RuleSection {
    fn into_rule(self, strict: bool) -> Result<Rule> {
        if self.project.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "rule project name cannot be empty".to_string(),
            ));
        }

        let pattern = if self.repo_literal {
            RepoPattern::literal(self.repo_regexp)
        } else if strict {
            RepoPattern::strict(&self.repo_regexp).map_err(|e| Error::InvalidPattern {
                project: self.project.clone(),
                pattern: self.repo_regexp.clone(),
                source: e,
            })?
        } else {
            RepoPattern::compile(&self.repo_regexp)
        };

        Ok(Rule::new(self.project, pattern, self.repo_save_num))
    }
}
