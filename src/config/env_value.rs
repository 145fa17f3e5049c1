// ABOUTME: Credential value types with environment variable interpolation.
// ABOUTME: Handles literal values and references like ${VAR} or ${VAR:-default}.

use crate::error::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl EnvValue {
    /// Parse an INI value: `${VAR}` and `${VAR:-default}` read the environment,
    /// anything else is literal.
    pub fn from_ini(raw: &str) -> Self {
        let Some(inner) = raw
            .trim()
            .strip_prefix("${")
            .and_then(|rest| rest.strip_suffix('}'))
        else {
            return EnvValue::Literal(raw.to_string());
        };

        match inner.split_once(":-") {
            Some((var, default)) => EnvValue::FromEnv {
                var: var.trim().to_string(),
                default: Some(default.to_string()),
            },
            None => EnvValue::FromEnv {
                var: inner.trim().to_string(),
                default: None,
            },
        }
    }

    pub fn resolve(&self) -> Result<String> {
        match self {
            EnvValue::Literal(s) => Ok(s.clone()),
            EnvValue::FromEnv { var, default } => match std::env::var(var) {
                Ok(val) => Ok(val),
                Err(_) => default
                    .clone()
                    .ok_or_else(|| Error::MissingEnvVar(var.clone())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ini_value_is_literal() {
        assert_eq!(
            EnvValue::from_ini("Harbor12345"),
            EnvValue::Literal("Harbor12345".to_string())
        );
    }

    #[test]
    fn braced_ini_value_reads_env() {
        assert_eq!(
            EnvValue::from_ini("${HARBOR_PWD}"),
            EnvValue::FromEnv {
                var: "HARBOR_PWD".to_string(),
                default: None,
            }
        );
    }

    #[test]
    fn braced_ini_value_with_default() {
        assert_eq!(
            EnvValue::from_ini("${HARBOR_USER:-admin}"),
            EnvValue::FromEnv {
                var: "HARBOR_USER".to_string(),
                default: Some("admin".to_string()),
            }
        );
    }

    #[test]
    fn half_braced_value_stays_literal() {
        assert_eq!(
            EnvValue::from_ini("${oops"),
            EnvValue::Literal("${oops".to_string())
        );
    }

    #[test]
    fn resolve_uses_default_when_unset() {
        temp_env::with_var_unset("HARBOR_JOB_TEST_UNSET", || {
            let value = EnvValue::from_ini("${HARBOR_JOB_TEST_UNSET:-fallback}");
            assert_eq!(value.resolve().unwrap(), "fallback");
        });
    }

    #[test]
    fn resolve_fails_without_default() {
        temp_env::with_var_unset("HARBOR_JOB_TEST_UNSET", || {
            let err = EnvValue::from_ini("${HARBOR_JOB_TEST_UNSET}")
                .resolve()
                .unwrap_err();
            assert!(matches!(err, Error::MissingEnvVar(ref v) if v == "HARBOR_JOB_TEST_UNSET"));
        });
    }

    #[test]
    fn resolve_reads_set_variable() {
        temp_env::with_var("HARBOR_JOB_TEST_SET", Some("s3cret"), || {
            let value = EnvValue::from_ini("${HARBOR_JOB_TEST_SET}");
            assert_eq!(value.resolve().unwrap(), "s3cret");
        });
    }
}
