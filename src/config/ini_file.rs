// ABOUTME: INI configuration loader: a [main] section plus one section per rule.
// ABOUTME: Rule sections are named after their project and kept in file order.

use super::env_value::EnvValue;
use super::file::{ConfigFile, RegistrySection, RuleSection};
use super::logging::{LoggingConfig, default_file_name, default_level};
use super::default_delete_interval;
use super::registry::default_request_timeout;
use crate::error::{Error, Result};
use crate::registry::ApiVersion;
use ::ini::{Ini, ParseOption, Properties};
use std::path::PathBuf;
use std::time::Duration;

pub const MAIN_SECTION: &str = "main";

pub(crate) fn parse(content: &str) -> Result<ConfigFile> {
    // Escapes stay off so regexes like `\d+` survive untouched.
    let options = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(content, options)?;

    let main = ini
        .section(Some(MAIN_SECTION))
        .ok_or(Error::MissingSection(MAIN_SECTION))?;

    let harbor = RegistrySection {
        url: required(main, MAIN_SECTION, "harbor_url")?.to_string(),
        version: match non_empty(main, "harbor_version") {
            Some(raw) => raw
                .parse::<ApiVersion>()
                .map_err(|e| invalid(MAIN_SECTION, "harbor_version", e.to_string()))?,
            None => Default::default(),
        },
        user: EnvValue::from_ini(required(main, MAIN_SECTION, "harbor_user")?),
        password: EnvValue::from_ini(required(main, MAIN_SECTION, "harbor_pwd")?),
        request_timeout: duration(main, MAIN_SECTION, "request_timeout")?
            .unwrap_or_else(default_request_timeout),
    };

    let logging = LoggingConfig {
        dir: non_empty(main, "log_dir").map(PathBuf::from),
        file_name: non_empty(main, "log_name")
            .map(str::to_string)
            .unwrap_or_else(default_file_name),
        level: non_empty(main, "log_level")
            .map(str::to_string)
            .unwrap_or_else(default_level),
        report_caller: boolean(main, MAIN_SECTION, "log_report")?.unwrap_or(false),
    };

    let mut rules = Vec::new();
    for (name, props) in ini.iter() {
        let Some(name) = name else { continue };
        if name == MAIN_SECTION {
            continue;
        }
        rules.push(rule_section(name, props)?);
    }

    Ok(ConfigFile {
        harbor,
        logging,
        delete_interval: duration(main, MAIN_SECTION, "delete_interval")?
            .unwrap_or_else(default_delete_interval),
        strict_patterns: boolean(main, MAIN_SECTION, "strict_patterns")?.unwrap_or(false),
        rules,
    })
}

fn rule_section(project: &str, props: &Properties) -> Result<RuleSection> {
    let keep = required(props, project, "repo_save_num")?;
    let repo_save_num = keep.parse::<usize>().map_err(|_| {
        invalid(
            project,
            "repo_save_num",
            format!("expected a non-negative integer, got '{keep}'"),
        )
    })?;

    Ok(RuleSection {
        project: project.to_string(),
        repo_regexp: required(props, project, "repo_regexp")?.to_string(),
        repo_save_num,
        repo_literal: boolean(props, project, "repo_literal")?.unwrap_or(false),
    })
}

fn non_empty<'a>(props: &'a Properties, key: &str) -> Option<&'a str> {
    props
        .get(key)
        .map(strip_inline_comment)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Cut a trailing `; comment` or `# comment`. The marker only starts a
/// comment at the beginning of the value or after whitespace, so `a#b` stays.
fn strip_inline_comment(value: &str) -> &str {
    let mut prev_is_space = true;
    for (idx, ch) in value.char_indices() {
        if (ch == ';' || ch == '#') && prev_is_space {
            return &value[..idx];
        }
        prev_is_space = ch.is_whitespace();
    }
    value
}

fn required<'a>(props: &'a Properties, section: &str, key: &'static str) -> Result<&'a str> {
    non_empty(props, key).ok_or_else(|| Error::MissingKey {
        section: section.to_string(),
        key,
    })
}

fn boolean(props: &Properties, section: &str, key: &'static str) -> Result<Option<bool>> {
    let Some(raw) = non_empty(props, key) else {
        return Ok(None);
    };
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" | "on" => Ok(Some(true)),
        "0" | "f" | "false" | "n" | "no" | "off" => Ok(Some(false)),
        _ => Err(invalid(section, key, format!("expected a boolean, got '{raw}'"))),
    }
}

fn duration(props: &Properties, section: &str, key: &'static str) -> Result<Option<Duration>> {
    non_empty(props, key)
        .map(|raw| {
            humantime::parse_duration(raw).map_err(|e| invalid(section, key, e.to_string()))
        })
        .transpose()
}

fn invalid(section: &str, key: &'static str, reason: String) -> Error {
    Error::InvalidValue {
        section: section.to_string(),
        key,
        reason,
    }
}
