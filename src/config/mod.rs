//! Load and validate the optional rule configuration file.
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{error, info};

use crate::check::StoryFileRule;
use crate::lib::errors::ConfigError;

pub mod telemetry;

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub rule: StoryFileRule,
    pub source_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawCheckConfig {
    rule: Option<RawRuleSection>,
}

#[derive(Debug, Deserialize, Default)]
struct RawRuleSection {
    component_suffix: Option<String>,
    story_suffix: Option<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            rule: StoryFileRule::default(),
            source_path: None,
        }
    }
}

impl CheckConfig {
    /// Use the file given on the command line, or the built-in rule when absent.
    pub fn load(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                telemetry::log_builtin();
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "story_check::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = config::Config::builder().add_source(config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "story_check::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawCheckConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "story_check::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let config = Self::from_raw(raw, path.clone()).map_err(|err| {
            error!(
                target: "story_check::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        telemetry::log_loaded(&config);
        Ok(config)
    }

    fn from_raw(raw: RawCheckConfig, path: PathBuf) -> Result<Self, ConfigError> {
        let rule = parse_rule_section(raw.rule, &path)?;
        Ok(Self {
            rule,
            source_path: Some(path),
        })
    }
}

fn parse_rule_section(
    raw: Option<RawRuleSection>,
    path: &Path,
) -> Result<StoryFileRule, ConfigError> {
    let raw = raw.unwrap_or_default();
    let defaults = StoryFileRule::default();
    let rule = StoryFileRule {
        component_suffix: raw.component_suffix.unwrap_or(defaults.component_suffix),
        story_suffix: raw.story_suffix.unwrap_or(defaults.story_suffix),
    };

    if rule.component_suffix.is_empty() {
        return Err(ConfigError::invalid(
            path.to_path_buf(),
            "rule.component_suffix",
            "must not be empty",
        ));
    }
    if rule.story_suffix.is_empty() {
        return Err(ConfigError::invalid(
            path.to_path_buf(),
            "rule.story_suffix",
            "must not be empty",
        ));
    }
    if rule.story_suffix == rule.component_suffix {
        return Err(ConfigError::invalid(
            path.to_path_buf(),
            "rule.story_suffix",
            "must differ from rule.component_suffix",
        ));
    }
    if !rule.story_suffix.ends_with(&rule.component_suffix) {
        return Err(ConfigError::invalid(
            path.to_path_buf(),
            "rule.story_suffix",
            format!("must end with `{}`", rule.component_suffix),
        ));
    }

    Ok(rule)
}
