//! Runtime configuration loaded from an optional TOML file and the environment.
//!
//! Only ambient concerns live here. Scaler and model constants are compiled in
//! (see `model::params`) and cannot be overridden at runtime.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{AttritionError, AttritionResult};

pub const CONFIG_PATH_ENV: &str = "ATTRITION_CONFIG";
pub const LOG_FILTER_ENV: &str = "ATTRITION_LOG";
pub const LOG_FORMAT_ENV: &str = "ATTRITION_LOG_FORMAT";

/// Output format of the tracing subscriber.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn parse(raw: &str) -> AttritionResult<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AttritionError::config(format!(
                "unknown log format `{other}`"
            ))),
        }
    }
}

/// Snapshot of configuration values consumed by the core.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppCfg {
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for AppCfg {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileCfg {
    #[serde(default)]
    log: LogSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogSection {
    filter: Option<String>,
    format: Option<String>,
}

impl AppCfg {
    /// Defaults, then the file named by `ATTRITION_CONFIG`, then env overrides.
    pub fn load() -> AttritionResult<Self> {
        let mut cfg = match env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load_from_file(path.trim())?,
            _ => Self::default(),
        };
        cfg.apply_overrides(
            env::var(LOG_FILTER_ENV).ok(),
            env::var(LOG_FORMAT_ENV).ok(),
        )?;
        Ok(cfg)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> AttritionResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(raw: &str) -> AttritionResult<Self> {
        let file: FileCfg =
            toml::from_str(raw).map_err(|err| AttritionError::config(err.to_string()))?;
        let mut cfg = Self::default();
        cfg.apply_overrides(file.log.filter, file.log.format)?;
        Ok(cfg)
    }

    fn apply_overrides(
        &mut self,
        filter: Option<String>,
        format: Option<String>,
    ) -> AttritionResult<()> {
        if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
            self.log_filter = filter.trim().to_string();
        }
        if let Some(format) = format {
            self.log_format = LogFormat::parse(&format)?;
        }
        Ok(())
    }
}
