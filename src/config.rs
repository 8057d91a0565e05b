use crate::constants::{
    DEFAULT_DEBUG_LABEL, DEFAULT_ERROR_LABEL, DEFAULT_HEADER, DEFAULT_INFO_LABEL,
    DEFAULT_WARN_LABEL, LOG_LEVELS,
};
use crate::error::{ConfigError, Error, Result};
use crate::labels::LabelTable;
use crate::logger::Logger;
use crate::severity::Severity;
use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Header and diagnostics settings
    #[serde(default)]
    pub logger: LoggerConfig,
    /// Per-severity label prefixes
    #[serde(default)]
    pub labels: LabelsConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::Config(ConfigError::NotFound(path.to_path_buf())))?;
        Self::from_str(&content, path.to_path_buf())
    }

    /// Parse configuration from a string
    pub fn from_str(content: &str, path: PathBuf) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| {
            Error::Config(ConfigError::ParseFailed {
                path,
                reason: e.to_string(),
            })
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.logger.validate()?;
        self.labels.validate()?;
        Ok(())
    }

    /// Build the dispatch logger from this configuration
    pub fn build_logger(&self) -> Logger {
        Logger::new(self.logger.header.clone(), self.labels.to_table())
    }
}

/// `[logger]` section: header prefix plus diagnostics level
#[derive(Debug, Deserialize, Clone)]
pub struct LoggerConfig {
    /// Prefix prepended to every dispatched line
    #[serde(default)]
    pub header: String,
    /// Diagnostics level: trace, debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            level: default_level(),
        }
    }
}

impl LoggerConfig {
    /// Get the header prefix
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Get the diagnostics level
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Validate the level and header
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS
            .iter()
            .any(|&l| l.eq_ignore_ascii_case(self.level.as_str()))
        {
            return Err(Error::Config(ConfigError::InvalidLogLevel {
                level: self.level.clone(),
                valid_levels: LOG_LEVELS.iter().map(|s| s.to_string()).collect(),
            }));
        }

        // The output format is line-oriented
        if self.header.contains('\n') {
            return Err(crate::config_error!(InvalidValue {
                field: "logger.header".to_string(),
                value: self.header.clone(),
                reason: "Header must be a single line".to_string(),
            }));
        }

        Ok(())
    }
}

/// `[labels]` section: one prefix per severity
#[derive(Debug, Deserialize, Clone)]
pub struct LabelsConfig {
    #[serde(default = "LabelsConfig::default_info")]
    pub info: String,
    #[serde(default = "LabelsConfig::default_debug")]
    pub debug: String,
    #[serde(default = "LabelsConfig::default_error")]
    pub error: String,
    #[serde(default = "LabelsConfig::default_warn")]
    pub warn: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            info: Self::default_info(),
            debug: Self::default_debug(),
            error: Self::default_error(),
            warn: Self::default_warn(),
        }
    }
}

impl LabelsConfig {
    fn default_info() -> String {
        DEFAULT_INFO_LABEL.to_string()
    }

    fn default_debug() -> String {
        DEFAULT_DEBUG_LABEL.to_string()
    }

    fn default_error() -> String {
        DEFAULT_ERROR_LABEL.to_string()
    }

    fn default_warn() -> String {
        DEFAULT_WARN_LABEL.to_string()
    }

    /// Get the label configured for a severity
    pub fn label(&self, severity: Severity) -> &str {
        match severity {
            Severity::Info => &self.info,
            Severity::Debug => &self.debug,
            Severity::Error => &self.error,
            Severity::Warn => &self.warn,
        }
    }

    /// Build the runtime label table
    pub fn to_table(&self) -> LabelTable {
        LabelTable::new(
            self.info.clone(),
            self.debug.clone(),
            self.error.clone(),
            self.warn.clone(),
        )
    }

    /// Validate that every label is a single line
    pub fn validate(&self) -> Result<()> {
        for severity in Severity::ALL {
            let label = self.label(severity);
            if label.contains('\n') {
                return Err(crate::config_error!(InvalidValue {
                    field: format!("labels.{severity}"),
                    value: label.to_string(),
                    reason: "Label must be a single line".to_string(),
                }));
            }
        }
        Ok(())
    }
}
