use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration related error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File operation error
    #[error("File error: {0}")]
    File(#[from] FileError),

    /// Logging setup error
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Configuration file parse failed
    #[error("Failed to parse configuration file {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },

    /// Invalid log level
    #[error("Invalid log level '{level}', valid values: {}", valid_levels.join(", "))]
    InvalidLogLevel {
        level: String,
        valid_levels: Vec<String>,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value {field} = '{value}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// File operation errors
#[derive(Debug, Error)]
pub enum FileError {
    /// File already exists
    #[error("File already exists: {path} (use --force to replace)")]
    AlreadyExists { path: PathBuf },

    /// File write failed
    #[error("Failed to write file {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// Create directory failed
    #[error("Failed to create directory {path}: {reason}")]
    CreateDirectoryFailed { path: PathBuf, reason: String },
}

/// Dispatch diagnostics
///
/// The Display text of `SeverityOutOfRange` is the exact diagnostic line the
/// dispatcher writes to the error stream, so the wording has a single source.
/// Out-of-range codes are non-fatal, so this never surfaces through [`Error`];
/// only stream I/O failures do (as [`Error::Io`]).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Severity code outside the defined range
    #[error("Severity out of range ({code}) for message {message}")]
    SeverityOutOfRange { code: i64, message: String },
}

/// Logging setup errors
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global logger was already installed
    #[error("Failed to install logger: {reason}")]
    InstallFailed { reason: String },
}

/// Application Result alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper macros for constructing the common error variants
#[macro_export]
macro_rules! config_error {
    ($variant:ident { $($field:ident: $value:expr),+ $(,)? }) => {
        $crate::error::Error::Config($crate::error::ConfigError::$variant {
            $($field: $value),+
        })
    };
}

#[macro_export]
macro_rules! file_error {
    ($variant:ident { $($field:ident: $value:expr),+ $(,)? }) => {
        $crate::error::Error::File($crate::error::FileError::$variant {
            $($field: $value),+
        })
    };
}
