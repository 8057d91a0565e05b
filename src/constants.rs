//! Shared constants
//! Provides:
//! - valid app log levels (LOG_LEVELS, single source of truth)
//! - lowercase severity names in code order (SEVERITY_NAMES)
//! - the default header and label set reproduced by `Config::default`

/// Valid application log levels for `logger.level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Severity names in code order (Info=0, Debug=1, Error=2, Warn=3)
pub const SEVERITY_NAMES: &[&str] = &["info", "debug", "error", "warn"];

/// Default header prefix (empty: lines start with the severity label)
pub const DEFAULT_HEADER: &str = "";

/// Default label for `Severity::Info`
pub const DEFAULT_INFO_LABEL: &str = "Info! ";

/// Default label for `Severity::Debug`
pub const DEFAULT_DEBUG_LABEL: &str = "Debug! ";

/// Default label for `Severity::Error`
pub const DEFAULT_ERROR_LABEL: &str = "Error: ";

/// Default label for `Severity::Warn`
pub const DEFAULT_WARN_LABEL: &str = "Warning: ";
