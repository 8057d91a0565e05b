use crate::config::LoggerConfig;
use crate::constants::LOG_LEVELS;
use crate::error::{Error, LoggingError, Result};
use crate::logger::Logger;
use crate::severity::Severity;
use log::SetLoggerError;
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::Lazy;
use std::collections::HashMap;

// Cached level map so repeated lookups skip re-parsing
static LOG_LEVEL_MAP: Lazy<HashMap<&'static str, LevelFilter>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("trace", LevelFilter::Trace);
    map.insert("debug", LevelFilter::Debug);
    map.insert("info", LevelFilter::Info);
    map.insert("warn", LevelFilter::Warn);
    map.insert("error", LevelFilter::Error);
    map
});

/// Parse an application log level string
pub fn parse_log_level(level_str: &str) -> Result<LevelFilter> {
    let lower = level_str.to_lowercase();
    LOG_LEVEL_MAP.get(lower.as_str()).copied().ok_or_else(|| {
        Error::Config(crate::error::ConfigError::InvalidLogLevel {
            level: level_str.to_string(),
            valid_levels: LOG_LEVELS.iter().map(|s| s.to_string()).collect(),
        })
    })
}

/// Initialize console diagnostics on stderr via `env_logger`, so stdout stays
/// reserved for dispatched log lines.
pub fn init_console(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Initialize console diagnostics from a validated `[logger]` section. Flags
/// should already have been folded into `config.level` by the caller.
pub fn init_diagnostics(config: &LoggerConfig) -> Result<()> {
    let level = parse_log_level(config.level())?;
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
    Ok(())
}

/// Map a `log` facade level onto a message severity. Trace folds into debug:
/// the severity set is closed at four.
pub fn level_to_severity(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warn,
        Level::Info => Severity::Info,
        Level::Debug | Level::Trace => Severity::Debug,
    }
}

/// Adapter exposing a [`Logger`] as the global `log` backend
struct FacadeLogger {
    logger: Logger,
    level: LevelFilter,
}

impl log::Log for FacadeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        match self.level {
            LevelFilter::Off => false,
            LevelFilter::Error => metadata.level() == Level::Error,
            LevelFilter::Warn => metadata.level() <= Level::Warn,
            LevelFilter::Info => metadata.level() <= Level::Info,
            LevelFilter::Debug => metadata.level() <= Level::Debug,
            LevelFilter::Trace => true,
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let severity = level_to_severity(record.level());
        self.logger
            .dispatch(&record.args().to_string(), severity);
    }

    fn flush(&self) {}
}

/// Install a [`Logger`] as the process-wide `log` backend. After this call,
/// `log::info!` and friends emit `header + label + message` lines on stdout.
///
/// The facade can only be installed once per process; a second call (or a
/// prior `init_console`) makes this return `LoggingError::InstallFailed`.
pub fn install(logger: Logger, level: LevelFilter) -> Result<()> {
    log::set_max_level(level);
    log::set_boxed_logger(Box::new(FacadeLogger { logger, level })).map_err(
        |e: SetLoggerError| {
            Error::Logging(LoggingError::InstallFailed {
                reason: e.to_string(),
            })
        },
    )?;
    Ok(())
}
