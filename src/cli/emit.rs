use crate::config::Config;
use crate::error::Result;
use crate::severity::Severity;
use log::{debug, warn};
use std::io;

/// Emit a single message under a raw severity code. An out-of-range code is
/// non-fatal: the dispatcher prints its diagnostic to stderr and the command
/// still exits successfully. Stream write failures do propagate.
pub fn handle_emit(cfg: &Config, code: i64, message: &str) -> Result<()> {
    let logger = cfg.build_logger();

    match Severity::from_code(code) {
        Some(severity) => debug!("Emitting one {severity} message"),
        None => warn!("Severity code {code} is out of range, emitting diagnostic only"),
    }

    logger.dispatch_code_to(
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        message,
        code,
    )?;
    Ok(())
}
