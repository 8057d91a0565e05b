use crate::config::Config;
use crate::error::Result;
use log::debug;

/// Emit the demo sequence: one line per severity (info, debug, warn, error)
/// on stdout.
pub fn handle_run(cfg: &Config) -> Result<()> {
    let logger = cfg.build_logger();
    debug!(
        "Dispatching demo sequence with header {:?}",
        logger.header()
    );

    logger.info("The executable started!");
    logger.debug("The executable did not get stuck");
    logger.warn("The executable is about to stop");
    logger.error("The executable has stopped");

    Ok(())
}
