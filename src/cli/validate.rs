use crate::config::Config;
use crate::error::Result;
use crate::severity::Severity;
use log::info;

/// Summarize a validated configuration
pub fn handle_validate(cfg: &Config) -> Result<()> {
    info!("Configuration validated in main");

    info!("Header: {:?}", cfg.logger.header());
    info!("Diagnostics level: {}", cfg.logger.level());

    for severity in Severity::ALL {
        info!(
            "Label for {} (code {}): {:?}",
            severity,
            severity.code(),
            cfg.labels.label(severity)
        );
    }

    Ok(())
}
