use crate::error::Result;
use crate::file_error;
use log::{debug, error, info, warn};
use std::fs;
use std::path::Path;

/// Generate a default configuration file
pub fn handle_init(output_path: &str, force: bool) -> Result<()> {
    let path = Path::new(output_path);

    info!("Generating configuration file: {output_path}");

    if path.exists() && !force {
        error!("Configuration file already exists: {output_path}");
        info!("Tip: use --force to overwrite");
        return Err(file_error!(AlreadyExists {
            path: path.to_path_buf(),
        }));
    }

    if path.exists() && force {
        warn!("Overwriting existing configuration file");
    }

    debug!("Writing default configuration content...");
    let default_config = r#"# sevlog configuration file

[logger]
# Prefix prepended to every emitted line
header = ""
# Diagnostics level: trace, debug, info, warn, error
level = "info"

# One label per severity; each is prepended between the header and the message
[labels]
info = "Info! "
debug = "Debug! "
error = "Error: "
warn = "Warning: "
"#;

    if let Some(parent) = path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            info!("Creating directory: {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                file_error!(CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    reason: e.to_string(),
                })
            })?;
        }
    }

    fs::write(path, default_config).map_err(|e| {
        file_error!(WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })?;

    info!("Configuration file written: {output_path}");
    info!("Next steps:");
    info!("  1. Edit the configuration: {output_path}");
    info!("  2. Validate it: sevlog validate -c {output_path}");
    info!("  3. Run the demo: sevlog run -c {output_path}");

    Ok(())
}
