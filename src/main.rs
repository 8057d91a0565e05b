mod cli;
mod config;
mod constants;
mod error;
mod labels;
mod logger;
mod logging;
mod severity;

use config::Config;
use error::Result;
use log::info;

fn main() -> Result<()> {
    use clap::Parser;
    let cli = cli::opts::Cli::parse();

    match &cli.command {
        Some(cli::opts::Commands::Init { output, force }) => {
            logging::init_console(cli.verbose, cli.quiet);
            cli::init::handle_init(output, *force)
        }
        Some(cli::opts::Commands::Completions { shell }) => {
            cli::opts::Cli::generate_completions(*shell);
            Ok(())
        }
        Some(cli::opts::Commands::Run { config }) => {
            let cfg = setup(config, cli.verbose, cli.quiet)?;
            cli::run::handle_run(&cfg)
        }
        Some(cli::opts::Commands::Emit {
            config,
            code,
            message,
        }) => {
            let cfg = setup(config, cli.verbose, cli.quiet)?;
            cli::emit::handle_emit(&cfg, *code, message)
        }
        Some(cli::opts::Commands::Validate { config }) => {
            let cfg = setup(config, cli.verbose, cli.quiet)?;
            eprintln!("Configuration validation passed");
            cli::validate::handle_validate(&cfg)
        }
        None => {
            // Bare invocation is the demo driver: same path as `run` with
            // the default config location
            let cfg = setup("sevlog.toml", cli.verbose, cli.quiet)?;
            cli::run::handle_run(&cfg)
        }
    }
}

/// Load and validate the configuration, fold the global flags into the
/// diagnostics level, and initialize stderr diagnostics.
fn setup(config_path: &str, verbose: bool, quiet: bool) -> Result<Config> {
    let mut cfg = load_config(config_path)?;
    cfg.validate()?;

    if verbose {
        cfg.logger.level = "debug".to_string();
    } else if quiet {
        cfg.logger.level = "error".to_string();
    }

    logging::init_diagnostics(&cfg.logger)?;
    info!("Application started");

    Ok(cfg)
}

fn load_config(config_path: &str) -> Result<Config> {
    match Config::from_file(config_path) {
        Ok(c) => {
            eprintln!("Loaded configuration file: {config_path}");
            Ok(c)
        }
        Err(e) => {
            if let error::Error::Config(error::ConfigError::NotFound(_)) = &e {
                eprintln!(
                    "Configuration file not found: {config_path}, using default configuration"
                );
                eprintln!("Tip: run 'sevlog init' to generate a configuration file");
                Ok(Config::default())
            } else {
                Err(e)
            }
        }
    }
}
