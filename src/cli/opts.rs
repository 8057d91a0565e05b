use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

/// Severity-prefixed console logger
#[derive(Debug, Parser)]
#[command(
    name = "sevlog",
    version,
    about = "Emit severity-prefixed log lines from a header and label table",
    long_about = "A small console logging tool: every line is header + severity label + message. \
Running without a subcommand emits one demo line per severity."
)]
pub struct Cli {
    /// Enable verbose diagnostics (debug level)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Suppress non-error diagnostics (error level only)
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Emit one demo line per severity
    Run {
        /// Configuration file path
        #[arg(short = 'c', long = "config", default_value = "sevlog.toml")]
        config: String,
    },
    /// Emit a single message under a raw severity code
    Emit {
        /// Configuration file path
        #[arg(short = 'c', long = "config", default_value = "sevlog.toml")]
        config: String,
        /// Severity code (0 = info, 1 = debug, 2 = error, 3 = warn)
        #[arg(short = 's', long = "code", allow_negative_numbers = true)]
        code: i64,
        /// Message to emit
        #[arg(short = 'm', long = "message")]
        message: String,
    },
    /// Generate a default configuration file
    Init {
        /// Output configuration file path
        #[arg(short = 'o', long = "output", default_value = "sevlog.toml")]
        output: String,
        /// Force overwrite if file exists
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Validate a configuration file
    Validate {
        /// Configuration file path
        #[arg(short = 'c', long = "config", default_value = "sevlog.toml")]
        config: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completions
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
    }
}
