// CLI command handlers
pub mod emit;
pub mod init;
pub mod opts;
pub mod run;
pub mod validate;
