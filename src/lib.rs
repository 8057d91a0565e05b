// Library entry point
pub mod config;
pub mod constants;
pub mod error;
pub mod labels;
pub mod logger;
pub mod logging;
pub mod severity;
