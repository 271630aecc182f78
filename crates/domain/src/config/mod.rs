//! Configuration module for cachedump
//!
//! - `root`: Main configuration and CLI overrides
//! - `logging`: Logging settings
//! - `output`: Rendering defaults
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod output;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use output::{LocalStyle, OutputConfig};
pub use root::{CliOverrides, Config};
