//! Library side of the `rbundle` command line tool.
//!
//! Holds the pieces the binary wires together so they can be tested
//! directly: target resolution, input loading, logging setup and exit codes.

pub mod config;
pub mod exit_codes;
pub mod input;
pub mod logging;

pub use config::{TargetConfig, TargetResolution, TargetResolver};
pub use exit_codes::ExitCode;
pub use logging::{init_logging, LogConfig, LogFormat, LogLevel};
