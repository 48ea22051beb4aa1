//! Logger configuration
//!
//! A `LoggerConfig` is built by the composition root, in code or from a
//! YAML file, and turned into a running logger with `Logger::from_config`.

mod file;

pub use file::LoggerConfig;
