//! linelog Core
//!
//! Timestamped, severity-tagged logging to the console and a dated log file.
//! The console is colored by severity and restored after every line.
//!
//! ## Composed lines
//!
//! A line starts with a level-tagged call and takes any number of fields:
//!
//! ```rust,no_run
//! use linelog_core::{LogMode, Logger};
//!
//! let logger = Logger::new();
//! logger.init(LogMode::CONSOLE.union(LogMode::FILE), "[demo]")?;
//!
//! logger.info().field("listening on").field(8080);
//! // [2024/03/05 - 07:08:09.004][demo][INF] listening on 8080
//! # Ok::<(), linelog_core::LoggerError>(())
//! ```
//!
//! The logger is an ordinary value: build it once in `main` and pass it by
//! reference to whatever needs it. Dropping it writes the session-end marker
//! and closes the log file.

pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use logging::{
    ColorWriter, ConsoleColor, Destination, LineWriter, LogLevel, LogMode, Logger,
    TerminalWriter,
};
