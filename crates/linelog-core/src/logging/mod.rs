//! Console and file logging
//!
//! - `Logger`: owns the destinations and writes composed lines
//! - `ColorWriter`: console capability (`TerminalWriter`, `MemoryColorWriter`)
//! - timestamp and log file name formatting

mod color;
mod console;
mod file;
mod level;
mod logger;
mod macros;
mod memory;
mod mode;
mod timestamp;

pub use color::{BoxedColorWriter, ColorWriter, ConsoleColor};
pub use console::TerminalWriter;
pub use file::{log_file_path, open_log_file, BoxedFileSink};
pub use level::{level_tag, LogLevel, UNKNOWN_TAG};
pub use logger::{LineWriter, Logger, END_MARKER, START_MARKER};
pub use memory::{ConsoleEvent, MemoryColorWriter, SharedBuffer};
pub use mode::{Destination, LogMode};
pub use timestamp::{
    format_log_file_name, format_log_name, format_timestamp, generate_timestamp, log_name,
    DEFAULT_LOG_DIR, TIMESTAMP_LEN,
};
