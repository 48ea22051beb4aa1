//! Severity levels and their display tags

use std::fmt;

use super::color::ConsoleColor;

/// Tag written for a raw level code that maps to no known level
pub const UNKNOWN_TAG: &str = "[???]";

/// Log levels
///
/// The discriminants are the raw codes accepted by
/// [`Logger::log_code`](super::Logger::log_code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum LogLevel {
    #[default]
    Info = 1 << 0,
    Debug = 1 << 1,
    Warn = 1 << 2,
    Error = 1 << 3,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [LogLevel::Info, LogLevel::Debug, LogLevel::Warn, LogLevel::Error];

    pub fn from_code(code: u8) -> Option<LogLevel> {
        Self::ALL.into_iter().find(|level| level.code() == code)
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Short bracketed label written into each record header
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Info => "[INF]",
            LogLevel::Debug => "[DBG]",
            LogLevel::Warn => "[WRN]",
            LogLevel::Error => "[ERR]",
        }
    }

    /// Console color used while a record of this level is being written
    pub const fn color(self) -> ConsoleColor {
        match self {
            LogLevel::Info => ConsoleColor::CYAN,
            LogLevel::Debug => ConsoleColor::DARK_GRAY,
            LogLevel::Warn => ConsoleColor::DARK_YELLOW,
            LogLevel::Error => ConsoleColor::DARK_RED,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Tag for a raw level code, `[???]` when the code is not a known level
pub fn level_tag(code: u8) -> &'static str {
    LogLevel::from_code(code).map_or(UNKNOWN_TAG, LogLevel::tag)
}
