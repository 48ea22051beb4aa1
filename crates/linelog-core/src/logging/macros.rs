//! One-statement logging macros
//!
//! Each macro writes a whole composed line and restores the console color
//! before returning:
//!
//! ```
//! use linelog_core::{log_info, LogMode, Logger};
//! use linelog_core::logging::MemoryColorWriter;
//!
//! let console = MemoryColorWriter::new();
//! let logger = Logger::new().with_console(console.clone());
//! logger.init(LogMode::CONSOLE, "").unwrap();
//!
//! log_info!(logger, "a", 1, true);
//! assert!(console.text().ends_with("[INF] a 1 true "));
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __log_line {
    ($logger:expr, $level:expr $(, $value:expr)*) => {{
        #[allow(unused_mut)]
        let mut line = $logger.log($level);
        $( line.field(&$value); )*
    }};
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__log_line!($logger, $crate::logging::LogLevel::Info $(, $value)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__log_line!($logger, $crate::logging::LogLevel::Debug $(, $value)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__log_line!($logger, $crate::logging::LogLevel::Warn $(, $value)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::__log_line!($logger, $crate::logging::LogLevel::Error $(, $value)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::logging::{ConsoleColor, LogMode, Logger, MemoryColorWriter};

    fn logger() -> (Logger, MemoryColorWriter) {
        let console = MemoryColorWriter::with_color(ConsoleColor::DEFAULT);
        let logger = Logger::new().with_console(console.clone());
        logger.init(LogMode::CONSOLE, "").unwrap();
        (logger, console)
    }

    #[test]
    fn test_macros_write_one_line_each() {
        let (logger, console) = logger();
        let port = 8080;

        crate::log_info!(logger, "listening", port);
        crate::log_debug!(logger, "config", "ok",);
        crate::log_warn!(logger);
        crate::log_error!(&logger, "failed", false);

        let text = console.text();
        assert_eq!(text.matches('\n').count(), 4);
        assert!(text.contains("[INF] listening 8080 "));
        assert!(text.contains("[DBG] config ok "));
        assert!(text.contains("[WRN] \n"));
        assert!(text.ends_with("[ERR] failed false "));
        assert_eq!(console.color(), Some(ConsoleColor::DEFAULT));
    }
}
