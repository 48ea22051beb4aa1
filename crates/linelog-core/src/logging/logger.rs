//! The logger and its composed-line writer

use std::cell::RefCell;
use std::fmt::{self, Display};
use std::io::Write;
use std::path::PathBuf;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

use super::color::{BoxedColorWriter, ColorWriter, ConsoleColor};
use super::console::TerminalWriter;
use super::file::{open_log_file, BoxedFileSink};
use super::level::{LogLevel, UNKNOWN_TAG};
use super::mode::{Destination, LogMode};
use super::timestamp::{generate_timestamp, DEFAULT_LOG_DIR};
use crate::config::LoggerConfig;
use crate::error::{LoggerError, LoggerResult};

/// Session-start marker, written once the file destination is open
pub const START_MARKER: &str = "==Start of log==";

/// Session-end marker, written when an initialized logger is dropped
pub const END_MARKER: &str = "\n==End of log==";

/// Timestamped, severity-colored logger writing to the console and/or a dated file
///
/// A `Logger` is owned by the application's composition root and handed to
/// components by reference (or `Arc`). Records are composed one line at a
/// time through the [`LineWriter`] returned by [`Logger::log`]:
///
/// ```
/// use linelog_core::{LogMode, Logger};
/// use linelog_core::logging::MemoryColorWriter;
///
/// let console = MemoryColorWriter::new();
/// let logger = Logger::new().with_console(console.clone());
/// logger.init(LogMode::CONSOLE, "[app]").unwrap();
///
/// logger.info().field("loaded").field(3).field("plugins");
///
/// assert!(console.text().ends_with("[app][INF] loaded 3 plugins "));
/// ```
///
/// Each `LineWriter` holds the logger's lock until it is dropped, so lines
/// from different threads never interleave. The lock is reentrant: a line
/// started on the same thread while another is open (for example from a
/// field argument) is written inline, and the outer line then carries on.
pub struct Logger {
    state: ReentrantMutex<RefCell<LoggerState>>,
}

struct LoggerState {
    mode: LogMode,
    prefix: String,
    last_level: Option<u8>,
    console: BoxedColorWriter,
    file: Option<BoxedFileSink>,
    /// Sink injected with `with_file_sink`, used instead of a real file at init
    file_override: Option<BoxedFileSink>,
    log_dir: PathBuf,
    log_path: Option<PathBuf>,
    initialized: bool,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create an uninitialized logger on standard output
    ///
    /// Until [`init`](Self::init) is called the logger writes to the console only.
    pub fn new() -> Self {
        Self {
            state: ReentrantMutex::new(RefCell::new(LoggerState {
                mode: LogMode::default(),
                prefix: String::new(),
                last_level: None,
                console: Box::new(TerminalWriter::stdout()),
                file: None,
                file_override: None,
                log_dir: PathBuf::from(DEFAULT_LOG_DIR),
                log_path: None,
                initialized: false,
            })),
        }
    }

    /// Create and initialize a logger from configuration
    pub fn from_config(config: &LoggerConfig) -> LoggerResult<Self> {
        let logger = Self::new().with_log_dir(&config.log_dir);
        logger.init(config.destinations, config.prefix.clone())?;
        Ok(logger)
    }

    /// Replace the console writer
    pub fn with_console(mut self, console: impl ColorWriter + 'static) -> Self {
        self.state_mut().console = Box::new(console);
        self
    }

    /// Use `sink` as the file destination instead of opening a dated file
    pub fn with_file_sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.state_mut().file_override = Some(Box::new(sink));
        self
    }

    /// Directory for the dated log file (default `logs`)
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.state_mut().log_dir = dir.into();
        self
    }

    fn state_mut(&mut self) -> &mut LoggerState {
        self.state.get_mut().get_mut()
    }

    /// Run `f` on the state while holding the lock; the borrow ends with `f`
    fn with_state<R>(&self, f: impl FnOnce(&mut LoggerState) -> R) -> R {
        let guard = self.state.lock();
        let mut state = guard.borrow_mut();
        f(&mut state)
    }

    /// Configure destinations and line prefix, and open the file destination
    ///
    /// A second call on an initialized logger fails with
    /// [`LoggerError::AlreadyInitialized`], whatever mode it asks for. A mode
    /// containing [`Destination::Gui`] is rejected with
    /// [`LoggerError::UnsupportedDestination`]. Both leave the logger
    /// untouched. A log file that cannot be created is not an error: the file
    /// destination is dropped and a warning is written to the console instead.
    pub fn init(&self, mode: LogMode, prefix: impl Into<String>) -> LoggerResult<()> {
        self.with_state(|state| {
            if state.initialized {
                return Err(LoggerError::AlreadyInitialized);
            }
            if mode.has(Destination::Gui) {
                return Err(LoggerError::UnsupportedDestination(Destination::Gui));
            }

            state.initialized = true;
            state.mode = mode;
            state.prefix = prefix.into();

            if mode.has(Destination::File) {
                match state.open_file() {
                    Ok(()) => state.write_field(START_MARKER),
                    Err(err) => {
                        state.mode.remove(LogMode::FILE);
                        let message = format!(
                            "could not open log file in {}: {}",
                            state.log_dir.display(),
                            err
                        );
                        let saved = state.begin_line(LogLevel::Warn.code());
                        state.write_field(&message);
                        state.end_line(saved);
                    }
                }
            }

            Ok(())
        })
    }

    /// Start a composed line at `level`
    pub fn log(&self, level: LogLevel) -> LineWriter<'_> {
        self.log_code(level.code())
    }

    /// Start a composed line from a raw level code
    ///
    /// Codes that are not a [`LogLevel`] get the `[???]` tag and leave the
    /// console color unchanged.
    pub fn log_code(&self, code: u8) -> LineWriter<'_> {
        let guard = self.state.lock();
        let saved_color = guard.borrow_mut().begin_line(code);
        LineWriter {
            guard,
            code,
            saved_color,
        }
    }

    pub fn info(&self) -> LineWriter<'_> {
        self.log(LogLevel::Info)
    }

    pub fn debug(&self) -> LineWriter<'_> {
        self.log(LogLevel::Debug)
    }

    pub fn warn(&self) -> LineWriter<'_> {
        self.log(LogLevel::Warn)
    }

    pub fn error(&self) -> LineWriter<'_> {
        self.log(LogLevel::Error)
    }

    /// Active destinations
    pub fn mode(&self) -> LogMode {
        self.with_state(|state| state.mode)
    }

    pub fn prefix(&self) -> String {
        self.with_state(|state| state.prefix.clone())
    }

    /// Level of the most recent line, `None` before the first line or after an unknown code
    pub fn last_level(&self) -> Option<LogLevel> {
        self.with_state(|state| state.last_level.and_then(LogLevel::from_code))
    }

    /// Path of the open log file, if the logger opened one
    pub fn log_path(&self) -> Option<PathBuf> {
        self.with_state(|state| state.log_path.clone())
    }

    pub fn log_dir(&self) -> PathBuf {
        self.with_state(|state| state.log_dir.clone())
    }

    /// Whether the console destination is an interactive terminal
    pub fn console_is_terminal(&self) -> bool {
        self.with_state(|state| state.console.is_terminal())
    }

    pub fn is_initialized(&self) -> bool {
        self.with_state(|state| state.initialized)
    }

    /// Flush both destinations without closing them
    pub fn flush(&self) {
        self.with_state(LoggerState::flush);
    }
}

impl LoggerState {
    fn open_file(&mut self) -> std::io::Result<()> {
        if let Some(sink) = self.file_override.take() {
            self.file = Some(sink);
            return Ok(());
        }

        let (path, file) = open_log_file(&self.log_dir)?;
        self.file = Some(Box::new(file));
        self.log_path = Some(path);
        Ok(())
    }

    /// Write `text` to every active destination, file first
    fn write_all(&mut self, text: &str) {
        if self.mode.has(Destination::File) {
            if let Some(file) = self.file.as_mut() {
                let _ = file.write_all(text.as_bytes());
            }
        }
        if self.mode.has(Destination::Console) {
            let _ = self.console.write_text(text);
        }
    }

    fn write_field(&mut self, value: impl Display) {
        self.write_all(&format!("{} ", value));
    }

    /// Tag for `code`; switches the console to the level's color
    fn resolve_level(&mut self, code: u8) -> &'static str {
        let Some(level) = LogLevel::from_code(code) else {
            return UNKNOWN_TAG;
        };

        if self.mode.has(Destination::Console) {
            let _ = self.console.set_color(level.color());
        }
        level.tag()
    }

    /// Write the header for `code` and return the color to restore at the end of the line
    fn begin_line(&mut self, code: u8) -> ConsoleColor {
        self.last_level = Some(code);
        let saved = if self.mode.has(Destination::Console) {
            self.console
                .current_color()
                .unwrap_or(ConsoleColor::DEFAULT)
        } else {
            ConsoleColor::DEFAULT
        };

        let timestamp = generate_timestamp();
        let tag = self.resolve_level(code);
        let header = format!("\n{}{}{} ", timestamp, self.prefix, tag);
        self.write_all(&header);
        saved
    }

    fn end_line(&mut self, saved: ConsoleColor) {
        if self.mode.has(Destination::Console) {
            let _ = self.console.set_color(saved);
            let _ = self.console.flush();
        }
    }

    fn flush(&mut self) {
        if let Some(file) = self.file.as_mut() {
            let _ = file.flush();
        }
        let _ = self.console.flush();
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let state = self.state_mut();
        if !state.initialized {
            return;
        }

        state.write_field(END_MARKER);
        state.flush();
        state.file = None;
        state.log_path = None;
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_state(|state| {
            f.debug_struct("Logger")
                .field("mode", &state.mode)
                .field("prefix", &state.prefix)
                .field("log_path", &state.log_path)
                .field("initialized", &state.initialized)
                .finish()
        })
    }
}

/// One composed log line
///
/// Created by [`Logger::log`] after the header has been written. Each
/// [`field`](Self::field) appends a value followed by a space. Dropping the
/// writer, on any path, restores the console color saved when the line began.
pub struct LineWriter<'a> {
    guard: ReentrantMutexGuard<'a, RefCell<LoggerState>>,
    code: u8,
    saved_color: ConsoleColor,
}

impl LineWriter<'_> {
    /// Append a value to the line
    pub fn field(&mut self, value: impl Display) -> &mut Self {
        // format before borrowing: a `Display` impl may log on its own
        let text = format!("{} ", value);
        self.guard.borrow_mut().write_all(&text);
        self
    }

    /// Finish the line now
    pub fn end(self) {}
}

impl Drop for LineWriter<'_> {
    fn drop(&mut self) {
        self.guard.borrow_mut().end_line(self.saved_color);
    }
}

impl fmt::Debug for LineWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWriter")
            .field("level", &self.code)
            .field("saved_color", &self.saved_color)
            .finish()
    }
}
