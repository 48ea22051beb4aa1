//! Console colors and the writer abstraction the logger draws through

use std::fmt;
use std::io;

use crossterm::style::Color;

/// A console text attribute
///
/// Uses the classic 16-color console layout: the low nibble is the
/// foreground, with blue = 1, green = 2, red = 4 and intensity = 8.
/// Higher bits (background) are kept but not rendered.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsoleColor(u16);

impl ConsoleColor {
    pub const CYAN: ConsoleColor = ConsoleColor(3);
    pub const DARK_RED: ConsoleColor = ConsoleColor(4);
    pub const DARK_YELLOW: ConsoleColor = ConsoleColor(6);
    /// Light gray on black, the console's initial attribute
    pub const DEFAULT: ConsoleColor = ConsoleColor(7);
    pub const DARK_GRAY: ConsoleColor = ConsoleColor(8);

    pub const fn new(code: u16) -> Self {
        ConsoleColor(code)
    }

    pub const fn code(self) -> u16 {
        self.0
    }

    pub fn is_default(self) -> bool {
        self == Self::DEFAULT
    }

    /// Terminal foreground color for this attribute
    pub fn foreground(self) -> Color {
        match self.0 & 0x0f {
            0x0 => Color::Black,
            0x1 => Color::DarkBlue,
            0x2 => Color::DarkGreen,
            0x3 => Color::DarkCyan,
            0x4 => Color::DarkRed,
            0x5 => Color::DarkMagenta,
            0x6 => Color::DarkYellow,
            0x7 => Color::Grey,
            0x8 => Color::DarkGrey,
            0x9 => Color::Blue,
            0xa => Color::Green,
            0xb => Color::Cyan,
            0xc => Color::Red,
            0xd => Color::Magenta,
            0xe => Color::Yellow,
            _ => Color::White,
        }
    }
}

impl Default for ConsoleColor {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConsoleColor({})", self.0)
    }
}

/// Console capability the logger writes through
///
/// Implementations:
/// - `TerminalWriter`: real terminal via crossterm (ANSI or the Windows console API)
/// - `MemoryColorWriter`: in-memory recorder for tests
pub trait ColorWriter: Send {
    /// Color currently in effect, if the console can report it
    fn current_color(&mut self) -> Option<ConsoleColor>;

    /// Change the color used for subsequent text
    fn set_color(&mut self, color: ConsoleColor) -> io::Result<()>;

    /// Write text verbatim
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Whether the console is an interactive terminal
    fn is_terminal(&self) -> bool {
        false
    }
}

impl<T: ColorWriter + ?Sized> ColorWriter for Box<T> {
    fn current_color(&mut self) -> Option<ConsoleColor> {
        (**self).current_color()
    }

    fn set_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        (**self).set_color(color)
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }

    fn is_terminal(&self) -> bool {
        (**self).is_terminal()
    }
}

/// Type alias for a boxed console writer
pub type BoxedColorWriter = Box<dyn ColorWriter>;
