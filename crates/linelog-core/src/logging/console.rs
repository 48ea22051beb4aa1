//! Terminal console writer

use std::io::{self, IsTerminal, Stdout, Write};

use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetForegroundColor};

use super::color::{ColorWriter, ConsoleColor};

/// Console writer backed by a real terminal stream
///
/// Terminals cannot be asked for their current color, so the writer
/// remembers the last color it set. Until the first change it reports
/// nothing and the logger falls back to [`ConsoleColor::DEFAULT`].
///
/// Color commands are only emitted when `colors` is on; standard output
/// turns them off when it is redirected to a file or pipe.
#[derive(Debug)]
pub struct TerminalWriter<W: Write + Send = Stdout> {
    out: W,
    color: Option<ConsoleColor>,
    terminal: bool,
    colors: bool,
}

impl TerminalWriter<Stdout> {
    /// Attach to the process's standard output
    pub fn stdout() -> Self {
        let out = io::stdout();
        let terminal = out.is_terminal();
        Self {
            out,
            color: None,
            terminal,
            colors: terminal,
        }
    }
}

impl Default for TerminalWriter<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> TerminalWriter<W> {
    /// Wrap an arbitrary stream, treated as a non-interactive console
    /// that still receives color commands
    pub fn new(out: W) -> Self {
        Self {
            out,
            color: None,
            terminal: false,
            colors: true,
        }
    }

    /// Turn color commands on or off
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> ColorWriter for TerminalWriter<W> {
    fn current_color(&mut self) -> Option<ConsoleColor> {
        self.color
    }

    fn set_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        if !self.colors {
            self.color = Some(color);
            return Ok(());
        }
        if color.is_default() {
            queue!(self.out, ResetColor)?;
        } else {
            queue!(self.out, SetForegroundColor(color.foreground()))?;
        }
        self.color = Some(color);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        queue!(self.out, Print(text))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_last_color() {
        let mut writer = TerminalWriter::new(Vec::new());
        assert_eq!(writer.current_color(), None);
        assert!(!writer.is_terminal());

        writer.set_color(ConsoleColor::DARK_RED).unwrap();
        assert_eq!(writer.current_color(), Some(ConsoleColor::DARK_RED));

        writer.set_color(ConsoleColor::DEFAULT).unwrap();
        assert_eq!(writer.current_color(), Some(ConsoleColor::DEFAULT));
    }

    #[test]
    fn test_writes_text_with_escapes() {
        let mut writer = TerminalWriter::new(Vec::new());
        writer.set_color(ConsoleColor::CYAN).unwrap();
        writer.write_text("hello").unwrap();
        writer.set_color(ConsoleColor::DEFAULT).unwrap();
        writer.flush().unwrap();

        let out = String::from_utf8(writer.into_inner()).unwrap();
        assert!(out.contains("hello"));
        // color change and reset both emit control sequences around the text
        if cfg!(unix) {
            assert!(out.starts_with('\u{1b}'));
            assert!(out.ends_with('m'));
        }
    }

    #[test]
    fn test_plain_output_without_colors() {
        let mut writer = TerminalWriter::new(Vec::new()).with_colors(false);
        writer.set_color(ConsoleColor::DARK_YELLOW).unwrap();
        writer.write_text("plain").unwrap();

        assert_eq!(writer.current_color(), Some(ConsoleColor::DARK_YELLOW));
        assert_eq!(writer.into_inner(), b"plain".to_vec());
    }

    #[test]
    fn test_stdout_writer() {
        // This test just verifies attaching to stdout doesn't panic
        let mut writer = TerminalWriter::stdout();
        writer.write_text("").unwrap();
        writer.flush().unwrap();
    }
}
