//! In-memory sinks for testing
//!
//! Both types are cheap handles over shared state: keep a clone, hand the
//! other to the logger, and inspect what was written afterwards.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use super::color::{ColorWriter, ConsoleColor};

/// Something the logger did to the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleEvent {
    Text(String),
    Color(ConsoleColor),
}

#[derive(Debug, Default)]
struct ConsoleState {
    events: Vec<ConsoleEvent>,
    color: Option<ConsoleColor>,
}

/// In-memory console that records text and color changes
///
/// # Example
///
/// ```
/// use linelog_core::logging::{ColorWriter, ConsoleColor, MemoryColorWriter};
///
/// let console = MemoryColorWriter::with_color(ConsoleColor::DEFAULT);
/// let mut writer = console.clone();
/// writer.set_color(ConsoleColor::CYAN).unwrap();
/// writer.write_text("hi").unwrap();
///
/// assert_eq!(console.text(), "hi");
/// assert_eq!(console.color(), Some(ConsoleColor::CYAN));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryColorWriter {
    state: Arc<Mutex<ConsoleState>>,
}

impl MemoryColorWriter {
    /// Console whose color cannot be queried until something sets it
    pub fn new() -> Self {
        Self::default()
    }

    /// Console that reports `color` as its current color
    pub fn with_color(color: ConsoleColor) -> Self {
        let writer = Self::new();
        writer.state.lock().color = Some(color);
        writer
    }

    /// All text written, concatenated
    pub fn text(&self) -> String {
        self.state
            .lock()
            .events
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Text(text) => Some(text.as_str()),
                ConsoleEvent::Color(_) => None,
            })
            .collect()
    }

    pub fn events(&self) -> Vec<ConsoleEvent> {
        self.state.lock().events.clone()
    }

    /// Every color change, in order
    pub fn color_changes(&self) -> Vec<ConsoleColor> {
        self.state
            .lock()
            .events
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Color(color) => Some(*color),
                ConsoleEvent::Text(_) => None,
            })
            .collect()
    }

    pub fn color(&self) -> Option<ConsoleColor> {
        self.state.lock().color
    }

    pub fn clear(&self) {
        self.state.lock().events.clear();
    }
}

impl ColorWriter for MemoryColorWriter {
    fn current_color(&mut self) -> Option<ConsoleColor> {
        self.state.lock().color
    }

    fn set_color(&mut self, color: ConsoleColor) -> io::Result<()> {
        let mut state = self.state.lock();
        state.color = Some(color);
        state.events.push(ConsoleEvent::Color(color));
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let mut state = self.state.lock();
        // merge adjacent text so assertions see whole records
        if let Some(ConsoleEvent::Text(last)) = state.events.last_mut() {
            last.push_str(text);
        } else {
            state.events.push(ConsoleEvent::Text(text.to_string()));
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// In-memory byte sink, usable as the logger's file destination
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Written bytes as (lossy) UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_writer_records_events() {
        let console = MemoryColorWriter::new();
        let mut writer = console.clone();

        assert_eq!(writer.current_color(), None);

        writer.write_text("a").unwrap();
        writer.write_text("b").unwrap();
        writer.set_color(ConsoleColor::DARK_RED).unwrap();
        writer.write_text("c").unwrap();

        assert_eq!(
            console.events(),
            vec![
                ConsoleEvent::Text("ab".to_string()),
                ConsoleEvent::Color(ConsoleColor::DARK_RED),
                ConsoleEvent::Text("c".to_string()),
            ]
        );
        assert_eq!(console.text(), "abc");
        assert_eq!(console.color_changes(), vec![ConsoleColor::DARK_RED]);
        assert_eq!(writer.current_color(), Some(ConsoleColor::DARK_RED));

        console.clear();
        assert!(console.events().is_empty());
        // clearing keeps the current color
        assert_eq!(console.color(), Some(ConsoleColor::DARK_RED));
    }

    #[test]
    fn test_shared_buffer() {
        let buffer = SharedBuffer::new();
        assert!(buffer.is_empty());

        let mut handle = buffer.clone();
        write!(handle, "x = {}", 5).unwrap();

        assert_eq!(buffer.contents(), "x = 5");
        assert_eq!(buffer.len(), 5);
    }
}
