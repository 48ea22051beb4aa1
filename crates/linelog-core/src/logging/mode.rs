//! Output destinations and the destination mask

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Destination {
    /// Standard output, colored by severity
    Console,
    /// The dated log file
    File,
    /// Reserved. No sink exists for it and `init` rejects it.
    Gui,
}

impl Destination {
    pub const ALL: [Destination; 3] = [Destination::Console, Destination::File, Destination::Gui];

    /// Bit value of this destination inside a [`LogMode`]
    pub const fn bit(self) -> u8 {
        match self {
            Destination::Console => 1 << 0,
            Destination::File => 1 << 1,
            Destination::Gui => 1 << 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Console => "console",
            Destination::File => "file",
            Destination::Gui => "gui",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of active destinations
///
/// Combine flags with the named combinators:
///
/// ```
/// use linelog_core::LogMode;
///
/// let mode = LogMode::CONSOLE.union(LogMode::FILE);
/// assert!(mode.contains(LogMode::FILE));
/// assert_eq!(mode.intersection(LogMode::FILE), LogMode::FILE);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Destination>", into = "Vec<Destination>")]
pub struct LogMode(u8);

impl LogMode {
    pub const NONE: LogMode = LogMode(0);
    pub const CONSOLE: LogMode = LogMode(Destination::Console.bit());
    pub const FILE: LogMode = LogMode(Destination::File.bit());
    pub const GUI: LogMode = LogMode(Destination::Gui.bit());

    const KNOWN: u8 = Self::CONSOLE.0 | Self::FILE.0 | Self::GUI.0;

    /// Build a mode from raw bits, dropping unknown bits
    pub const fn from_bits(bits: u8) -> Self {
        LogMode(bits & Self::KNOWN)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn union(self, other: LogMode) -> Self {
        LogMode(self.0 | other.0)
    }

    pub const fn intersection(self, other: LogMode) -> Self {
        LogMode(self.0 & other.0)
    }

    /// True if every flag of `other` is set in `self`
    pub const fn contains(self, other: LogMode) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: LogMode) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: LogMode) {
        self.0 &= !other.0;
    }

    pub fn has(self, destination: Destination) -> bool {
        self.0 & destination.bit() != 0
    }

    /// Active destinations in declaration order
    pub fn destinations(self) -> impl Iterator<Item = Destination> {
        Destination::ALL.into_iter().filter(move |d| self.has(*d))
    }
}

impl Default for LogMode {
    fn default() -> Self {
        LogMode::CONSOLE
    }
}

impl From<Destination> for LogMode {
    fn from(destination: Destination) -> Self {
        LogMode(destination.bit())
    }
}

impl From<Vec<Destination>> for LogMode {
    fn from(destinations: Vec<Destination>) -> Self {
        destinations.into_iter().collect()
    }
}

impl From<LogMode> for Vec<Destination> {
    fn from(mode: LogMode) -> Self {
        mode.destinations().collect()
    }
}

impl FromIterator<Destination> for LogMode {
    fn from_iter<I: IntoIterator<Item = Destination>>(iter: I) -> Self {
        iter.into_iter()
            .fold(LogMode::NONE, |mode, d| mode.union(d.into()))
    }
}

impl fmt::Debug for LogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.destinations()).finish()
    }
}
