//! Event string table
//!
//! Read-only lookup from event code to display string.

use std::borrow::Cow;
use std::io::BufRead;

use crate::error::{ConvertError, Result};

use super::strings::LOG_STRINGS;

/// Returned for event codes with no table entry
pub const UNKNOWN_EVENT: &str = "UNKNOWN_EVENT";

/// Ordered, fixed-size table of event display strings
///
/// Built once and handed to the converter; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct EventTable {
    entries: Vec<Cow<'static, str>>,
}

impl EventTable {
    /// Build a table from owned strings
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries: entries.into_iter().map(Cow::Owned).collect(),
        }
    }

    /// Build a table over compiled-in strings without copying them
    pub fn from_static(entries: &'static [&'static str]) -> Self {
        Self {
            entries: entries.iter().copied().map(Cow::Borrowed).collect(),
        }
    }

    /// The table compiled into this binary
    pub fn builtin() -> Self {
        Self::from_static(LOG_STRINGS)
    }

    /// Load a table with one string per line, line `n` naming event `n`
    ///
    /// Line endings are dropped but other whitespace is kept, so padding
    /// used for alignment survives.
    pub fn from_lines<R: BufRead>(reader: R) -> Result<Self> {
        let entries = reader
            .lines()
            .enumerate()
            .map(|(index, line)| {
                line.map_err(|e| ConvertError::EventTable(format!("line {}: {}", index + 1, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(entries))
    }

    /// Display string for `code`, or [`UNKNOWN_EVENT`] when out of range
    pub fn resolve(&self, code: u32) -> &str {
        usize::try_from(code)
            .ok()
            .and_then(|index| self.entries.get(index))
            .map(|entry| &**entry)
            .unwrap_or(UNKNOWN_EVENT)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventTable {
    fn default() -> Self {
        Self::builtin()
    }
}
