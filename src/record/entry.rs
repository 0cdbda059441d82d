//! Log record definitions
//!
//! Defines the structure of a single binary log record.

use super::endian::reverse_word;

/// Size of one word in a record (in bytes)
pub const WORD_SIZE: usize = 4;

/// Size of one record: timestamp + event + parameter
pub const RECORD_SIZE: usize = 3 * WORD_SIZE;

/// A single record from the binary log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord {
    /// Microseconds since the logger started
    pub timestamp_micros: u32,

    /// Index into the event string table
    pub event_code: u32,

    /// Event-specific parameter
    pub parameter: u32,
}

impl LogRecord {
    pub fn new(timestamp_micros: u32, event_code: u32, parameter: u32) -> Self {
        Self {
            timestamp_micros,
            event_code,
            parameter,
        }
    }

    /// Decode a record from its raw bytes, taking each word in host order
    pub fn from_bytes(bytes: &[u8; RECORD_SIZE]) -> Self {
        let word = |i: usize| {
            let start = i * WORD_SIZE;
            u32::from_ne_bytes([
                bytes[start],
                bytes[start + 1],
                bytes[start + 2],
                bytes[start + 3],
            ])
        };

        Self::new(word(0), word(1), word(2))
    }

    /// Raw bytes of this record, each word in host order
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut bytes = [0u8; RECORD_SIZE];
        bytes[0..4].copy_from_slice(&self.timestamp_micros.to_ne_bytes());
        bytes[4..8].copy_from_slice(&self.event_code.to_ne_bytes());
        bytes[8..12].copy_from_slice(&self.parameter.to_ne_bytes());
        bytes
    }

    /// The same record with every word's bytes reversed
    pub fn byte_swapped(&self) -> Self {
        Self::new(
            reverse_word(self.timestamp_micros),
            reverse_word(self.event_code),
            reverse_word(self.parameter),
        )
    }

    /// Apply the per-run conversion decision
    pub fn normalized(self, convert: bool) -> Self {
        if convert {
            self.byte_swapped()
        } else {
            self
        }
    }
}
