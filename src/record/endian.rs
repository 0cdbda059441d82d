//! Byte order handling
//!
//! Decides once per run whether words need reversing, and reverses them.

use std::fmt;
use std::str::FromStr;

use crate::error::{ConvertError, Result};

/// Byte order of the data in a capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Least-significant byte first (`l`)
    Little,

    /// Most-significant byte first (`b`)
    Big,
}

impl Endianness {
    /// Byte order of the machine running the converter
    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    /// Parse the single-character command-line form
    ///
    /// Only `l` and `b` are accepted; anything longer, shorter or different
    /// is rejected.
    pub fn from_arg(arg: &str) -> Result<Self> {
        match arg {
            "l" => Ok(Endianness::Little),
            "b" => Ok(Endianness::Big),
            other => Err(ConvertError::InvalidEndianness(other.to_string())),
        }
    }
}

impl FromStr for Endianness {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_arg(s)
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "little"),
            Endianness::Big => write!(f, "big"),
        }
    }
}

/// Whether words must be reversed to read a capture written in `requested` order
///
/// With no request the data is assumed to already match the host.
pub fn needs_conversion(requested: Option<Endianness>) -> bool {
    match requested {
        Some(endianness) => endianness != Endianness::native(),
        None => false,
    }
}

/// Reflect a 4-byte word: byte 0 <-> 3, byte 1 <-> 2
pub fn reverse_bytes(bytes: [u8; 4]) -> [u8; 4] {
    [bytes[3], bytes[2], bytes[1], bytes[0]]
}

/// Reverse the byte order of a word's own bytes
pub fn reverse_word(word: u32) -> u32 {
    u32::from_ne_bytes(reverse_bytes(word.to_ne_bytes()))
}
