//! Record Module
//!
//! Reads fixed-size binary log records and normalizes their byte order.
//!
//! ## Responsibilities
//! - Pull 12-byte records from any byte source
//! - Discard a trailing partial record without failing
//! - Reverse each word's bytes when the capture's endianness differs from the host
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ Record 1                                    │
//! │ ┌───────────────┬───────────┬─────────────┐ │
//! │ │ Timestamp (4) │ Event (4) │ Param (4)   │ │
//! │ └───────────────┴───────────┴─────────────┘ │
//! ├─────────────────────────────────────────────┤
//! │ Record 2                                    │
//! │ ┌───────────────┬───────────┬─────────────┐ │
//! │ │ Timestamp (4) │ Event (4) │ Param (4)   │ │
//! │ └───────────────┴───────────┴─────────────┘ │
//! └─────────────────────────────────────────────┘
//! ```
//! No header, no footer, no record count: end of file ends the stream.

mod entry;
mod endian;
mod reader;

pub use entry::{LogRecord, RECORD_SIZE, WORD_SIZE};
pub use endian::{needs_conversion, reverse_bytes, reverse_word, Endianness};
pub use reader::{RecordIterator, RecordReader};
