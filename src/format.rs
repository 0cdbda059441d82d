//! Line formatter
//!
//! Renders one text line per record.
//!
//! ## Line Format
//! ```text
//! ┌────────────┬──┬────────────┬──┬──────────┬──┬────────────┬──┬────────────┐
//! │ timestamp  │, │ event code │, │ "string" │, │ parameter  │, │ 0xhex      │
//! │ u32, w=10  │  │ i32, w=10  │  │ quoted   │  │ i32, w=10  │  │ 8 digits   │
//! └────────────┴──┴────────────┴──┴──────────┴──┴────────────┴──┴────────────┘
//! ```
//! Event code and parameter are shown as signed values, so words with the
//! top bit set print negative in their decimal columns.

use std::fmt;
use std::io::Write;

use crate::error::Result;
use crate::record::LogRecord;

/// A record paired with its resolved event string, displayed without the newline
pub struct Line<'a> {
    pub record: &'a LogRecord,
    pub event: &'a str,
}

impl fmt::Display for Line<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>10}, {:>10}, \"{}\", {:>10}, 0x{:08x}",
            self.record.timestamp_micros,
            self.record.event_code as i32,
            self.event,
            self.record.parameter as i32,
            self.record.parameter
        )
    }
}

/// Format a record and its resolved event string, including the newline
pub fn format_line(record: &LogRecord, event: &str) -> String {
    format!("{}\n", Line { record, event })
}

/// Write one formatted line to `writer`
pub fn write_line<W: Write>(writer: &mut W, record: &LogRecord, event: &str) -> Result<()> {
    writeln!(writer, "{}", Line { record, event })?;
    Ok(())
}
