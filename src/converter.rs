//! Converter Module
//!
//! Drives one conversion pass over a binary log.
//!
//! ## Responsibilities
//! - Decide once whether words need byte reversal
//! - Read records until end of input
//! - Resolve each event code and write one line per record

use std::io::{BufWriter, Read, Write};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::events::EventTable;
use crate::format::write_line;
use crate::record::{needs_conversion, Endianness, RecordReader};

/// Outcome of a completed pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertSummary {
    /// Complete records converted (one output line each)
    pub records: u64,

    /// Bytes of a partial record discarded at end of input
    pub trailing_bytes: usize,
}

/// Converts binary records to text using an injected event table
pub struct Converter {
    /// Event strings, never mutated after construction
    table: EventTable,

    /// Reverse every word's bytes before use
    convert: bool,
}

impl Converter {
    /// Create a converter for data written in `endianness` order
    ///
    /// `None` means the data already matches this host.
    pub fn new(table: EventTable, endianness: Option<Endianness>) -> Self {
        let convert = needs_conversion(endianness);
        debug!(
            requested = ?endianness,
            native = %Endianness::native(),
            convert,
            "byte order decision"
        );
        Self { table, convert }
    }

    /// Whether words are byte-reversed by this converter
    pub fn converts(&self) -> bool {
        self.convert
    }

    /// The event table used for resolution
    pub fn table(&self) -> &EventTable {
        &self.table
    }

    /// Convert every complete record from `input` to lines on `output`
    pub fn run<R: Read, W: Write>(&self, input: R, output: &mut W) -> Result<ConvertSummary> {
        let mut reader = RecordReader::new(input);
        self.drain(&mut reader, output)
    }

    /// Convert records from an already-open reader
    pub fn drain<R: Read, W: Write>(
        &self,
        reader: &mut RecordReader<R>,
        output: &mut W,
    ) -> Result<ConvertSummary> {
        while let Some(record) = reader.next_record()? {
            let record = record.normalized(self.convert);
            let event = self.table.resolve(record.event_code);
            write_line(output, &record, event)?;
        }
        output.flush()?;

        let summary = ConvertSummary {
            records: reader.records_read(),
            trailing_bytes: reader.trailing_bytes(),
        };
        debug!(
            records = summary.records,
            trailing_bytes = summary.trailing_bytes,
            "conversion complete"
        );
        Ok(summary)
    }
}

/// Open the configured input and convert it to `output`
///
/// The input file is closed when this returns, whatever the outcome.
pub fn convert_file<W: Write>(
    config: &Config,
    table: EventTable,
    output: W,
) -> Result<ConvertSummary> {
    let mut reader = RecordReader::open(&config.input_path)?;
    convert_opened(config, &mut reader, table, output)
}

/// Convert an already-open input according to `config`, buffering `output`
pub fn convert_opened<R: Read, W: Write>(
    config: &Config,
    reader: &mut RecordReader<R>,
    table: EventTable,
    output: W,
) -> Result<ConvertSummary> {
    let converter = Converter::new(table, config.endianness);

    info!(
        input = %config.input_path.display(),
        convert = converter.converts(),
        "converting binary log"
    );

    let mut output = BufWriter::with_capacity(config.output_buffer_capacity, output);
    converter.drain(reader, &mut output)
}
