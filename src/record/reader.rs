//! Record Reader
//!
//! Handles reading fixed-size records from a binary log.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{ConvertError, Result};

use super::{LogRecord, RECORD_SIZE};

/// Reads records from a binary log source
pub struct RecordReader<R> {
    /// Underlying byte source
    source: R,
    /// Complete records handed out so far
    records_read: u64,
    /// Bytes of a partial record found at end of input
    trailing_bytes: usize,
    /// Set once end of input has been reached
    finished: bool,
}

impl RecordReader<BufReader<File>> {
    /// Open a binary log file for reading
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ConvertError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "opened binary log");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read> RecordReader<R> {
    /// Wrap an already-open byte source positioned at the first record
    pub fn new(source: R) -> Self {
        Self {
            source,
            records_read: 0,
            trailing_bytes: 0,
            finished: false,
        }
    }

    /// Read the next complete record
    ///
    /// Returns `Ok(None)` at end of input. A trailing partial record is
    /// discarded and also ends the stream.
    pub fn next_record(&mut self) -> Result<Option<LogRecord>> {
        if self.finished {
            return Ok(None);
        }

        let mut buf = [0u8; RECORD_SIZE];
        let filled = self.fill(&mut buf)?;

        if filled < RECORD_SIZE {
            self.finished = true;
            self.trailing_bytes = filled;
            if filled > 0 {
                debug!(
                    trailing_bytes = filled,
                    records = self.records_read,
                    "discarding partial record at end of input"
                );
            }
            return Ok(None);
        }

        self.records_read += 1;
        let record = LogRecord::from_bytes(&buf);
        trace!(index = self.records_read - 1, ?record, "read record");
        Ok(Some(record))
    }

    /// Iterate over all complete records
    pub fn records(self) -> RecordIterator<R> {
        RecordIterator { reader: self }
    }

    /// Number of complete records read so far
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Size of the discarded partial record, once end of input is reached
    pub fn trailing_bytes(&self) -> usize {
        self.trailing_bytes
    }

    /// Read until `buf` is full or the source is exhausted
    fn fill(&mut self, buf: &mut [u8; RECORD_SIZE]) -> Result<usize> {
        let mut filled = 0;
        while filled < RECORD_SIZE {
            match self.source.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Err(ConvertError::Io(e));
                }
            }
        }
        Ok(filled)
    }
}

/// Iterator over records
pub struct RecordIterator<R> {
    reader: RecordReader<R>,
}

impl<R> RecordIterator<R> {
    /// The reader driving this iterator, for its counters
    pub fn reader(&self) -> &RecordReader<R> {
        &self.reader
    }
}

impl<R: Read> Iterator for RecordIterator<R> {
    type Item = Result<LogRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next_record().transpose()
    }
}
