//! Compiled-in event strings
//!
//! Index `n` is the display string for event code `n`. This list is produced
//! alongside the logger's event enumeration; keep the two in step.

/// Default event string table
pub static LOG_STRINGS: &[&str] = &[
    "  EMPTY",
    "  HEAP_STATS",
    "  LOG_START",
    "  LOG_START_AGAIN",
    "  LOG_STOP",
    "  LOG_FILE_OPEN",
    "  LOG_FILE_OPEN_FAILURE",
    "  LOG_FILE_CLOSE",
    "  LOG_FILE_UPLOAD_STARTING",
    "  LOG_FILE_UPLOAD_COMPLETED",
    "  LOG_FILE_UPLOAD_FAILURE",
    "  LOG_ENTRIES_OVERWRITTEN",
    "  LOG_WRITE_FAILURE",
    "  LOG_BUFFER_FULL",
    "  USER_0",
    "  USER_1",
    "  USER_2",
    "  USER_3",
    "  USER_4",
    "  USER_5",
    "  USER_6",
    "  USER_7",
    "  USER_8",
    "  USER_9",
];
