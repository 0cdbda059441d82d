//! Events Module
//!
//! Maps event codes to display strings.
//!
//! ## Responsibilities
//! - Hold an immutable, ordered table of event strings
//! - Resolve a code to its string, or to [`UNKNOWN_EVENT`] when out of range
//!
//! Codes past the end of the table are expected whenever the logger and the
//! converter were built from different versions of the event list, so they
//! are never treated as errors.

mod strings;
mod table;

pub use strings::LOG_STRINGS;
pub use table::{EventTable, UNKNOWN_EVENT};
