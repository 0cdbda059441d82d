//! # log-converter
//!
//! Turns a binary logging capture into human-readable text:
//! - Fixed 12-byte records (timestamp, event, parameter)
//! - Optional byte-order conversion when the capture came from a foreign host
//! - Event codes resolved through an injected string table
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ RecordReader │──▶│  Normalizer  │──▶│  EventTable  │──▶│  Formatter   │──▶ stdout
//! │  (12 bytes)  │   │ (byte swap?) │   │  (resolve)   │   │  (one line)  │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod events;
pub mod format;
pub mod converter;
pub mod cli;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ConvertError, Result};
pub use config::Config;
pub use converter::{ConvertSummary, Converter};
pub use events::{EventTable, UNKNOWN_EVENT};
pub use record::{Endianness, LogRecord, RecordReader};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of log-converter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
