//! Command-line front end
//!
//! Validates the two positional arguments, prints usage, and runs the
//! conversion against a caller-supplied output stream.

use std::ffi::OsString;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, warn};

use crate::config::Config;
use crate::converter::{convert_opened, ConvertSummary};
use crate::error::{ConvertError, Result};
use crate::events::EventTable;
use crate::record::{Endianness, RecordReader};

/// Positional arguments: `<file> [<endianness>]`
///
/// Both positionals take their values verbatim, including a leading `-`;
/// anything after them is accepted and ignored.
#[derive(Parser, Debug)]
#[command(name = "log-converter")]
#[command(about = "Convert a binary logging file to human-readable text on stdout")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Binary format logging input file
    #[arg(allow_hyphen_values = true)]
    pub file: Option<PathBuf>,

    /// Endianness of the data in the file: b for big, l for little
    #[arg(allow_hyphen_values = true)]
    pub endianness: Option<String>,

    /// Anything past the second positional
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<OsString>,
}

impl Args {
    /// Parse a full argument vector, `argv[0]` first
    ///
    /// A `--` is placed after the program name so no argument is ever taken
    /// for a flag.
    pub fn from_argv<I, T>(argv: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv.into_iter().map(|arg| -> OsString { arg.into() });
        let program = argv.next().unwrap_or_else(|| OsString::from("log-converter"));
        let escaped = std::iter::once(program)
            .chain(std::iter::once(OsString::from("--")))
            .chain(argv);
        Self::try_parse_from(escaped)
    }
}

/// Name to show in usage text: `argv[0]` up to the first `.` of its last
/// `/` or `\` separated component
pub fn program_name(argv0: &str) -> String {
    argv0
        .split(['/', '\\'])
        .filter(|part| !part.is_empty())
        .last()
        .and_then(|name| name.split('.').find(|part| !part.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| "log-converter".to_string())
}

/// Full usage text for `program`
pub fn usage(program: &str) -> String {
    let lines = [
        String::new(),
        format!("{program}: take a binary file of logging data and convert it to human-readable form on stdout."),
        "The binary format is defined here: https://github.com/u-blox/log-client, basically three".to_string(),
        "32-bit words, the first being the microsecond timestamp, the second the log event and the".to_string(),
        "third a parameter for that event.  In order to convert the log event to a string this binary".to_string(),
        "must have been compiled with the right header file, see https://github.com/u-blox/log-converter".to_string(),
        "for more information.".to_string(),
        String::new(),
        "Usage:".to_string(),
        format!("  {program} file endianness"),
        String::new(),
        "where:".to_string(),
        "  file is the name of the binary format logging input file,".to_string(),
        "  endianness is the endianness of the data in the binary file, b for big, l for little,".to_string(),
        "endianness may be omitted, in which case the endianness of the binary data is assumed to".to_string(),
        "be that of this machine (i.e. no conversion is required).".to_string(),
        String::new(),
        "For example:".to_string(),
        format!("  {program} binary_data.log l"),
        String::new(),
    ];
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Validated invocation: configuration plus the already-open input
pub struct Invocation {
    pub config: Config,
    pub reader: RecordReader<BufReader<File>>,
}

impl Invocation {
    /// Check the arguments and open the input file
    ///
    /// A bad endianness argument does not stop the open from being tried,
    /// so every problem with the invocation is reported at once. No record
    /// data is read here.
    pub fn prepare(args: &Args) -> std::result::Result<Self, Vec<ConvertError>> {
        let Some(path) = args.file.as_deref() else {
            return Err(vec![ConvertError::Usage]);
        };

        let mut errors = Vec::new();

        let endianness = match args.endianness.as_deref().map(Endianness::from_arg) {
            Some(Ok(endianness)) => Some(endianness),
            Some(Err(e)) => {
                errors.push(e);
                None
            }
            None => None,
        };

        let reader = match RecordReader::open(path) {
            Ok(reader) => Some(reader),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match reader {
            Some(reader) if errors.is_empty() => Ok(Self {
                config: Config::builder()
                    .input_path(path)
                    .endianness(endianness)
                    .build(),
                reader,
            }),
            _ => Err(errors),
        }
    }

    /// Convert the opened input to `output` using `table`
    pub fn execute<W: Write>(mut self, table: EventTable, output: W) -> Result<ConvertSummary> {
        convert_opened(&self.config, &mut self.reader, table, output)
    }
}

/// Run a whole invocation, writing converted text and messages to `out`
///
/// Returns `true` on success.
pub fn run<W: Write>(args: &Args, program: &str, table: EventTable, out: &mut W) -> bool {
    let invocation = match Invocation::prepare(args) {
        Ok(invocation) => invocation,
        Err(errors) => {
            report(&errors, program, out);
            return false;
        }
    };

    match invocation.execute(table, &mut *out) {
        Ok(summary) => {
            debug!(records = summary.records, "done");
            true
        }
        Err(e) => {
            warn!(error = %e, "conversion failed");
            // The output stream may be what failed; nothing more to do then.
            let _ = writeln!(out, "{}", e);
            false
        }
    }
}

/// Print each invocation error, then the usage text once if any asks for it
fn report<W: Write>(errors: &[ConvertError], program: &str, out: &mut W) {
    for error in errors {
        debug!(?error, "invalid invocation");
        // A missing file argument is explained by the usage text alone.
        if !matches!(error, ConvertError::Usage) {
            let _ = writeln!(out, "{}", error);
        }
    }
    if errors.iter().any(ConvertError::wants_usage) {
        let _ = write!(out, "{}", usage(program));
    }
}
