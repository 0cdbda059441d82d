//! log-converter binary
//!
//! Converts a binary logging file to text on stdout.

use std::io::{self, Write};
use std::process::ExitCode;

use log_converter::cli::{self, Args};
use log_converter::EventTable;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> ExitCode {
    // Initialize tracing/logging; stdout is reserved for converted text
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let program = std::env::args_os()
        .next()
        .map(|argv0| cli::program_name(&argv0.to_string_lossy()))
        .unwrap_or_else(|| "log-converter".to_string());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let args = match Args::from_argv(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => {
            tracing::debug!("argument parsing failed: {}", e);
            let _ = write!(out, "{}", cli::usage(&program));
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!("log-converter v{}", log_converter::VERSION);

    if cli::run(&args, &program, EventTable::builtin(), &mut out) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
