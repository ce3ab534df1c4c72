//! Command-line front end for `readsmc`
//!
//! ```text
//! readsmc [--lenient] [--json] <KeyName> <Length>
//! ```
//!
//! Successful reads print the endpoint signature and the key bytes:
//!
//! ```text
//! Signature: 0x434d53656c707041
//! TC0P: [ 2A 80 ]
//! ```
//!
//! Every failure prints a single `ERROR: ...` line. Exit status is `0` on
//! success, `1` for invocation problems and `255` (`-1`) when the endpoint
//! cannot be bound or the read itself fails.

use std::{
    ffi::OsString,
    io::{self, Write},
    path::Path,
};

use clap::{error::ErrorKind, Parser};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::{
    config::{KeyPolicy, OutputFormat, ReaderConfig},
    error::{Error, Result},
    smc::{KeyReading, ReadStage, SmcKeyReader, SmcLocator},
};

/// Exit status for a successful read
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status for bad arguments
pub const EXIT_USAGE: u8 = 1;
/// Exit status for endpoint and read failures
pub const EXIT_FAILURE: u8 = 255;

/// Environment variable holding the log filter for the binary
pub const LOG_ENV: &str = "READSMC_LOG";

const PROGRAM_NAME: &str = "readsmc";

/// Arguments accepted by `readsmc`
#[derive(Debug, Clone, Parser)]
#[command(name = "readsmc", version, about = "AppleSMC Key Reader")]
pub struct Cli {
    /// SMC key name, normally four characters such as TC0P
    #[arg(value_name = "KeyName", allow_hyphen_values = true)]
    pub key: String,

    /// Number of bytes to read, in decimal
    #[arg(value_name = "Length")]
    pub length: String,

    /// Zero-pad or truncate key names that are not exactly four bytes
    #[arg(long)]
    pub lenient: bool,

    /// Print the reading as a JSON object
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn config(&self) -> ReaderConfig {
        let policy = if self.lenient { KeyPolicy::Lenient } else { KeyPolicy::Strict };
        let format = if self.json { OutputFormat::Json } else { OutputFormat::Text };
        ReaderConfig::new().with_key_policy(policy).with_format(format)
    }
}

/// Usage banner printed for malformed invocations
pub fn usage(program: &str) -> String {
    format!(
        "AppleSMC Key Reader\nUsage: {} <KeyName> <Length>\nCopyright (C) {}\n",
        program,
        env!("CARGO_PKG_AUTHORS")
    )
}

/// Exit status for an error returned by the reader
pub fn exit_code(err: &Error) -> u8 {
    if err.is_usage() {
        EXIT_USAGE
    } else {
        EXIT_FAILURE
    }
}

/// Install the stderr log subscriber, filtered by `READSMC_LOG` (default `warn`)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| PROGRAM_NAME.to_string())
}

/// Parse `args` (program name first), read the key through `locator` and
/// print the outcome to `out`. Returns the process exit status.
pub fn run<I, T, L, W>(args: I, locator: L, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    L: SmcLocator,
    W: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    match execute(&args, locator, out) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %e, "could not write output");
            EXIT_FAILURE
        },
    }
}

fn execute<L: SmcLocator, W: Write>(args: &[OsString], locator: L, out: &mut W) -> Result<u8> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            write!(out, "{}", e.render())?;
            return Ok(EXIT_SUCCESS);
        },
        Err(e) => {
            let err = Error::usage(format!("{:?}", e.kind()));
            debug!(error = %err, "rejected arguments");
            write!(out, "{}", usage(&program_name(args)))?;
            return Ok(exit_code(&err));
        },
    };

    let config = cli.config();
    let reader = SmcKeyReader::with_config(locator, config);
    match reader.read_key(&cli.key, &cli.length) {
        Ok(reading) => {
            print_reading(&reading, config.format, out)?;
            debug!(stage = %ReadStage::Rendered);
            debug!(stage = %ReadStage::Done);
            Ok(EXIT_SUCCESS)
        },
        Err(e) => {
            writeln!(out, "ERROR: {}", e)?;
            Ok(exit_code(&e))
        },
    }
}

fn print_reading<W: Write>(reading: &KeyReading, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in reading.to_lines() {
                writeln!(out, "{}", line)?;
            }
        },
        OutputFormat::Json => writeln!(out, "{}", reading.to_json()?)?,
    }
    Ok(())
}
