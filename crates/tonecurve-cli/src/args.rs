//! Command line arguments.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

/// Positional argument summary printed after argument errors.
pub const USAGE: &str = "Command line arguments:\n 1. input.png\n 2. t value\n 3. g value\n 4. output.png\n";

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tonecurve")]
#[command(version, about = "Apply a threshold/gamma tone curve to an 8-bit PNG image", long_about = None)]
pub struct Cli {
    /// Input PNG image
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Threshold t: inputs below it follow the linear segment (>= 0)
    #[arg(value_name = "T", allow_negative_numbers = true)]
    pub threshold: f64,

    /// Gamma g: exponent of the power-law segment (>= 0)
    #[arg(value_name = "G", allow_negative_numbers = true)]
    pub gamma: f64,

    /// Output PNG image
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Stretch the tone curve to the full 0-255 range before applying it
    #[arg(long)]
    pub normalize: bool,

    /// Number of worker threads
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Configuration file (defaults to tonecurve.yml in the working directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse arguments without exiting the process.
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Exit code for an argument error: 0 for help/version output, 1 otherwise.
pub fn exit_code_for(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

/// Text written to stderr for an argument error: clap's message followed by
/// the usage summary.
pub fn arg_error_message(err: &clap::Error) -> String {
    format!("{}\n{}", err.render(), USAGE)
}
