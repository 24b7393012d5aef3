use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod read;
pub mod version;

/// Device path used when none is given.
pub const DEFAULT_DEVICE: &str = "/dev/uart";
/// Non-standard rate the sending hardware is strapped to.
pub const DEFAULT_BAUD: u32 = 144_000;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read one framed JSON document from a serial device and print it.
    Read(ReadArgs),
    /// Decode one framed JSON document from a file or stdin.
    Decode(DecodeArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Read(args) => read::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Serial device to read from.
    #[arg(long, env = "UARTFRAME_DEVICE", default_value = DEFAULT_DEVICE)]
    pub device: PathBuf,
    /// Baud rate, applied as an exact numeric rate.
    #[arg(long, env = "UARTFRAME_BAUD", default_value_t = DEFAULT_BAUD)]
    pub baud: u32,
    /// Maximum accepted payload length in bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_payload: Option<usize>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// File containing one framed document; stdin when omitted.
    pub file: Option<PathBuf>,
    /// Maximum accepted payload length in bytes.
    #[arg(long, value_name = "BYTES")]
    pub max_payload: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
