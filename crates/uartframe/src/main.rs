mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, Verbosity};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "uartframe",
    version,
    about = "Read one length-prefixed JSON frame from a UART device"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Diagnostic verbosity (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: Verbosity,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_read_subcommand_with_defaults() {
        let cli = Cli::try_parse_from(["uartframe", "read"]).expect("read args should parse");

        match cli.command {
            Command::Read(args) => {
                assert_eq!(args.device, std::path::PathBuf::from("/dev/uart"));
                assert_eq!(args.baud, 144_000);
                assert_eq!(args.max_payload, None);
            }
            other => panic!("expected read command, got {other:?}"),
        }
    }

    #[test]
    fn parses_read_overrides() {
        let cli = Cli::try_parse_from([
            "uartframe",
            "read",
            "--device",
            "/dev/ttyUSB1",
            "--baud",
            "115200",
            "--max-payload",
            "4096",
        ])
        .expect("read args should parse");

        match cli.command {
            Command::Read(args) => {
                assert_eq!(args.device, std::path::PathBuf::from("/dev/ttyUSB1"));
                assert_eq!(args.baud, 115_200);
                assert_eq!(args.max_payload, Some(4096));
            }
            other => panic!("expected read command, got {other:?}"),
        }
    }

    #[test]
    fn parses_decode_from_stdin() {
        let cli = Cli::try_parse_from(["uartframe", "decode", "--format", "raw"])
            .expect("decode args should parse");

        assert!(matches!(cli.command, Command::Decode(args) if args.file.is_none()));
    }

    #[test]
    fn parses_quiet_verbosity() {
        let cli = Cli::try_parse_from(["uartframe", "read", "--log-level", "quiet"])
            .expect("verbosity should parse");
        assert_eq!(cli.log_level, Verbosity::Quiet);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = Cli::try_parse_from(["uartframe", "decode", "--format", "table"])
            .expect_err("unknown format should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
