use std::fmt;
use std::io;

use uartframe_frame::FrameError;
use uartframe_port::PortError;

pub const SUCCESS: i32 = 0;
/// Device open failure exits with 1, the contract inherited from the
/// original tool.
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    CliError::new(FAILURE, format!("{context}: {err}"))
}

pub fn port_error(context: &str, err: PortError) -> CliError {
    // Any open or configure failure is fatal with exit code 1.
    CliError::new(FAILURE, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Io(source) => io_error(context, source),
        FrameError::TruncatedHeader { .. }
        | FrameError::TruncatedPayload { .. }
        | FrameError::PayloadTooLarge { .. }
        | FrameError::Parse(_) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_failure_maps_to_data_invalid() {
        let parse = serde_json::from_slice::<serde_json::Value>(b"").unwrap_err();
        let err = frame_error("decode failed", FrameError::Parse(parse));
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn truncation_maps_to_data_invalid() {
        let err = frame_error(
            "read failed",
            FrameError::TruncatedPayload {
                expected: 13,
                got: 6,
            },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.contains("6 of 13"));
    }

    #[test]
    fn frame_io_maps_to_failure() {
        let err = frame_error(
            "read failed",
            FrameError::Io(io::Error::from(io::ErrorKind::BrokenPipe)),
        );
        assert_eq!(err.code, FAILURE);
    }

    #[test]
    fn open_failure_maps_to_exit_one() {
        let err = port_error(
            "open failed",
            PortError::Open {
                path: "/dev/uart".into(),
                source: io::Error::from(io::ErrorKind::NotFound),
            },
        );
        assert_eq!(err.code, 1);
    }
}
