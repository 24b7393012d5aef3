/// Errors that can occur while reading or decoding a frame.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The stream ended before a full 4-byte length header arrived.
    #[error("stream ended inside the length header ({got} of 4 bytes)")]
    TruncatedHeader { got: usize },

    /// The stream ended before the declared number of payload bytes arrived.
    #[error("stream ended inside the payload ({got} of {expected} bytes)")]
    TruncatedPayload { expected: usize, got: usize },

    /// The declared payload length exceeds the configured maximum.
    #[error("declared payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading from the stream.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a valid JSON document.
    #[error("payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
