use std::path::PathBuf;

/// Errors that can occur while opening or configuring a serial device.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// Failed to open the device path.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read or apply the line configuration (TCGETS2/TCSETS2).
    #[error("failed to configure {path}: {source}")]
    Configure {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Custom baud rates require the Linux extended termios path.
    #[error("custom baud rates are not supported on this platform")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, PortError>;
