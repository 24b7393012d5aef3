//! Serial (UART) device access layer.
//!
//! Opens a serial device read-only, without acquiring it as a controlling
//! terminal, and applies an exact numeric baud rate through the Linux
//! extended termios interface (`termios2` + `BOTHER`). Standard symbolic
//! rates only cover a fixed table; hardware negotiated at e.g. 144000 baud
//! needs this path.
//!
//! This is the lowest layer of uartframe. Everything else consumes the
//! [`SerialPort`] type provided here through its `std::io::Read` impl.

pub mod error;
pub mod serial;

pub use error::{PortError, Result};
pub use serial::SerialPort;

#[cfg(target_os = "linux")]
pub use serial::apply_custom_baud;
