//! Length-prefixed JSON framing for serial byte streams.
//!
//! This is the core value-add layer of uartframe. Each message on the wire
//! is:
//! - A 4-byte little-endian payload length
//! - That many bytes of JSON document text (no terminator)
//!
//! The reader loops over the short reads a streaming device produces, so
//! callers always get either a complete payload or a typed framing error.

pub mod codec;
pub mod error;
pub mod reader;

pub use codec::{decode_header, encode_frame, FrameConfig, DEFAULT_MAX_PAYLOAD, HEADER_SIZE};
pub use error::{FrameError, Result};
pub use reader::FrameReader;
