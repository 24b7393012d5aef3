use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};

/// Frame header: payload length (4 bytes, little-endian, unsigned).
pub const HEADER_SIZE: usize = 4;

/// Default maximum accepted payload length: 16 MiB.
///
/// The header is untrusted input; without a bound a corrupted length field
/// could request an arbitrarily large allocation.
pub const DEFAULT_MAX_PAYLOAD: usize = 16 * 1024 * 1024;

/// Encode a payload into the wire format.
///
/// Wire format:
/// ```text
/// ┌────────────────┬──────────────────┐
/// │ Length (4B LE) │ Payload          │
/// │                │ (Length bytes)   │
/// └────────────────┴──────────────────┘
/// ```
///
/// The payload is a JSON document with no terminator on the wire.
pub fn encode_frame(payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > u32::MAX as usize {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: u32::MAX as usize,
        });
    }
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_u32_le(payload.len() as u32);
    dst.put_slice(payload);
    Ok(())
}

/// Decode a length header into the declared payload length.
pub fn decode_header(header: [u8; HEADER_SIZE], max_payload: usize) -> Result<usize> {
    let declared = u32::from_le_bytes(header) as usize;
    if declared > max_payload {
        return Err(FrameError::PayloadTooLarge {
            size: declared,
            max: max_payload,
        });
    }
    Ok(declared)
}

/// Configuration for the framed reader.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Maximum accepted payload length in bytes. Default: 16 MiB.
    pub max_payload_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
        }
    }
}
