use std::io::{ErrorKind, Read};

use bytes::{Bytes, BytesMut};
use tracing::debug;

use crate::codec::{decode_header, FrameConfig, HEADER_SIZE};
use crate::error::{FrameError, Result};

/// Reads one length-prefixed frame from any `Read` stream.
///
/// Serial devices deliver data in arbitrary chunks; both the header and the
/// body loop over short reads until the expected byte count has arrived.
/// The stream ending early is a terminal condition for the read cycle, never
/// a retry.
pub struct FrameReader<T> {
    inner: T,
    config: FrameConfig,
}

impl<T: Read> FrameReader<T> {
    /// Create a frame reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a frame reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self { inner, config }
    }

    /// Read the next frame's payload bytes (blocking).
    ///
    /// Reads exactly 4 header bytes, decodes the declared payload length,
    /// then reads exactly that many payload bytes. Returns a typed error if
    /// the stream ends inside the header or the body.
    pub fn read_frame(&mut self) -> Result<Bytes> {
        let mut header = [0u8; HEADER_SIZE];
        let got = self.read_into(&mut header)?;
        if got < HEADER_SIZE {
            return Err(FrameError::TruncatedHeader { got });
        }

        let declared = decode_header(header, self.config.max_payload_size)?;
        debug!(declared, "incoming frame length");

        let mut payload = BytesMut::zeroed(declared);
        let got = self.read_into(&mut payload)?;
        if got < declared {
            return Err(FrameError::TruncatedPayload {
                expected: declared,
                got,
            });
        }
        debug!(received = got, "frame assembled");

        Ok(payload.freeze())
    }

    /// Read the next frame and decode its payload as a JSON document.
    ///
    /// Returns the parsed value together with the raw payload bytes, so
    /// callers that echo the wire payload need no second read.
    pub fn read_document(&mut self) -> Result<(serde_json::Value, Bytes)> {
        let payload = self.read_frame()?;
        let value = serde_json::from_slice(&payload)?;
        Ok((value, payload))
    }

    /// Fill `buf` from the stream, looping over short reads.
    ///
    /// Returns the number of bytes actually read, which is less than
    /// `buf.len()` only if the stream ended. Interrupted reads are retried;
    /// other I/O errors propagate.
    fn read_into(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut offset = 0;
        while offset < buf.len() {
            let read = match self.inner.read(&mut buf[offset..]) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };
            if read == 0 {
                break;
            }
            offset += read;
            debug!(read, total = offset, "read chunk");
        }
        Ok(offset)
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}
