// rrhfoem-rs/rrhfoem/src/protocol/frame.rs

use crate::constants::{FRAME_LEN, MAX_PAYLOAD_LEN, STATUS_OFFSET};
use crate::protocol::checksum::crc16_bytes;
use crate::protocol::parser;
use crate::{Error, Result};

/// Command frame helper.
///
/// Format: `[0x00] [payload(n)] [CRC hi] [CRC lo] [zero padding]`, always
/// exactly [`FRAME_LEN`] bytes. The leading zero byte doubles as the HID
/// report id.
pub struct Frame;

impl Frame {
    /// Encode a command payload into a full wire frame.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let mut out = Vec::with_capacity(FRAME_LEN);
        out.push(0x00);
        out.extend_from_slice(payload);
        out.extend_from_slice(&crc16_bytes(payload));
        out.resize(FRAME_LEN, 0x00);
        Ok(out)
    }
}

/// Raw response frame returned by the transport.
///
/// Interpreted positionally: the two status bytes sit at offset 3-4 and
/// `(0x00, 0x00)` is the only success value. Payload layout beyond that is
/// a per-command property handled by [`crate::protocol::responses`].
#[derive(Debug, Clone)]
pub struct ResponseFrame(Vec<u8>);

impl ResponseFrame {
    /// Wrap raw transport bytes. The frame must at least cover the status
    /// bytes; shorter reads indicate a truncated report.
    pub fn new(raw: Vec<u8>) -> Result<Self> {
        if raw.len() < STATUS_OFFSET + 2 {
            return Err(Error::MalformedResponse(format!(
                "response frame too short: {} bytes",
                raw.len()
            )));
        }
        Ok(Self(raw))
    }

    /// The two status bytes at offset 3-4.
    pub fn status(&self) -> (u8, u8) {
        (self.0[STATUS_OFFSET], self.0[STATUS_OFFSET + 1])
    }

    /// True when the reader reported success (`0x00 0x00`).
    pub fn is_success(&self) -> bool {
        self.status() == (0x00, 0x00)
    }

    /// Map a non-success status to [`Error::CommandStatus`].
    pub fn require_success(&self) -> Result<()> {
        match self.status() {
            (0x00, 0x00) => Ok(()),
            (status1, status2) => Err(Error::CommandStatus { status1, status2 }),
        }
    }

    /// Bounds-checked single byte access.
    pub fn byte_at(&self, idx: usize) -> Result<u8> {
        parser::byte_at(&self.0, idx)
    }

    /// Bounds-checked slice access.
    pub fn slice_at(&self, idx: usize, len: usize) -> Result<&[u8]> {
        parser::slice_at(&self.0, idx, len)
    }

    /// The raw frame bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
