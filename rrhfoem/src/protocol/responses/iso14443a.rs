// rrhfoem-rs/rrhfoem/src/protocol/responses/iso14443a.rs

use crate::constants::{MIFARE_BLOCK_SIZE, PAYLOAD_OFFSET};
use crate::protocol::ResponseFrame;
use crate::types::{BlockData, TagUid};
use crate::Result;

/// Decode an ISO14443A inventory response: a UID length byte at offset 5
/// followed by that many UID bytes, in canonical order (no byte swap).
pub fn decode_iso14443a_uid(frame: &ResponseFrame) -> Result<TagUid> {
    let len = frame.byte_at(PAYLOAD_OFFSET)? as usize;
    let uid = frame.slice_at(PAYLOAD_OFFSET + 1, len)?;
    TagUid::from_bytes(uid)
}

/// Decode a Mifare Classic block read: sixteen bytes at offset 5.
pub fn decode_mifare_block(frame: &ResponseFrame) -> Result<BlockData> {
    let raw = frame.slice_at(PAYLOAD_OFFSET, MIFARE_BLOCK_SIZE)?;
    let mut block = [0u8; MIFARE_BLOCK_SIZE];
    block.copy_from_slice(raw);
    Ok(BlockData::from_bytes(block))
}
