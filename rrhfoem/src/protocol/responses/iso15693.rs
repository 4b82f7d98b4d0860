// rrhfoem-rs/rrhfoem/src/protocol/responses/iso15693.rs

use crate::constants::{BLOCK_DATA_OFFSET, ISO15693_UID_LEN, PAYLOAD_OFFSET};
use crate::protocol::ResponseFrame;
use crate::types::TagUid;
use crate::utils::reversed;
use crate::Result;

/// Decode an inventory response: a count byte at offset 5 followed by
/// `count` 8-byte little-endian UIDs. UIDs are reversed into canonical
/// order.
pub fn decode_iso15693_inventory(frame: &ResponseFrame) -> Result<Vec<TagUid>> {
    let count = frame.byte_at(PAYLOAD_OFFSET)? as usize;

    let mut uids = Vec::with_capacity(count);
    for i in 0..count {
        let offset = PAYLOAD_OFFSET + 1 + i * ISO15693_UID_LEN;
        let wire = frame.slice_at(offset, ISO15693_UID_LEN)?;
        uids.push(TagUid::from_bytes(&reversed(wire))?);
    }
    Ok(uids)
}

/// Decode block data: `count` blocks of `block_size` bytes starting at
/// offset 6, each block little-endian on the wire and reversed
/// individually into canonical order.
pub fn decode_block_data(frame: &ResponseFrame, block_size: u8, count: u8) -> Result<Vec<u8>> {
    let size = block_size as usize;
    let mut data = Vec::with_capacity(size * count as usize);
    for i in 0..count as usize {
        let wire = frame.slice_at(BLOCK_DATA_OFFSET + i * size, size)?;
        data.extend_from_slice(&reversed(wire));
    }
    Ok(data)
}
