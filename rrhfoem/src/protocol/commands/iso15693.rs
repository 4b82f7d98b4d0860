// rrhfoem-rs/rrhfoem/src/protocol/commands/iso15693.rs

use crate::constants::{
    FAMILY_ISO15693, ISO15693_INVENTORY, ISO15693_READ_MULTIPLE_BLOCKS,
    ISO15693_READ_SINGLE_BLOCK, ISO15693_WRITE_AFI, ISO15693_WRITE_SINGLE_BLOCK,
};
use crate::types::{Addressing, SlotMode};
use crate::utils::reversed;

/// Encode an inventory body: `[family][opcode][slot flags]`.
pub fn encode_inventory(slots: SlotMode) -> Vec<u8> {
    vec![FAMILY_ISO15693, ISO15693_INVENTORY, slots.flags()]
}

/// Common prefix of every ISO15693 tag command:
/// `[family][opcode][flags]` plus the little-endian UID when addressed.
fn encode_header(opcode: u8, addressing: &Addressing) -> Vec<u8> {
    let mut body = vec![FAMILY_ISO15693, opcode, addressing.flags()];
    if let Addressing::Addressed(uid) = addressing {
        body.extend_from_slice(&reversed(uid.as_bytes()));
    }
    body
}

/// Encode a block read. A count of 1 selects the single-block opcode (no
/// trailing count byte); anything larger selects the multi-block opcode.
pub fn encode_read_blocks(
    addressing: &Addressing,
    block_size: u8,
    start_block: u8,
    count: u8,
) -> Vec<u8> {
    let opcode = if count <= 1 {
        ISO15693_READ_SINGLE_BLOCK
    } else {
        ISO15693_READ_MULTIPLE_BLOCKS
    };
    let mut body = encode_header(opcode, addressing);
    body.push(block_size);
    body.push(start_block);
    if count > 1 {
        body.push(count);
    }
    body
}

/// Encode a single-block write. `data` must already be exactly
/// `block_size` bytes, in canonical order; it is laid out little-endian on
/// the wire, mirroring the reversal the block-read decoder applies.
pub fn encode_write_block(
    addressing: &Addressing,
    block_size: u8,
    block: u8,
    data: &[u8],
) -> Vec<u8> {
    debug_assert_eq!(data.len(), block_size as usize);
    let mut body = encode_header(ISO15693_WRITE_SINGLE_BLOCK, addressing);
    body.push(block_size);
    body.push(block);
    body.extend_from_slice(&reversed(data));
    body
}

/// Encode an AFI write.
pub fn encode_write_afi(addressing: &Addressing, afi: u8) -> Vec<u8> {
    let mut body = encode_header(ISO15693_WRITE_AFI, addressing);
    body.push(afi);
    body
}
