// rrhfoem-rs/rrhfoem/src/protocol/commands/iso14443a.rs

use crate::constants::{
    FAMILY_ISO14443A, ISO14443A_INVENTORY, ISO14443A_SELECT, MIFARE_AUTHENTICATE, MIFARE_READ,
    MIFARE_WRITE,
};
use crate::types::{BlockData, KeyType, MifareKey, TagUid};

/// Encode an ISO14443A inventory body.
pub fn encode_inventory() -> Vec<u8> {
    vec![FAMILY_ISO14443A, ISO14443A_INVENTORY]
}

/// Encode a card selection: `[family][opcode][uid len][uid]`. ISO14443A
/// UIDs are sent in canonical byte order.
pub fn encode_select(uid: &TagUid) -> Vec<u8> {
    let mut body = vec![FAMILY_ISO14443A, ISO14443A_SELECT, uid.as_bytes().len() as u8];
    body.extend_from_slice(uid.as_bytes());
    body
}

/// Encode a Mifare Classic authentication:
/// `[family][opcode][uid][block][key type][key]`.
pub fn encode_mifare_authenticate(
    uid: &TagUid,
    block: u8,
    key_type: KeyType,
    key: &MifareKey,
) -> Vec<u8> {
    let mut body = vec![FAMILY_ISO14443A, MIFARE_AUTHENTICATE];
    body.extend_from_slice(uid.as_bytes());
    body.push(block);
    body.push(key_type.code());
    body.extend_from_slice(key.as_bytes());
    body
}

/// Encode a Mifare Classic block read.
pub fn encode_mifare_read(block: u8) -> Vec<u8> {
    vec![FAMILY_ISO14443A, MIFARE_READ, block]
}

/// Encode a Mifare Classic block write.
pub fn encode_mifare_write(block: u8, data: &BlockData) -> Vec<u8> {
    let mut body = vec![FAMILY_ISO14443A, MIFARE_WRITE, block];
    body.extend_from_slice(data.as_bytes());
    body
}
