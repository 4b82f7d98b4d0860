// rrhfoem-rs/rrhfoem/src/constants.rs
//! Common protocol constants used across the crate

/// USB vendor id of the RRHFOEM04 reader.
pub const VENDOR_ID: u16 = 0x1781;
/// USB product id of the RRHFOEM04 reader.
pub const PRODUCT_ID: u16 = 0x0C10;

/// Fixed wire frame width in bytes (one HID report).
pub const FRAME_LEN: usize = 64;

/// Largest command payload that fits a frame: one leading zero byte and the
/// two checksum bytes are always present.
pub const MAX_PAYLOAD_LEN: usize = FRAME_LEN - 3;

/// Offset of the two status bytes in a response frame.
pub const STATUS_OFFSET: usize = 3;
/// Payload offset for count-prefixed and fixed-layout responses.
pub const PAYLOAD_OFFSET: usize = 5;
/// Payload offset for ISO15693 block-data responses.
pub const BLOCK_DATA_OFFSET: usize = 6;

/// Command family byte for reader-local (system) commands.
pub const FAMILY_SYSTEM: u8 = 0xF0;
/// Command family byte for ISO15693 commands.
pub const FAMILY_ISO15693: u8 = 0x10;
/// Command family byte for ISO14443A / Mifare Classic commands.
pub const FAMILY_ISO14443A: u8 = 0x11;

/// System opcode: query model / serial.
pub const SYS_READER_INFO: u8 = 0x00;
/// System opcode: single beep.
pub const SYS_BUZZER_BEEP: u8 = 0x01;
/// System opcode: buzzer on.
pub const SYS_BUZZER_ON: u8 = 0x02;
/// System opcode: buzzer off.
pub const SYS_BUZZER_OFF: u8 = 0x03;

/// ISO15693 opcode: inventory (anti-collision scan).
pub const ISO15693_INVENTORY: u8 = 0x01;
/// ISO15693 opcode: read single block.
pub const ISO15693_READ_SINGLE_BLOCK: u8 = 0x20;
/// ISO15693 opcode: write single block.
pub const ISO15693_WRITE_SINGLE_BLOCK: u8 = 0x21;
/// ISO15693 opcode: read multiple blocks.
pub const ISO15693_READ_MULTIPLE_BLOCKS: u8 = 0x23;
/// ISO15693 opcode: write AFI byte.
pub const ISO15693_WRITE_AFI: u8 = 0x27;

/// ISO15693 request flags: non-addressed (any tag in field).
pub const FLAGS_NON_ADDRESSED: u8 = 0x02;
/// ISO15693 request flags: select flag (previously selected tag).
pub const FLAGS_SELECTED: u8 = 0x12;
/// ISO15693 request flags: addressed (UID follows in the request).
pub const FLAGS_ADDRESSED: u8 = 0x22;
/// ISO15693 inventory flags: single-slot scan.
pub const FLAGS_INVENTORY_SINGLE_SLOT: u8 = 0x26;
/// ISO15693 inventory flags: 16-slot anti-collision scan.
pub const FLAGS_INVENTORY_16_SLOT: u8 = 0x06;

/// ISO14443A opcode: inventory (REQA + anti-collision).
pub const ISO14443A_INVENTORY: u8 = 0x01;
/// ISO14443A opcode: select a card by UID.
pub const ISO14443A_SELECT: u8 = 0x02;
/// ISO14443A opcode: Mifare Classic three-pass authentication.
pub const MIFARE_AUTHENTICATE: u8 = 0x07;
/// ISO14443A opcode: Mifare Classic block read.
pub const MIFARE_READ: u8 = 0x08;
/// ISO14443A opcode: Mifare Classic block write.
pub const MIFARE_WRITE: u8 = 0x09;

/// Mifare Classic block size in bytes.
pub const MIFARE_BLOCK_SIZE: usize = 16;
/// Mifare Classic key length in bytes.
pub const MIFARE_KEY_LEN: usize = 6;
/// Default ISO15693 block size in bytes.
pub const DEFAULT_BLOCK_SIZE: u8 = 4;
/// ISO15693 UID length in bytes.
pub const ISO15693_UID_LEN: usize = 8;

/// Reader-info payload: 16 bytes at [`PAYLOAD_OFFSET`]; ASCII model string
/// terminated by `-`, serial in the trailing 3 bytes.
pub const READER_INFO_LEN: usize = 16;
/// Delimiter byte between model string and the rest of the info payload.
pub const READER_INFO_DELIMITER: u8 = 0x2D;
/// Serial number length in bytes at the tail of the info payload.
pub const READER_INFO_SERIAL_LEN: usize = 3;
