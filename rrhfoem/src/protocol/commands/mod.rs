// rrhfoem-rs/rrhfoem/src/protocol/commands/mod.rs

pub mod iso14443a;
pub mod iso15693;
pub mod system;

use crate::types::{Addressing, BlockData, KeyType, MifareKey, SlotMode, TagUid};

/// High-level Command enum. New commands should be added here and their
/// per-family encoder placed in `protocol::commands::<family>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    /// Query model and serial number.
    ReaderInfo,
    /// Single beep with the reader's buzzer.
    BuzzerBeep,
    /// Turn the buzzer on.
    BuzzerOn,
    /// Turn the buzzer off.
    BuzzerOff,
    /// ISO15693 inventory scan.
    Iso15693Inventory {
        /// Slotting mode (single-slot or 16-slot anti-collision).
        slots: SlotMode,
    },
    /// ISO15693 block read; `count` of 1 selects the single-block opcode.
    Iso15693ReadBlocks {
        /// Addressing mode for the request.
        addressing: Addressing,
        /// Block size in bytes.
        block_size: u8,
        /// First block to read.
        start_block: u8,
        /// Number of consecutive blocks.
        count: u8,
    },
    /// ISO15693 single-block write. `data` must already be padded to
    /// `block_size` bytes.
    Iso15693WriteBlock {
        /// Addressing mode for the request.
        addressing: Addressing,
        /// Block size in bytes.
        block_size: u8,
        /// Block to write.
        block: u8,
        /// Exactly `block_size` bytes of block data.
        data: Vec<u8>,
    },
    /// ISO15693 AFI write.
    Iso15693WriteAfi {
        /// Addressing mode for the request.
        addressing: Addressing,
        /// Application Family Identifier byte.
        afi: u8,
    },
    /// ISO14443A inventory (REQA + anti-collision).
    Iso14443aInventory,
    /// ISO14443A card selection.
    Iso14443aSelect {
        /// UID of the card to select.
        uid: TagUid,
    },
    /// Mifare Classic three-pass authentication.
    MifareAuthenticate {
        /// UID of the selected card.
        uid: TagUid,
        /// Block to authenticate.
        block: u8,
        /// Key slot (A or B).
        key_type: KeyType,
        /// Six-byte sector key.
        key: MifareKey,
    },
    /// Mifare Classic block read (requires a live authentication).
    MifareRead {
        /// Block to read.
        block: u8,
    },
    /// Mifare Classic block write (requires a live authentication).
    MifareWrite {
        /// Block to write.
        block: u8,
        /// Sixteen bytes of block data.
        data: BlockData,
    },
}

impl Command {
    /// Encode the command payload: a leading length byte (counting itself)
    /// followed by family byte, opcode and parameters. The length byte is
    /// always computed here, never maintained by callers.
    pub fn encode(&self) -> Vec<u8> {
        let body = match self {
            Self::ReaderInfo => system::encode_reader_info(),
            Self::BuzzerBeep => system::encode_buzzer_beep(),
            Self::BuzzerOn => system::encode_buzzer_on(),
            Self::BuzzerOff => system::encode_buzzer_off(),
            Self::Iso15693Inventory { slots } => iso15693::encode_inventory(*slots),
            Self::Iso15693ReadBlocks {
                addressing,
                block_size,
                start_block,
                count,
            } => iso15693::encode_read_blocks(addressing, *block_size, *start_block, *count),
            Self::Iso15693WriteBlock {
                addressing,
                block_size,
                block,
                data,
            } => iso15693::encode_write_block(addressing, *block_size, *block, data),
            Self::Iso15693WriteAfi { addressing, afi } => {
                iso15693::encode_write_afi(addressing, *afi)
            }
            Self::Iso14443aInventory => iso14443a::encode_inventory(),
            Self::Iso14443aSelect { uid } => iso14443a::encode_select(uid),
            Self::MifareAuthenticate {
                uid,
                block,
                key_type,
                key,
            } => iso14443a::encode_mifare_authenticate(uid, *block, *key_type, key),
            Self::MifareRead { block } => iso14443a::encode_mifare_read(*block),
            Self::MifareWrite { block, data } => iso14443a::encode_mifare_write(*block, data),
        };

        let mut payload = Vec::with_capacity(body.len() + 1);
        payload.push((body.len() + 1) as u8);
        payload.extend_from_slice(&body);
        payload
    }
}
