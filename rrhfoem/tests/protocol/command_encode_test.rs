use rrhfoem::{Addressing, BlockData, Command, KeyType, MifareKey, SlotMode, TagUid};

fn iso15693_uid() -> TagUid {
    TagUid::from_hex("e0040100123abbcc").unwrap()
}

#[test]
fn system_commands() {
    assert_eq!(Command::ReaderInfo.encode(), vec![0x03, 0xF0, 0x00]);
    assert_eq!(Command::BuzzerBeep.encode(), vec![0x03, 0xF0, 0x01]);
    assert_eq!(Command::BuzzerOn.encode(), vec![0x03, 0xF0, 0x02]);
    assert_eq!(Command::BuzzerOff.encode(), vec![0x03, 0xF0, 0x03]);
}

#[test]
fn inventory_commands() {
    assert_eq!(
        Command::Iso15693Inventory {
            slots: SlotMode::Single
        }
        .encode(),
        vec![0x04, 0x10, 0x01, 0x26]
    );
    assert_eq!(
        Command::Iso15693Inventory {
            slots: SlotMode::Slot16
        }
        .encode(),
        vec![0x04, 0x10, 0x01, 0x06]
    );
    assert_eq!(Command::Iso14443aInventory.encode(), vec![0x03, 0x11, 0x01]);
}

#[test]
fn read_single_block_non_addressed() {
    let cmd = Command::Iso15693ReadBlocks {
        addressing: Addressing::NonAddressed,
        block_size: 4,
        start_block: 5,
        count: 1,
    };
    assert_eq!(cmd.encode(), vec![0x06, 0x10, 0x20, 0x02, 0x04, 0x05]);
}

#[test]
fn read_multiple_blocks_appends_count() {
    let cmd = Command::Iso15693ReadBlocks {
        addressing: Addressing::NonAddressed,
        block_size: 4,
        start_block: 10,
        count: 3,
    };
    assert_eq!(cmd.encode(), vec![0x07, 0x10, 0x23, 0x02, 0x04, 0x0A, 0x03]);
}

// Exactly one opcode family per addressing mode; the three encodings are
// pairwise distinct and never combine flags.
#[test]
fn addressing_modes_are_exclusive() {
    let encode = |addressing: Addressing| {
        Command::Iso15693ReadBlocks {
            addressing,
            block_size: 4,
            start_block: 0,
            count: 1,
        }
        .encode()
    };

    let plain = encode(Addressing::NonAddressed);
    let selected = encode(Addressing::Selected);
    let addressed = encode(Addressing::Addressed(iso15693_uid()));

    assert_ne!(plain, selected);
    assert_ne!(plain, addressed);
    assert_ne!(selected, addressed);

    assert_eq!(plain[3], 0x02);
    assert_eq!(selected[3], 0x12);
    assert_eq!(addressed[3], 0x22);

    // Only the addressed form carries a UID, little-endian.
    assert_eq!(plain.len(), 6);
    assert_eq!(selected.len(), 6);
    assert_eq!(addressed.len(), 14);
    assert_eq!(
        &addressed[4..12],
        &[0xCC, 0xBB, 0x3A, 0x12, 0x00, 0x01, 0x04, 0xE0]
    );
}

#[test]
fn write_single_block_length_tracks_block_size() {
    let cmd = Command::Iso15693WriteBlock {
        addressing: Addressing::NonAddressed,
        block_size: 4,
        block: 7,
        data: b"data".to_vec(),
    };
    let payload = cmd.encode();
    // Block data travels little-endian, so "data" is reversed on the wire.
    assert_eq!(
        payload,
        vec![0x0A, 0x10, 0x21, 0x02, 0x04, 0x07, 0x61, 0x74, 0x61, 0x64]
    );
    assert_eq!(payload[0] as usize, payload.len());
}

#[test]
fn write_afi_addressed() {
    let cmd = Command::Iso15693WriteAfi {
        addressing: Addressing::Addressed(iso15693_uid()),
        afi: 0xC2,
    };
    let payload = cmd.encode();
    assert_eq!(&payload[..4], &[0x0D, 0x10, 0x27, 0x22]);
    assert_eq!(payload[12], 0xC2);
    assert_eq!(payload[0] as usize, payload.len());
}

#[test]
fn select_command_is_length_prefixed() {
    let uid = TagUid::from_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
    assert_eq!(
        Command::Iso14443aSelect { uid }.encode(),
        vec![0x08, 0x11, 0x02, 0x04, 0xDE, 0xAD, 0xBE, 0xEF]
    );
}

#[test]
fn mifare_authenticate_layout() {
    let uid = TagUid::from_bytes(&[0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
    let cmd = Command::MifareAuthenticate {
        uid,
        block: 4,
        key_type: KeyType::B,
        key: MifareKey::from_bytes([0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5]),
    };
    let payload = cmd.encode();
    assert_eq!(
        payload,
        vec![
            0x0F, 0x11, 0x07, 0xDE, 0xAD, 0xBE, 0xEF, 0x04, 0x61, 0xA0, 0xA1, 0xA2, 0xA3, 0xA4,
            0xA5
        ]
    );
}

#[test]
fn mifare_read_write_layout() {
    assert_eq!(
        Command::MifareRead { block: 9 }.encode(),
        vec![0x04, 0x11, 0x08, 0x09]
    );

    let cmd = Command::MifareWrite {
        block: 1,
        data: BlockData::from_bytes([0x5A; 16]),
    };
    let payload = cmd.encode();
    assert_eq!(payload.len(), 20);
    assert_eq!(&payload[..4], &[0x14, 0x11, 0x09, 0x01]);
    assert_eq!(&payload[4..], &[0x5A; 16]);
}
