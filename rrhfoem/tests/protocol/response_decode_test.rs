#[path = "../common/mod.rs"]
mod common;

use common::fixtures;

use rrhfoem::protocol::responses::{
    decode_block_data, decode_iso14443a_uid, decode_iso15693_inventory, decode_mifare_block,
    decode_reader_info,
};
use rrhfoem::protocol::ResponseFrame;
use rrhfoem::Error;

#[test]
fn reader_info_model_and_serial() {
    let frame = ResponseFrame::new(fixtures::reader_info_frame("RRHFOEM04", &[0x12, 0x34, 0x56]))
        .unwrap();
    let info = decode_reader_info(&frame).unwrap();
    assert_eq!(info.model, "RRHFOEM04");
    assert_eq!(info.serial, "123456");
}

#[test]
fn inventory_uids_come_back_canonical() {
    let uid = fixtures::sample_iso15693_uid();
    let frame =
        ResponseFrame::new(fixtures::iso15693_inventory_frame(&[uid.clone()])).unwrap();

    let uids = decode_iso15693_inventory(&frame).unwrap();
    assert_eq!(uids, vec![uid]);
}

#[test]
fn inventory_empty() {
    let frame = ResponseFrame::new(fixtures::iso15693_inventory_frame(&[])).unwrap();
    assert!(decode_iso15693_inventory(&frame).unwrap().is_empty());
}

#[test]
fn block_data_concatenates_blocks_in_order() {
    let frame = ResponseFrame::new(fixtures::block_data_frame(&[
        b"abcd".as_slice(),
        b"efgh".as_slice(),
        b"ijkl".as_slice(),
    ]))
    .unwrap();
    let data = decode_block_data(&frame, 4, 3).unwrap();
    assert_eq!(data, b"abcdefghijkl");
}

#[test]
fn iso14443a_uid_lengths() {
    for bytes in [&[1u8, 2, 3, 4][..], &[1, 2, 3, 4, 5, 6, 7][..]] {
        let uid = rrhfoem::TagUid::from_bytes(bytes).unwrap();
        let frame = ResponseFrame::new(fixtures::iso14443a_inventory_frame(&uid)).unwrap();
        assert_eq!(decode_iso14443a_uid(&frame).unwrap(), uid);
    }
}

#[test]
fn mifare_block_roundtrip() {
    let data = *b"sixteen byte blk";
    let frame = ResponseFrame::new(fixtures::mifare_block_frame(&data)).unwrap();
    assert_eq!(decode_mifare_block(&frame).unwrap().as_bytes(), &data);
}

#[test]
fn truncated_payloads_are_invalid_length() {
    // Count byte promises more UIDs than the frame holds.
    let mut raw = vec![0u8; rrhfoem::constants::FRAME_LEN];
    raw[rrhfoem::constants::PAYLOAD_OFFSET] = 0xFF;
    let frame = ResponseFrame::new(raw).unwrap();
    assert!(matches!(
        decode_iso15693_inventory(&frame),
        Err(Error::InvalidLength { .. })
    ));
}
