#[path = "../common/mod.rs"]
mod common;

use common::fixtures;

use rrhfoem::test_support::reader_with_mock;
use rrhfoem::{Addressing, Error};

#[test]
fn read_single_block_returns_canonical_bytes() {
    let (mut reader, mock) = reader_with_mock();
    mock.push_response(fixtures::block_data_frame(&[b"data".as_slice()]));

    let data = reader
        .iso15693_read_single_block(Addressing::NonAddressed, 5, 4)
        .unwrap()
        .unwrap();
    assert_eq!(data, b"data");
    assert_eq!(mock.sent_count(), 1);
}

#[test]
fn read_refused_by_tag_is_absent() {
    let (mut reader, mock) = reader_with_mock();
    mock.push_response(fixtures::err_frame(0x01, 0x0F));
    let out = reader
        .iso15693_read_single_block(Addressing::Selected, 5, 4)
        .unwrap();
    assert!(out.is_none());
}

// Writing a value then reading the same address must reproduce the written
// bytes exactly (zero-padded to the block size): the little-endian wire
// order cancels out across the two directions.
#[test]
fn write_then_read_roundtrip() {
    let (mut reader, mock) = reader_with_mock();
    mock.push_response(fixtures::ok_frame()); // write ack

    reader
        .iso15693_write_single_block(Addressing::NonAddressed, 9, b"hi", 4)
        .unwrap();

    // The device stores the wire bytes verbatim; echo them back for the
    // read. Command frame: [0x00][len][family][opcode][flags][size][block]
    // then data; response frame carries block data at offset 6.
    let written = mock.sent()[0].clone();
    let wire_data = written[7..11].to_vec();
    let mut read_frame = vec![0u8; rrhfoem::constants::FRAME_LEN];
    read_frame[6..10].copy_from_slice(&wire_data);
    mock.push_response(read_frame);

    let data = reader
        .iso15693_read_single_block(Addressing::NonAddressed, 9, 4)
        .unwrap()
        .unwrap();
    assert_eq!(data, vec![b'h', b'i', 0x00, 0x00]);
}

#[test]
fn multi_block_read_concatenates_in_order() {
    let (mut reader, mock) = reader_with_mock();
    mock.push_response(fixtures::block_data_frame(&[
        b"abcd".as_slice(),
        b"efgh".as_slice(),
    ]));

    let data = reader
        .iso15693_read_multiple_blocks(Addressing::NonAddressed, 3, 2, 4)
        .unwrap()
        .unwrap();
    assert_eq!(data, b"abcdefgh");
}

// Boundary rejection happens before any transport traffic.
#[test]
fn out_of_range_span_rejected_without_io() {
    let (mut reader, mock) = reader_with_mock();

    let err = reader
        .iso15693_read_multiple_blocks(Addressing::NonAddressed, 250, 10, 4)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
    assert_eq!(mock.sent_count(), 0);

    // 10 bytes at block size 4 span 3 blocks: 254..=256 is out of range.
    let err = reader
        .iso15693_write_multiple_blocks(Addressing::NonAddressed, 254, &[0u8; 10], 4)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidParameter(_)));
    assert_eq!(mock.sent_count(), 0);
}

#[test]
fn oversized_single_write_rejected_without_io() {
    let (mut reader, mock) = reader_with_mock();
    let err = reader
        .iso15693_write_single_block(Addressing::NonAddressed, 0, &[0u8; 5], 4)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidLength { .. }));
    assert_eq!(mock.sent_count(), 0);
}

#[test]
fn multi_block_write_sends_one_frame_per_block() {
    let (mut reader, mock) = reader_with_mock();
    for _ in 0..3 {
        mock.push_response(fixtures::ok_frame());
    }

    reader
        .iso15693_write_multiple_blocks(Addressing::NonAddressed, 10, b"0123456789", 4)
        .unwrap();

    let sent = mock.sent();
    assert_eq!(sent.len(), 3);
    // Sequential block numbers; last chunk zero-padded, little-endian on
    // the wire.
    assert_eq!(sent[0][6], 10);
    assert_eq!(sent[1][6], 11);
    assert_eq!(sent[2][6], 12);
    assert_eq!(&sent[2][7..11], &[0x00, 0x00, b'9', b'8']);
}

// The first failing block aborts the run and is named in the error;
// already-written blocks are not retried or rolled back.
#[test]
fn multi_block_write_failure_names_block() {
    let (mut reader, mock) = reader_with_mock();
    mock.push_response(fixtures::ok_frame());
    mock.push_response(fixtures::err_frame(0x01, 0x02));

    let err = reader
        .iso15693_write_multiple_blocks(Addressing::NonAddressed, 20, &[0u8; 12], 4)
        .unwrap_err();

    match err {
        Error::BlockStatus {
            block: 21,
            status1: 0x01,
            status2: 0x02,
        } => {}
        other => panic!("expected BlockStatus for block 21, got {:?}", other),
    }
    // Two frames went out: block 20 (ok) and block 21 (refused). Block 22
    // was never attempted.
    assert_eq!(mock.sent_count(), 2);
}

#[test]
fn write_without_response_raises() {
    let (mut reader, _mock) = reader_with_mock();
    let err = reader
        .iso15693_write_single_block(Addressing::NonAddressed, 0, b"data", 4)
        .unwrap_err();
    assert!(matches!(err, Error::NoResponse));
}

#[test]
fn write_afi_ok_and_refused() {
    let (mut reader, mock) = reader_with_mock();
    mock.push_response(fixtures::ok_frame());
    reader
        .iso15693_write_afi(Addressing::NonAddressed, 0xC2)
        .unwrap();

    mock.push_response(fixtures::err_frame(0x0A, 0x00));
    let err = reader
        .iso15693_write_afi(Addressing::NonAddressed, 0xC2)
        .unwrap_err();
    assert!(matches!(err, Error::CommandStatus { .. }));
}
