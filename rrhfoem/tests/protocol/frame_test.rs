use proptest::prelude::*;

use rrhfoem::constants::{FRAME_LEN, MAX_PAYLOAD_LEN};
use rrhfoem::protocol::{crc16_bytes, Frame, ResponseFrame};
use rrhfoem::Error;

#[test]
fn reader_info_frame_exact_bytes() {
    let frame = Frame::encode(&[0x03, 0xF0, 0x00]).unwrap();
    let mut expected = vec![0x00, 0x03, 0xF0, 0x00, 0x89, 0x2F];
    expected.resize(FRAME_LEN, 0x00);
    assert_eq!(frame, expected);
}

#[test]
fn oversized_payload_rejected() {
    let payload = vec![0u8; MAX_PAYLOAD_LEN + 1];
    assert!(matches!(
        Frame::encode(&payload),
        Err(Error::InvalidLength { .. })
    ));
}

proptest! {
    // Frame shape invariant: fixed width, leading zero, checksum right
    // after the payload, zero padding to the end.
    #[test]
    fn frame_shape_invariant(payload in prop::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_LEN)) {
        let frame = Frame::encode(&payload).unwrap();
        prop_assert_eq!(frame.len(), FRAME_LEN);
        prop_assert_eq!(frame[0], 0x00);
        prop_assert_eq!(&frame[1..1 + payload.len()], &payload[..]);

        let crc = crc16_bytes(&payload);
        prop_assert_eq!(&frame[1 + payload.len()..3 + payload.len()], &crc[..]);
        prop_assert!(frame[3 + payload.len()..].iter().all(|&b| b == 0x00));
    }
}

#[test]
fn response_frame_status_position() {
    let mut raw = vec![0u8; FRAME_LEN];
    raw[3] = 0xAA;
    raw[4] = 0xBB;
    let resp = ResponseFrame::new(raw).unwrap();
    assert_eq!(resp.status(), (0xAA, 0xBB));
    assert!(!resp.is_success());
}

#[test]
fn truncated_response_rejected() {
    assert!(matches!(
        ResponseFrame::new(vec![0x00, 0x01]),
        Err(Error::MalformedResponse(_))
    ));
}
