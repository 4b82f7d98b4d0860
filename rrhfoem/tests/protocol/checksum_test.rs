use proptest::prelude::*;

use rrhfoem::protocol::{crc16, crc16_bytes};

#[test]
fn golden_vectors() {
    // Reader-info opcode: the checksum pair the device expects on the wire.
    assert_eq!(crc16(&[0x03, 0xF0, 0x00]), 0x892F);
    assert_eq!(crc16_bytes(&[0x03, 0xF0, 0x00]), [0x89, 0x2F]);

    assert_eq!(crc16(&[]), 0x0000);
    assert_eq!(crc16(&[0x00]), 0x1E0F);
}

#[test]
fn single_bit_change_changes_checksum() {
    assert_ne!(crc16(&[0x03, 0xF0, 0x00]), crc16(&[0x03, 0xF0, 0x01]));
}

proptest! {
    #[test]
    fn deterministic_for_any_payload(payload in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(crc16(&payload), crc16(&payload));
    }
}
