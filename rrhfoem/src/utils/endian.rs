// rrhfoem-rs/rrhfoem/src/utils/endian.rs

//! Byte-order conversion.
//!
//! UIDs and ISO15693 block data are little-endian on the wire and
//! big-endian in the crate's public representation. Every conversion in
//! the codec goes through this one helper so the two orders can never be
//! mixed inconsistently across operations.

/// Return the bytes in reversed order.
pub fn reversed(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().rev().copied().collect()
}
