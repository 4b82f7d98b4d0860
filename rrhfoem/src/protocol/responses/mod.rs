// rrhfoem-rs/rrhfoem/src/protocol/responses/mod.rs

//! Per-command response decoders.
//!
//! Decoding is positional: status always sits at offset 3-4 and callers
//! branch on it before decoding further (the reader operations own that
//! policy). The decoders here are strict about the payload layout and
//! return errors for truncated or malformed frames; they never inspect
//! the status bytes themselves.

pub mod iso14443a;
pub mod iso15693;
pub mod system;

pub use iso14443a::{decode_iso14443a_uid, decode_mifare_block};
pub use iso15693::{decode_block_data, decode_iso15693_inventory};
pub use system::decode_reader_info;
