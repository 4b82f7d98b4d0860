// rrhfoem-rs/rrhfoem/src/prelude.rs

//! Convenience re-exports of the common public surface.

pub use crate::protocol::{crc16, Command, Frame, ResponseFrame};
pub use crate::reader::session::MifareSession;
pub use crate::reader::Reader;
#[cfg(feature = "usb")]
pub use crate::transport::hid::HidTransport;
pub use crate::transport::{Driver, MockTransport, Timing, Transport};
pub use crate::{
    Addressing, BlockData, Error, KeyType, MifareKey, ReaderInfo, Result, SlotMode, TagUid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex, reversed};
