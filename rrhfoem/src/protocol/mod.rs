// rrhfoem-rs/rrhfoem/src/protocol/mod.rs

//! Wire protocol: checksum, frame format, command encoders and response
//! decoders for the RRHFOEM04 packet channel.

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{crc16, crc16_bytes};
pub use commands::Command;
pub use frame::{Frame, ResponseFrame};
