// rrhfoem-rs/rrhfoem/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// No RRHFOEM04 reader is attached (or it cannot be opened).
    #[error("reader not found")]
    DeviceNotFound,

    // HID 実装を後から有効化できるように optional dependency にしている
    /// Error reported by the HID layer.
    #[cfg(feature = "usb")]
    #[error("hid error: {0}")]
    Hid(#[from] hidapi::HidError),

    /// I/O failure while transferring a frame.
    #[error("transfer failed: {0}")]
    Transfer(String),

    /// All read retries exhausted where a response was mandatory.
    #[error("no response from reader")]
    NoResponse,

    /// A buffer or parameter had the wrong length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length required by the wire format or parameter contract.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// A caller-supplied parameter was out of range or malformed. Rejected
    /// before any frame is transmitted.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The reader answered with a non-success status code.
    #[error("command failed: status=({status1:#04x}, {status2:#04x})")]
    CommandStatus {
        /// First status byte (response offset 3).
        status1: u8,
        /// Second status byte (response offset 4).
        status2: u8,
    },

    /// A block of a multi-block write failed; earlier blocks are not rolled
    /// back.
    #[error("write failed at block {block}: status=({status1:#04x}, {status2:#04x})")]
    BlockStatus {
        /// Block number the reader rejected.
        block: u8,
        /// First status byte.
        status1: u8,
        /// Second status byte.
        status2: u8,
    },

    /// Mifare Classic three-pass authentication was rejected.
    #[error("authentication rejected: status=({status1:#04x}, {status2:#04x})")]
    Authentication {
        /// First status byte.
        status1: u8,
        /// Second status byte.
        status2: u8,
    },

    /// Card not present or not selectable.
    #[error("card not present or not selectable")]
    TagUnreachable,

    /// Response frame did not match the expected layout.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
