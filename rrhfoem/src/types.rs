// rrhfoem-rs/rrhfoem/src/types.rs

use std::fmt;

use crate::constants::{ISO15693_UID_LEN, MIFARE_BLOCK_SIZE, MIFARE_KEY_LEN};
use crate::{Error, Result};

/// Tag UID - Newtype Pattern (4/7/8 バイト)
///
/// Holds the canonical (big-endian) byte order. ISO15693 UIDs are 8 bytes
/// and travel little-endian on the wire; ISO14443A UIDs are 4 or 7 bytes
/// and travel as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagUid(Vec<u8>);

impl TagUid {
    /// UID lengths accepted by the supported card standards.
    pub const LENGTHS: [usize; 3] = [4, 7, ISO15693_UID_LEN];

    /// Construct from canonical bytes. Rejects lengths other than 4/7/8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if !Self::LENGTHS.contains(&bytes.len()) {
            return Err(Error::InvalidParameter(format!(
                "UID must be 4, 7 or 8 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(bytes.to_vec()))
    }

    /// Parse a canonical hex string (e.g. `"e0040100123abbcc"`).
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = crate::utils::parse_hex(s).map_err(Error::InvalidParameter)?;
        Self::from_bytes(&bytes)
    }

    /// Canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Canonical lowercase hex representation.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }

    /// True for 8-byte (ISO15693) identifiers.
    pub fn is_iso15693(&self) -> bool {
        self.0.len() == ISO15693_UID_LEN
    }
}

impl fmt::Display for TagUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<&[u8]> for TagUid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

/// Mifare Classic sector key (6 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MifareKey([u8; MIFARE_KEY_LEN]);

impl MifareKey {
    /// Factory-default transport key (`FF FF FF FF FF FF`).
    pub const DEFAULT: Self = Self([0xFF; MIFARE_KEY_LEN]);

    /// Construct from exactly six bytes.
    pub fn from_bytes(bytes: [u8; MIFARE_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a 12-hex-character key string.
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = crate::utils::parse_hex(s).map_err(Error::InvalidParameter)?;
        Self::try_from(&bytes[..])
    }

    /// Key bytes.
    pub fn as_bytes(&self) -> &[u8; MIFARE_KEY_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for MifareKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != MIFARE_KEY_LEN {
            return Err(Error::InvalidLength {
                expected: MIFARE_KEY_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; MIFARE_KEY_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Mifare Classic key slot selector.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// Sector key A.
    A = 0x60,
    /// Sector key B.
    B = 0x61,
}

impl KeyType {
    /// Wire byte sent in the authenticate command.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// BlockData (16 バイト) - one Mifare Classic block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; MIFARE_BLOCK_SIZE]);

impl BlockData {
    /// Construct from exactly sixteen bytes.
    pub fn from_bytes(bytes: [u8; MIFARE_BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Construct from at most sixteen bytes, zero-padding the remainder.
    pub fn padded_from(data: &[u8]) -> Result<Self> {
        if data.len() > MIFARE_BLOCK_SIZE {
            return Err(Error::InvalidLength {
                expected: MIFARE_BLOCK_SIZE,
                actual: data.len(),
            });
        }
        let mut arr = [0u8; MIFARE_BLOCK_SIZE];
        arr[..data.len()].copy_from_slice(data);
        Ok(Self(arr))
    }

    /// Block bytes.
    pub fn as_bytes(&self) -> &[u8; MIFARE_BLOCK_SIZE] {
        &self.0
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }

    /// Printable rendering with non-graphic bytes replaced by `.`.
    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

/// ISO15693 addressing mode. The three modes are mutually exclusive by
/// construction; exactly one request-flag byte is derived per command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addressing {
    /// Broadcast: any tag in the field responds.
    NonAddressed,
    /// Select flag: the previously selected tag responds.
    Selected,
    /// Addressed: only the tag with this UID responds. The UID is encoded
    /// little-endian on the wire.
    Addressed(TagUid),
}

impl Addressing {
    /// ISO15693 request-flag byte for this mode.
    pub fn flags(&self) -> u8 {
        match self {
            Self::NonAddressed => crate::constants::FLAGS_NON_ADDRESSED,
            Self::Selected => crate::constants::FLAGS_SELECTED,
            Self::Addressed(_) => crate::constants::FLAGS_ADDRESSED,
        }
    }
}

/// ISO15693 inventory slotting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotMode {
    /// Single-slot scan: fast, collides with multiple tags present.
    Single,
    /// 16-slot anti-collision scan.
    Slot16,
}

impl SlotMode {
    /// Inventory request-flag byte for this mode.
    pub fn flags(self) -> u8 {
        match self {
            Self::Single => crate::constants::FLAGS_INVENTORY_SINGLE_SLOT,
            Self::Slot16 => crate::constants::FLAGS_INVENTORY_16_SLOT,
        }
    }
}

/// Model and serial reported by the reader.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderInfo {
    /// ASCII model string (e.g. `"RRHFOEM04"`).
    pub model: String,
    /// Serial number as lowercase hex of the trailing info bytes.
    pub serial: String,
}
