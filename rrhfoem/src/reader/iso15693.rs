// rrhfoem-rs/rrhfoem/src/reader/iso15693.rs

//! ISO15693 operations: inventory scans, block reads/writes and AFI write.
//!
//! Block numbers are `u8`, so the 0-255 range is enforced by the type
//! system; the remaining runtime validation is the multi-block bound
//! `start + count <= 256`, checked before any frame is transmitted.

use crate::protocol::responses::{decode_block_data, decode_iso15693_inventory};
use crate::protocol::Command;
use crate::reader::Reader;
use crate::types::{Addressing, SlotMode, TagUid};
use crate::{Error, Result};

impl Reader {
    /// Single-slot inventory scan. Fast but prone to collisions when more
    /// than one tag is in the field.
    ///
    /// No response and "zero tags found" both yield an empty `Vec`.
    pub fn iso15693_single_slot_inventory(&mut self) -> Result<Vec<TagUid>> {
        self.iso15693_inventory(SlotMode::Single)
    }

    /// 16-slot anti-collision inventory scan.
    pub fn iso15693_16_slot_inventory(&mut self) -> Result<Vec<TagUid>> {
        self.iso15693_inventory(SlotMode::Slot16)
    }

    fn iso15693_inventory(&mut self, slots: SlotMode) -> Result<Vec<TagUid>> {
        let cmd = Command::Iso15693Inventory { slots };
        let Some(resp) = self.driver_mut().exchange(&cmd.encode())? else {
            return Ok(Vec::new());
        };
        if !resp.is_success() {
            log::debug!("inventory scan failed: status={:?}", resp.status());
            return Ok(Vec::new());
        }
        decode_iso15693_inventory(&resp)
    }

    /// Read one block. Returns `Ok(None)` when no tag answers or the tag
    /// rejects the read.
    pub fn iso15693_read_single_block(
        &mut self,
        addressing: Addressing,
        block: u8,
        block_size: u8,
    ) -> Result<Option<Vec<u8>>> {
        self.iso15693_read_blocks(addressing, block, 1, block_size)
    }

    /// Read `count` consecutive blocks starting at `start_block` in one
    /// transaction. The returned bytes are the blocks concatenated in
    /// order, each in canonical byte order.
    pub fn iso15693_read_multiple_blocks(
        &mut self,
        addressing: Addressing,
        start_block: u8,
        count: u8,
        block_size: u8,
    ) -> Result<Option<Vec<u8>>> {
        self.iso15693_read_blocks(addressing, start_block, count, block_size)
    }

    fn iso15693_read_blocks(
        &mut self,
        addressing: Addressing,
        start_block: u8,
        count: u8,
        block_size: u8,
    ) -> Result<Option<Vec<u8>>> {
        validate_block_span(start_block, count as usize)?;
        validate_block_size(block_size)?;

        let cmd = Command::Iso15693ReadBlocks {
            addressing,
            block_size,
            start_block,
            count,
        };
        let Some(resp) = self.driver_mut().exchange(&cmd.encode())? else {
            return Ok(None);
        };
        if !resp.is_success() {
            log::debug!("block read failed: status={:?}", resp.status());
            return Ok(None);
        }
        decode_block_data(&resp, block_size, count).map(Some)
    }

    /// Write one block. `data` may be shorter than `block_size`; it is
    /// zero-padded. A failed write always raises.
    pub fn iso15693_write_single_block(
        &mut self,
        addressing: Addressing,
        block: u8,
        data: &[u8],
        block_size: u8,
    ) -> Result<()> {
        validate_block_size(block_size)?;
        let chunk = pad_chunk(data, block_size)?;

        let cmd = Command::Iso15693WriteBlock {
            addressing,
            block_size,
            block,
            data: chunk,
        };
        let resp = self.exchange_required(&cmd)?;
        resp.require_success()
    }

    /// Write `data` across consecutive blocks starting at `start_block`,
    /// one frame per block. The first failing block aborts the operation
    /// and is named in the error; blocks already written are not rolled
    /// back, so the caller must assume they succeeded.
    pub fn iso15693_write_multiple_blocks(
        &mut self,
        addressing: Addressing,
        start_block: u8,
        data: &[u8],
        block_size: u8,
    ) -> Result<()> {
        validate_block_size(block_size)?;
        let size = block_size as usize;
        let count = data.len().div_ceil(size);
        validate_block_span(start_block, count)?;

        for (offset, chunk) in data.chunks(size).enumerate() {
            let block = start_block + offset as u8;
            let cmd = Command::Iso15693WriteBlock {
                addressing: addressing.clone(),
                block_size,
                block,
                data: pad_chunk(chunk, block_size)?,
            };
            let resp = self.exchange_required(&cmd)?;
            if !resp.is_success() {
                let (status1, status2) = resp.status();
                return Err(Error::BlockStatus {
                    block,
                    status1,
                    status2,
                });
            }
        }
        Ok(())
    }

    /// Write the Application Family Identifier byte.
    pub fn iso15693_write_afi(&mut self, addressing: Addressing, afi: u8) -> Result<()> {
        let cmd = Command::Iso15693WriteAfi { addressing, afi };
        let resp = self.exchange_required(&cmd)?;
        resp.require_success()
    }
}

/// `start + count` must stay within the 256-block address space.
fn validate_block_span(start_block: u8, count: usize) -> Result<()> {
    if count == 0 {
        return Err(Error::InvalidParameter(
            "block count must be at least 1".to_string(),
        ));
    }
    let end = start_block as usize + count;
    if end > 256 {
        return Err(Error::InvalidParameter(format!(
            "cannot access {count} blocks starting at {start_block}"
        )));
    }
    Ok(())
}

/// Block size must be non-zero and small enough that one block fits a
/// command frame alongside the addressing header.
fn validate_block_size(block_size: u8) -> Result<()> {
    if block_size == 0 || block_size > 32 {
        return Err(Error::InvalidParameter(format!(
            "unsupported block size {block_size}"
        )));
    }
    Ok(())
}

/// Zero-pad a chunk to the block size; reject oversized chunks.
fn pad_chunk(data: &[u8], block_size: u8) -> Result<Vec<u8>> {
    let size = block_size as usize;
    if data.len() > size {
        return Err(Error::InvalidLength {
            expected: size,
            actual: data.len(),
        });
    }
    let mut chunk = data.to_vec();
    chunk.resize(size, 0x00);
    Ok(chunk)
}
