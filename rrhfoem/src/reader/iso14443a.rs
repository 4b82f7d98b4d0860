// rrhfoem-rs/rrhfoem/src/reader/iso14443a.rs

//! ISO14443A operations: inventory, card selection and the Mifare Classic
//! authenticate/read/write set.
//!
//! Mifare block access runs through the session cache: a read or write
//! first selects the card if a different UID (or none) is selected, then
//! authenticates the target block unless a live authentication is cached.
//! Any authentication failure wipes the whole session, because the card
//! state after a failed three-pass handshake is unknown.

use crate::protocol::responses::{decode_iso14443a_uid, decode_mifare_block};
use crate::protocol::Command;
use crate::reader::Reader;
use crate::types::{BlockData, KeyType, MifareKey, TagUid};
use crate::{Error, Result};

impl Reader {
    /// Scan for an ISO14443A card. Returns `Ok(None)` when no card is in
    /// the field or the scan fails.
    pub fn iso14443a_inventory(&mut self) -> Result<Option<TagUid>> {
        let Some(resp) = self.driver_mut().exchange(&Command::Iso14443aInventory.encode())? else {
            return Ok(None);
        };
        if !resp.is_success() {
            log::debug!("iso14443a inventory failed: status={:?}", resp.status());
            return Ok(None);
        }
        decode_iso14443a_uid(&resp).map(Some)
    }

    /// Select a card by UID, putting it in the active state for
    /// subsequent operations.
    ///
    /// A silent card raises [`Error::TagUnreachable`]; an explicit
    /// non-success status raises [`Error::CommandStatus`].
    pub fn iso14443a_select(&mut self, uid: &TagUid) -> Result<()> {
        let cmd = Command::Iso14443aSelect { uid: uid.clone() };
        let Some(resp) = self.driver_mut().exchange(&cmd.encode())? else {
            return Err(Error::TagUnreachable);
        };
        resp.require_success()?;
        self.mifare_mut().select(uid.clone());
        Ok(())
    }

    /// Mifare Classic three-pass authentication for one block.
    ///
    /// Selects the card first when it is not the currently selected one
    /// (which drops authentications cached for other cards). On success
    /// the `(uid, block)` pair is cached; on any failure the whole session
    /// is invalidated.
    pub fn mifare_authenticate(
        &mut self,
        uid: &TagUid,
        block: u8,
        key_type: KeyType,
        key: &MifareKey,
    ) -> Result<()> {
        if !self.mifare().is_selected(uid) {
            self.iso14443a_select(uid).map_err(|e| match e {
                Error::TagUnreachable | Error::CommandStatus { .. } => Error::TagUnreachable,
                other => other,
            })?;
        }

        let cmd = Command::MifareAuthenticate {
            uid: uid.clone(),
            block,
            key_type,
            key: *key,
        };
        match self.driver_mut().exchange(&cmd.encode())? {
            None => {
                self.mifare_mut().invalidate();
                Err(Error::NoResponse)
            }
            Some(resp) if !resp.is_success() => {
                self.mifare_mut().invalidate();
                let (status1, status2) = resp.status();
                Err(Error::Authentication { status1, status2 })
            }
            Some(_) => {
                self.mifare_mut().mark_authenticated(uid.clone(), block);
                Ok(())
            }
        }
    }

    /// Read one 16-byte block from a Mifare Classic card, authenticating
    /// with the default transport key (key A) if the block is not already
    /// authenticated. Returns `Ok(None)` when the read itself is refused.
    pub fn mifare_read(&mut self, uid: &TagUid, block: u8) -> Result<Option<BlockData>> {
        self.ensure_authenticated(uid, block)?;

        let cmd = Command::MifareRead { block };
        let Some(resp) = self.driver_mut().exchange(&cmd.encode())? else {
            return Ok(None);
        };
        if !resp.is_success() {
            log::debug!("mifare read failed: status={:?}", resp.status());
            return Ok(None);
        }
        decode_mifare_block(&resp).map(Some)
    }

    /// Write one block to a Mifare Classic card. `data` may be up to 16
    /// bytes and is zero-padded; a failed write always raises.
    pub fn mifare_write(&mut self, uid: &TagUid, block: u8, data: &[u8]) -> Result<()> {
        // Validate the payload before any select/authenticate traffic.
        let data = BlockData::padded_from(data)?;
        self.ensure_authenticated(uid, block)?;

        let cmd = Command::MifareWrite { block, data };
        let resp = self.exchange_required(&cmd)?;
        resp.require_success()
    }

    fn ensure_authenticated(&mut self, uid: &TagUid, block: u8) -> Result<()> {
        if self.mifare().is_authenticated(uid, block) {
            return Ok(());
        }
        self.mifare_authenticate(uid, block, KeyType::A, &MifareKey::DEFAULT)
    }
}
