// rrhfoem-rs/rrhfoem/src/reader/mod.rs

//! The public operation surface of the reader.
//!
//! [`Reader`] owns the transport (via the pacing [`Driver`]) and the Mifare
//! session cache; every operation is a method taking `&mut self`, so one
//! command is in flight at a time by construction. A multi-threaded caller
//! must serialize access externally (one mutex around the whole reader).
//!
//! Failure policy, uniform across operations: parameter validation happens
//! before any frame is transmitted; queries (info, inventories, reads)
//! translate a non-success device status into their absence value and log
//! it; writes, select and authenticate raise, so a failed write can never
//! be mistaken for a successful no-op.

mod iso14443a;
mod iso15693;
pub mod session;

use std::thread;

use crate::protocol::{Command, ResponseFrame};
use crate::protocol::responses::decode_reader_info;
use crate::transport::driver::{Driver, Timing};
use crate::transport::traits::Transport;
use crate::types::ReaderInfo;
use crate::{Error, Result};
use session::MifareSession;

/// Handle to one RRHFOEM04 reader.
pub struct Reader {
    driver: Driver,
    mifare: MifareSession,
}

impl Reader {
    /// Wrap an already-open transport with default timing.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_timing(transport, Timing::default())
    }

    /// Wrap an already-open transport with explicit timing.
    pub fn with_timing(transport: Box<dyn Transport>, timing: Timing) -> Self {
        Self {
            driver: Driver::new(transport, timing),
            mifare: MifareSession::new(),
        }
    }

    /// Open the first RRHFOEM04 on the bus.
    #[cfg(feature = "usb")]
    pub fn open() -> Result<Self> {
        let transport = crate::transport::hid::HidTransport::open()?;
        Ok(Self::new(Box::new(transport)))
    }

    /// Close the reader, releasing the transport.
    pub fn close(self) {}

    pub(crate) fn driver_mut(&mut self) -> &mut Driver {
        &mut self.driver
    }

    pub(crate) fn mifare_mut(&mut self) -> &mut MifareSession {
        &mut self.mifare
    }

    pub(crate) fn mifare(&self) -> &MifareSession {
        &self.mifare
    }

    /// Send a command and require some response frame; exhausted retries
    /// become [`Error::NoResponse`].
    pub(crate) fn exchange_required(&mut self, cmd: &Command) -> Result<ResponseFrame> {
        self.driver
            .exchange(&cmd.encode())?
            .ok_or(Error::NoResponse)
    }

    /// Query model and serial number.
    ///
    /// Returns `Ok(None)` when the reader does not answer, reports a
    /// non-success status, or the info payload is malformed (missing
    /// delimiter); only transport failures are errors.
    pub fn reader_info(&mut self) -> Result<Option<ReaderInfo>> {
        let Some(resp) = self.driver.exchange(&Command::ReaderInfo.encode())? else {
            return Ok(None);
        };
        if !resp.is_success() {
            log::warn!("reader info query failed: status={:?}", resp.status());
            return Ok(None);
        }
        match decode_reader_info(&resp) {
            Ok(info) => Ok(Some(info)),
            Err(Error::MalformedResponse(msg)) => {
                log::warn!("reader info payload malformed: {}", msg);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Single beep. Sleeps one command interval before and after so the
    /// sound completes without colliding with neighbouring commands.
    ///
    /// An empty response is normal for buzzer commands; only a present,
    /// non-success status is an error.
    pub fn buzzer_beep(&mut self) -> Result<()> {
        let interval = self.driver.timing().command_interval;
        thread::sleep(interval);
        let result = self.buzzer(Command::BuzzerBeep);
        thread::sleep(interval);
        result
    }

    /// Turn the buzzer on.
    pub fn buzzer_on(&mut self) -> Result<()> {
        self.buzzer(Command::BuzzerOn)
    }

    /// Turn the buzzer off.
    pub fn buzzer_off(&mut self) -> Result<()> {
        self.buzzer(Command::BuzzerOff)
    }

    fn buzzer(&mut self, cmd: Command) -> Result<()> {
        match self.driver.exchange(&cmd.encode())? {
            Some(resp) => resp.require_success(),
            None => Ok(()),
        }
    }
}
