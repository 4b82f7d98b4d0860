// rrhfoem-rs/rrhfoem/src/transport/hid.rs

#![cfg(feature = "usb")]

//! USB HID transport for the RRHFOEM04.
//!
//! Feature-gated behind `usb`; requires the `hidapi` crate. The device
//! exposes a single HID interface with 64-byte input/output reports, so no
//! endpoint or interface negotiation is needed beyond opening by
//! vendor/product id.

use std::thread;
use std::time::Duration;

use hidapi::{HidApi, HidDevice};

use crate::constants::{FRAME_LEN, PRODUCT_ID, VENDOR_ID};
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// HID transport backed by an open RRHFOEM04 handle.
pub struct HidTransport {
    device: HidDevice,
}

impl HidTransport {
    /// Open the first RRHFOEM04 found on the bus (vid `0x1781`,
    /// pid `0x0C10`) and switch it to non-blocking reads.
    pub fn open() -> Result<Self> {
        let api = HidApi::new()?;
        let device = api
            .open(VENDOR_ID, PRODUCT_ID)
            .map_err(|_| Error::DeviceNotFound)?;
        device.set_blocking_mode(false)?;

        // The reader needs a moment after open before it accepts commands.
        thread::sleep(Duration::from_millis(100));

        Ok(Self { device })
    }
}

impl Transport for HidTransport {
    fn send(&mut self, frame: &[u8]) -> Result<()> {
        // The frame's leading zero byte doubles as the HID report id.
        self.device.write(frame)?;
        Ok(())
    }

    fn receive(&mut self) -> Result<Vec<u8>> {
        let mut buf = [0u8; FRAME_LEN];
        // Non-blocking: returns 0 bytes when no report is pending.
        let n = self.device.read(&mut buf)?;
        Ok(buf[..n].to_vec())
    }
}
