// rrhfoem-rs/rrhfoem/src/transport/driver.rs

use std::thread;
use std::time::{Duration, Instant};

use crate::protocol::{Frame, ResponseFrame};
use crate::transport::traits::Transport;
use crate::utils::bytes_to_hex;
use crate::Result;

/// Timing discipline for the command channel. The RRHFOEM04 drops or
/// garbles commands sent back-to-back, so a minimum interval is enforced
/// between transmissions and the first read waits out a settle delay.
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    /// Minimum interval between two transmitted commands.
    pub command_interval: Duration,
    /// Wait after a write before the first read attempt.
    pub settle_delay: Duration,
    /// Wait between read attempts.
    pub retry_delay: Duration,
    /// Number of read attempts before giving up.
    pub max_retries: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            command_interval: Duration::from_millis(100),
            settle_delay: Duration::from_millis(10),
            retry_delay: Duration::from_millis(10),
            max_retries: 5,
        }
    }
}

impl Timing {
    /// Zero delays, for tests driving a mock transport.
    pub fn immediate() -> Self {
        Self {
            command_interval: Duration::ZERO,
            settle_delay: Duration::ZERO,
            retry_delay: Duration::ZERO,
            max_retries: 3,
        }
    }
}

/// Owns the transport and the full round-trip discipline: pacing, stale
/// input flush, framing, settle delay and bounded read retries.
pub struct Driver {
    transport: Box<dyn Transport>,
    timing: Timing,
    last_command: Option<Instant>,
}

impl Driver {
    /// Wrap a transport with the given timing configuration.
    pub fn new(transport: Box<dyn Transport>, timing: Timing) -> Self {
        Self {
            transport,
            timing,
            last_command: None,
        }
    }

    /// The active timing configuration.
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Send a command payload and poll for the response frame.
    ///
    /// `Ok(None)` means every retry came back empty. That is a meaningful
    /// outcome (e.g. no tag in the field), not an error; operations that
    /// require a response map it to [`Error::NoResponse`] themselves.
    ///
    /// [`Error::NoResponse`]: crate::Error::NoResponse
    pub fn exchange(&mut self, payload: &[u8]) -> Result<Option<ResponseFrame>> {
        self.pace();

        // Drop unread data from a previous, possibly abandoned response so
        // it cannot be mistaken for this command's reply.
        loop {
            let stale = self.transport.receive()?;
            if stale.is_empty() {
                break;
            }
            log::debug!("flushed {} stale bytes", stale.len());
        }

        let frame = Frame::encode(payload)?;
        log::trace!("-> {}", bytes_to_hex(payload));
        self.transport.send(&frame)?;
        self.last_command = Some(Instant::now());

        thread::sleep(self.timing.settle_delay);

        for _ in 0..self.timing.max_retries {
            let raw = self.transport.receive()?;
            if !raw.is_empty() {
                log::trace!("<- {}", bytes_to_hex(&raw));
                return Ok(Some(ResponseFrame::new(raw)?));
            }
            thread::sleep(self.timing.retry_delay);
        }

        log::debug!(
            "no response after {} read attempts",
            self.timing.max_retries
        );
        Ok(None)
    }

    /// Sleep out the remainder of the inter-command interval.
    fn pace(&mut self) {
        if let Some(last) = self.last_command {
            let elapsed = last.elapsed();
            if elapsed < self.timing.command_interval {
                thread::sleep(self.timing.command_interval - elapsed);
            }
        }
    }
}
