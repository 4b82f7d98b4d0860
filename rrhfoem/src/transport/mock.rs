// rrhfoem-rs/rrhfoem/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and returns queued
/// responses.
///
/// Queued responses become readable only after a frame has been sent, one
/// per send, which mirrors the device: the driver's pre-send flush sees
/// nothing, and the reply to the command just written appears afterwards.
/// Use [`push_stale`](Self::push_stale) to seed data that is readable
/// immediately (i.e. left over from an unread earlier response).
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every frame written, in order.
    pub sent: Vec<Vec<u8>>,
    responses: VecDeque<Vec<u8>>,
    stale: VecDeque<Vec<u8>>,
    armed: usize,
    /// Testing hook: number of subsequent `send` calls that should fail.
    pub send_failures: usize,
}

impl MockTransport {
    /// Empty mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response frame for the next command.
    pub fn push_response(&mut self, frame: Vec<u8>) {
        self.responses.push_back(frame);
    }

    /// Queue a frame readable before any command is sent.
    pub fn push_stale(&mut self, frame: Vec<u8>) {
        self.stale.push_back(frame);
    }

    /// Set how many subsequent `send` calls should fail (for tests).
    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }
}

impl Transport for MockTransport {
    fn send(&mut self, frame: &[u8]) -> Result<()> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(Error::Transfer("injected send failure".to_string()));
        }
        self.sent.push(frame.to_vec());
        if !self.responses.is_empty() {
            self.armed = 1;
        }
        Ok(())
    }

    fn receive(&mut self) -> Result<Vec<u8>> {
        if let Some(stale) = self.stale.pop_front() {
            return Ok(stale);
        }
        if self.armed > 0 {
            if let Some(resp) = self.responses.pop_front() {
                self.armed -= 1;
                return Ok(resp);
            }
        }
        Ok(Vec::new())
    }
}
