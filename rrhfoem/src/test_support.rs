// rrhfoem-rs/rrhfoem/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport setup so tests across the crate
//! and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::{FRAME_LEN, STATUS_OFFSET};
use crate::reader::Reader;
use crate::transport::driver::Timing;
use crate::transport::mock::MockTransport;
use crate::transport::traits::Transport;
use crate::Result;

/// Shared handle around a [`MockTransport`] so tests can keep seeding
/// responses and inspecting traffic after a `Reader` or `Driver` has taken
/// ownership of the transport.
#[derive(Clone, Default)]
#[doc(hidden)]
pub struct SharedMock {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedMock {
    /// Fresh mock with no queued responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response frame for the next command.
    pub fn push_response(&self, frame: Vec<u8>) {
        self.inner.borrow_mut().push_response(frame);
    }

    /// Queue a frame readable before any command is sent.
    pub fn push_stale(&self, frame: Vec<u8>) {
        self.inner.borrow_mut().push_stale(frame);
    }

    /// Make the next `n` send calls fail.
    pub fn set_send_failures(&self, n: usize) {
        self.inner.borrow_mut().set_send_failures(n);
    }

    /// Every frame written so far, in order.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }

    /// Number of frames written so far.
    pub fn sent_count(&self) -> usize {
        self.inner.borrow().sent.len()
    }

    /// Box a clone of this handle as a `Transport` trait object.
    pub fn boxed(&self) -> Box<dyn Transport> {
        Box::new(self.clone())
    }
}

impl Transport for SharedMock {
    fn send(&mut self, frame: &[u8]) -> Result<()> {
        self.inner.borrow_mut().send(frame)
    }

    fn receive(&mut self) -> Result<Vec<u8>> {
        self.inner.borrow_mut().receive()
    }
}

/// Reader driving a [`SharedMock`] with all delays zeroed. Returns the
/// reader and the mock handle for seeding/inspection.
#[doc(hidden)]
pub fn reader_with_mock() -> (Reader, SharedMock) {
    let mock = SharedMock::new();
    let reader = Reader::with_timing(mock.boxed(), Timing::immediate());
    (reader, mock)
}

/// Build a full-width response frame with the given status bytes and a
/// payload copied in starting at `offset`.
#[doc(hidden)]
pub fn response_frame(status: (u8, u8), offset: usize, payload: &[u8]) -> Vec<u8> {
    let mut frame = vec![0u8; FRAME_LEN];
    frame[STATUS_OFFSET] = status.0;
    frame[STATUS_OFFSET + 1] = status.1;
    frame[offset..offset + payload.len()].copy_from_slice(payload);
    frame
}

/// Success-status frame with a payload at `offset`.
#[doc(hidden)]
pub fn success_frame(offset: usize, payload: &[u8]) -> Vec<u8> {
    response_frame((0x00, 0x00), offset, payload)
}

/// Frame carrying only a (typically non-success) status.
#[doc(hidden)]
pub fn status_frame(status1: u8, status2: u8) -> Vec<u8> {
    response_frame((status1, status2), STATUS_OFFSET + 2, &[])
}
