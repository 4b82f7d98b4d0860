// rrhfoem-rs/rrhfoem/src/transport/mod.rs

//! Transport layer: the raw report channel, the pacing/retry driver and a
//! mock implementation for tests.

pub mod driver;
#[cfg(feature = "usb")]
pub mod hid;
pub mod mock;
pub mod traits;

pub use driver::{Driver, Timing};
#[cfg(feature = "usb")]
pub use hid::HidTransport;
pub use mock::MockTransport;
pub use traits::Transport;
