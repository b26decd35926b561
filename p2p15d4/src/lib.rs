//! A point-to-point IEEE 802.15.4 data link.
//!
//! [`Link`] configures a transceiver implementing [`phy::Radio`] and sends
//! Data frames built with [`frame`]. Frames handed over by the receive
//! callback go through an [`RxQueue`] and are decoded later, away from the
//! radio interrupt. [`enhanced_ack_generator`] answers frames requesting an
//! acknowledgment from within the callback.
#![no_std]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[macro_use]
pub(crate) mod utils;

pub use p2p15d4_frame as frame;

pub mod config;
pub mod link;
pub mod phy;

pub use config::Config;
pub use link::{
    enhanced_ack_generator, DefaultRxQueue, Error, Link, RawFrame, Result, RxQueue,
};
