//! Build-time link configuration.
//!
//! The defaults can be overridden at build time through `P2P15D4_*`
//! environment variables, e.g. `P2P15D4_SHORT_ADDRESS=0x0003`.

pub use customizable::*;

mod customizable {
    #![allow(unused)]
    include!(concat!(env!("OUT_DIR"), "/config.rs"));
}

/// The short address value meaning that no short address is assigned.
pub const SHORT_ADDRESS_UNSET: u16 = 0xffff;

/// The settings [`crate::Link::new`] applies to the radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct Config {
    /// The PAN identifier of this node.
    pub pan_id: u16,
    /// The short address of this node, [`SHORT_ADDRESS_UNSET`] to send from
    /// the extended address.
    pub short_address: u16,
    /// The channel, 11 to 26.
    pub channel: u8,
    /// The transmit power in dBm.
    pub tx_power: i8,
    /// Receive frames regardless of their destination.
    pub promiscuous: bool,
    /// Act as PAN coordinator.
    pub coordinator: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pan_id: PAN_ID,
            short_address: SHORT_ADDRESS,
            channel: CHANNEL,
            tx_power: TX_POWER,
            promiscuous: PROMISCUOUS,
            coordinator: COORDINATOR,
        }
    }
}
