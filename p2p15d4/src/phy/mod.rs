//! Access to IEEE 802.15.4 transceivers.
//!
//! The link drives the transceiver through the [`Radio`] trait, which mirrors
//! the configuration and transmit primitives offered by radio drivers.

pub mod config;
pub mod radio;

pub use config::Channel;
pub use radio::Radio;

/// An error reported by the transceiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The channel is not one of the 2.4 GHz O-QPSK channels 11 to 26.
    InvalidChannel,
    /// Clear channel assessment found the channel busy.
    ChannelBusy,
    /// The driver rejected the request.
    Driver,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidChannel => write!(f, "invalid channel"),
            Error::ChannelBusy => write!(f, "channel busy"),
            Error::Driver => write!(f, "driver error"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
