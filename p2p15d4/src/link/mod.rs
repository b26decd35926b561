//! The point-to-point data link.

mod rx;
pub use rx::{DefaultRxQueue, RawFrame, RxQueue};

use crate::config::{Config, SHORT_ADDRESS_UNSET};
use crate::frame::{self, build_enhanced_ack, Address, DataFrameRepr, DataHeaderRepr};
use crate::frame::{FrameVersion, MAX_FRAME_LEN};
use crate::phy::{self, Channel, Radio};

/// An error that can occur on the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The frame could not be built.
    Frame(frame::Error),
    /// The radio reported an error.
    Radio(phy::Error),
}

impl From<frame::Error> for Error {
    fn from(err: frame::Error) -> Self {
        Error::Frame(err)
    }
}

impl From<phy::Error> for Error {
    fn from(err: phy::Error) -> Self {
        Error::Radio(err)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Frame(err) => write!(f, "frame: {err}"),
            Error::Radio(err) => write!(f, "radio: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A type alias for `Result<T, p2p15d4::Error>`.
pub type Result<T> = core::result::Result<T, Error>;

/// A configured radio, ready to exchange Data frames with a peer.
pub struct Link<R: Radio> {
    radio: R,
}

impl<R: Radio> Link<R> {
    /// Configure the radio and enter receive mode.
    ///
    /// The extended address is set to the factory EUI-64 in reversed byte
    /// order, which the hardware needs for address filtering. The receiver is
    /// kept on between transmissions.
    pub fn new(mut radio: R, config: &Config) -> Result<Self> {
        let channel = Channel::try_from(config.channel)?;

        radio.set_coordinator(config.coordinator);
        radio.set_promiscuous(config.promiscuous);

        radio.set_pan_id(config.pan_id);
        radio.set_short_address(config.short_address);

        let mut extended_address = radio.ieee802154_address();
        extended_address.reverse();
        radio.set_extended_address(extended_address);

        radio.set_channel(channel);
        radio.set_tx_power(config.tx_power);

        radio.set_rx_when_idle(true);
        radio.receive()?;

        info!(
            "Link up on channel {} in PAN {:x}",
            config.channel, config.pan_id
        );

        Ok(Self { radio })
    }

    /// Return the radio driver.
    pub fn radio(&self) -> &R {
        &self.radio
    }

    /// Return the radio driver mutably.
    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Release the radio driver.
    pub fn into_radio(self) -> R {
        self.radio
    }

    /// Return the address frames are sent from: the short address, or the
    /// extended address when no short address is assigned.
    pub fn source_address(&self) -> Address {
        match self.radio.short_address() {
            SHORT_ADDRESS_UNSET => Address::Extended(self.radio.extended_address()),
            address => Address::Short(address),
        }
    }

    /// Send a Data frame from this node's PAN ID and [`Link::source_address`].
    ///
    /// A `None` sequence number is suppressed, which only a 2015 frame allows.
    /// PAN ID compression is used when `dst_pan_id` is the PAN ID of this
    /// node. The frame is sent after a clear channel assessment.
    pub fn send_data_frame(
        &mut self,
        frame_version: FrameVersion,
        dst_pan_id: u16,
        dst_address: Address,
        payload: &[u8],
        sequence_number: Option<u8>,
        ack_request: bool,
    ) -> Result<()> {
        let header = DataHeaderRepr {
            frame_version,
            sequence_number,
            ack_request,
            dst_pan_id,
            dst_address,
            src_pan_id: self.radio.pan_id(),
            src_address: self.source_address(),
        };

        let mut buffer = [0u8; MAX_FRAME_LEN];
        let len = DataFrameRepr::new(header, payload).emit(&mut buffer)?;

        debug!("Sending {} bytes to {}", len, dst_address);
        self.radio.transmit(&buffer[..len], true)?;

        Ok(())
    }
}

/// Build the Enhanced Acknowledgment for `frame` into `ack` and return its
/// length. Meant to be called from the radio callback that answers frames
/// requesting an acknowledgment.
pub fn enhanced_ack_generator(frame: &[u8], ack: &mut [u8]) -> Result<usize> {
    Ok(build_enhanced_ack(frame, ack)?)
}
