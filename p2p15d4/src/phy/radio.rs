use super::{Channel, Error};

/// The operations the link needs from an IEEE 802.15.4 transceiver driver.
///
/// Frame buffers start with the length prefix, see [`crate::frame`]. The
/// driver appends the FCS on transmission.
pub trait Radio {
    /// Transmit a length-prefixed frame, optionally after a clear channel
    /// assessment.
    fn transmit(&mut self, frame: &[u8], cca: bool) -> Result<(), Error>;

    /// Enter receive mode.
    fn receive(&mut self) -> Result<(), Error>;

    /// Act as PAN coordinator.
    fn set_coordinator(&mut self, enable: bool);

    /// Receive frames regardless of their destination.
    fn set_promiscuous(&mut self, enable: bool);

    /// Keep the receiver on between transmissions.
    fn set_rx_when_idle(&mut self, enable: bool);

    fn set_pan_id(&mut self, pan_id: u16);

    fn pan_id(&self) -> u16;

    fn set_short_address(&mut self, address: u16);

    /// Returns `0xffff` when no short address is assigned.
    fn short_address(&self) -> u16;

    /// Set the extended address used for address filtering. The hardware
    /// expects the EUI-64 in reversed byte order.
    fn set_extended_address(&mut self, address: [u8; 8]);

    /// Returns the extended address as it was set, in reversed byte order.
    fn extended_address(&self) -> [u8; 8];

    fn set_channel(&mut self, channel: Channel);

    /// Set the transmit power in dBm.
    fn set_tx_power(&mut self, dbm: i8);

    /// Returns the factory-programmed EUI-64 of the device.
    fn ieee802154_address(&self) -> [u8; 8];
}
