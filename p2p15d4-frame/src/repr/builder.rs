use super::DataHeaderRepr;
use crate::{Address, FrameVersion, Result};

/// Marker for an IEEE 802.15.4-2003 Data frame.
pub struct Data2003;
/// Marker for an IEEE 802.15.4-2015 Data frame.
pub struct Data2015;

/// A helper for building IEEE 802.15.4 Data frame headers.
pub struct FrameBuilder<T> {
    header: DataHeaderRepr,
    r#type: core::marker::PhantomData<T>,
}

impl FrameBuilder<Data2003> {
    /// Create a new builder for a 2003 Data frame. These always carry a
    /// sequence number.
    pub fn new_data_2003(sequence_number: u8) -> Self {
        Self {
            header: DataHeaderRepr {
                frame_version: FrameVersion::Ieee802154_2003,
                sequence_number: Some(sequence_number),
                ack_request: false,
                dst_pan_id: 0xffff,
                dst_address: Address::BROADCAST,
                src_pan_id: 0xffff,
                src_address: Address::Absent,
            },
            r#type: core::marker::PhantomData,
        }
    }
}

impl FrameBuilder<Data2015> {
    /// Create a new builder for a 2015 Data frame. The sequence number is
    /// suppressed until one is set.
    pub fn new_data_2015() -> Self {
        Self {
            header: DataHeaderRepr {
                frame_version: FrameVersion::Ieee802154_2015,
                sequence_number: None,
                ack_request: false,
                dst_pan_id: 0xffff,
                dst_address: Address::BROADCAST,
                src_pan_id: 0xffff,
                src_address: Address::Absent,
            },
            r#type: core::marker::PhantomData,
        }
    }

    /// Suppress the sequence number.
    pub fn suppress_sequence_number(mut self) -> Self {
        self.header.sequence_number = None;
        self
    }
}

impl<T> FrameBuilder<T> {
    /// Set the frame sequence number.
    ///
    /// # Note
    /// On a 2015 frame this disables sequence number suppression.
    pub fn set_sequence_number(mut self, sequence_number: u8) -> Self {
        self.header.sequence_number = Some(sequence_number);
        self
    }

    /// Set the acknowledgment request field.
    pub fn set_ack_request(mut self, ack_request: bool) -> Self {
        self.header.ack_request = ack_request;
        self
    }

    /// Set the destination PAN ID and address.
    ///
    /// # Note
    /// Based on the address, the addressing mode will be set.
    pub fn set_dst(mut self, pan_id: u16, address: Address) -> Self {
        self.header.dst_pan_id = pan_id;
        self.header.dst_address = address;
        self
    }

    /// Set the source PAN ID and address. An extended address is expected in
    /// the byte order the radio reports it in.
    ///
    /// # Note
    /// PAN ID compression is enabled when the source PAN ID equals the
    /// destination PAN ID.
    pub fn set_src(mut self, pan_id: u16, address: Address) -> Self {
        self.header.src_pan_id = pan_id;
        self.header.src_address = address;
        self
    }

    /// Return the header.
    ///
    /// # Errors
    ///
    /// See [`DataHeaderRepr::validate`].
    pub fn finalize(self) -> Result<DataHeaderRepr> {
        self.header.validate()?;
        Ok(self.header)
    }
}
