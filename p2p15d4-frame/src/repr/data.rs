use crate::cursor::Writer;
use crate::{Address, AddressingFieldsRepr, FrameControlRepr, FrameType, FrameVersion};
use crate::{Error, Result, FCS_LEN, MAX_PSDU_LEN};

/// The header of an outbound IEEE 802.15.4 Data frame.
///
/// PAN ID compression and sequence number suppression are not part of the
/// representation: they follow from the PAN IDs and the sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct DataHeaderRepr {
    /// The revision of the standard to build for, 2003 or 2015.
    pub frame_version: FrameVersion,
    /// The sequence number, `None` to suppress it (2015 only).
    pub sequence_number: Option<u8>,
    /// Request an acknowledgment.
    pub ack_request: bool,
    /// Destination PAN identifier.
    pub dst_pan_id: u16,
    /// Destination address.
    pub dst_address: Address,
    /// Source PAN identifier.
    pub src_pan_id: u16,
    /// Source address, with an extended address in the byte order reported by
    /// the radio.
    pub src_address: Address,
}

impl DataHeaderRepr {
    /// Check that a header can be built for the requested revision.
    pub fn validate(&self) -> Result<()> {
        match (self.frame_version, self.sequence_number) {
            (FrameVersion::Ieee802154_2003, None) => Err(Error::MissingSequenceNumber),
            (FrameVersion::Ieee802154_2003 | FrameVersion::Ieee802154_2015, _) => Ok(()),
            _ => Err(Error::UnsupportedFrameVersion),
        }
    }

    /// Returns `true` when both ends are in the same PAN.
    pub fn pan_id_compression(&self) -> bool {
        self.dst_pan_id == self.src_pan_id
    }

    /// Return the Frame Control field of this header.
    pub fn frame_control(&self) -> FrameControlRepr {
        FrameControlRepr {
            frame_type: FrameType::Data,
            security_enabled: false,
            frame_pending: false,
            ack_request: self.ack_request,
            pan_id_compression: self.pan_id_compression(),
            reserved: false,
            sequence_number_suppression: self.frame_version == FrameVersion::Ieee802154_2015
                && self.sequence_number.is_none(),
            information_elements_present: false,
            dst_addressing_mode: self.dst_address.mode(),
            frame_version: self.frame_version,
            src_addressing_mode: self.src_address.mode(),
        }
    }

    /// Return the addressing fields as they are laid out in the header.
    pub fn addressing(&self) -> AddressingFieldsRepr {
        let layout = self.frame_control().layout();
        AddressingFieldsRepr {
            dst_pan_id: layout.dst_pan_id.then_some(self.dst_pan_id),
            dst_address: self.dst_address,
            src_pan_id: layout.src_pan_id.then_some(self.src_pan_id),
            src_address: self.src_address,
        }
    }

    /// Return the length of the header when emitted into a buffer.
    pub fn buffer_len(&self) -> usize {
        self.frame_control().layout().header_len()
    }

    /// Emit the header at the start of `buffer` and return its length.
    ///
    /// # Errors
    ///
    /// Returns an error when the header is not valid for its revision, see
    /// [`DataHeaderRepr::validate`], or when `buffer` is too short.
    pub fn emit(&self, buffer: &mut [u8]) -> Result<usize> {
        self.validate()?;

        let mut w = Writer::at(buffer, 0);
        w.write_u16(self.frame_control().to_bits())?;

        if let Some(sequence_number) = self.sequence_number {
            w.write_u8(sequence_number)?;
        }

        self.addressing().emit(&mut w)?;

        Ok(w.position())
    }
}

/// An outbound Data frame: a header followed by a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataFrameRepr<'p> {
    /// The frame header.
    pub header: DataHeaderRepr,
    /// The frame payload.
    pub payload: &'p [u8],
}

impl<'p> DataFrameRepr<'p> {
    /// Create a new Data frame.
    pub fn new(header: DataHeaderRepr, payload: &'p [u8]) -> Self {
        Self { header, payload }
    }

    /// Return the value of the length prefix: header, payload and FCS.
    pub fn psdu_len(&self) -> usize {
        self.header.buffer_len() + self.payload.len() + FCS_LEN
    }

    /// Return the number of bytes written by [`DataFrameRepr::emit`].
    pub fn buffer_len(&self) -> usize {
        1 + self.header.buffer_len() + self.payload.len()
    }

    /// Emit `[length][header][payload]` into `buffer` and return the number of
    /// bytes written. The FCS is counted in the length but left to the radio.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FrameTooLong`] when the frame does not fit in a PSDU,
    /// and the errors of [`DataHeaderRepr::emit`].
    pub fn emit(&self, buffer: &mut [u8]) -> Result<usize> {
        let psdu_len = self.psdu_len();
        if psdu_len > MAX_PSDU_LEN {
            return Err(Error::FrameTooLong);
        }

        let header_len = self
            .header
            .emit(buffer.get_mut(1..).ok_or(Error::BufferTooShort)?)?;

        let mut w = Writer::at(buffer, 1 + header_len);
        w.write_slice(self.payload)?;
        let written = w.position();

        buffer[0] = psdu_len as u8;

        Ok(written)
    }
}
