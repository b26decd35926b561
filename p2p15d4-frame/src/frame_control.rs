//! IEEE 802.15.4 Frame Control field readers and writers.

use super::AddressingMode;
use super::{Error, Result};

/// IEEE 802.15.4 frame type.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum FrameType {
    /// Beacon frame.
    Beacon = 0b000,
    /// Data frame.
    Data = 0b001,
    /// Acknowledgment frame, immediate or enhanced depending on the version.
    Ack = 0b010,
    /// MAC command frame.
    MacCommand = 0b011,
    /// Reserved value.
    Reserved = 0b100,
    /// Multipurpose frame (2015).
    Multipurpose = 0b101,
    /// Fragment or Frak frame (2015).
    Fragment = 0b110,
    /// Extended frame (2015).
    Extended = 0b111,
}

impl From<u8> for FrameType {
    fn from(value: u8) -> Self {
        match value & 0b111 {
            0b000 => Self::Beacon,
            0b001 => Self::Data,
            0b010 => Self::Ack,
            0b011 => Self::MacCommand,
            0b100 => Self::Reserved,
            0b101 => Self::Multipurpose,
            0b110 => Self::Fragment,
            _ => Self::Extended,
        }
    }
}

impl core::fmt::Display for FrameType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Beacon => write!(f, "Beacon"),
            Self::Data => write!(f, "Data"),
            Self::Ack => write!(f, "ACK"),
            Self::MacCommand => write!(f, "MAC CMD"),
            Self::Reserved => write!(f, "Reserved"),
            Self::Multipurpose => write!(f, "Multipurpose (2015)"),
            Self::Fragment => write!(f, "Fragment (2015)"),
            Self::Extended => write!(f, "Extended (2015)"),
        }
    }
}

/// IEEE 802.15.4 frame version.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum FrameVersion {
    /// IEEE 802.15.4-2003.
    Ieee802154_2003 = 0b00,
    /// IEEE 802.15.4-2006.
    Ieee802154_2006 = 0b01,
    /// IEEE 802.15.4-2015.
    Ieee802154_2015 = 0b10,
    /// Reserved value.
    Reserved = 0b11,
}

impl From<u8> for FrameVersion {
    fn from(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Self::Ieee802154_2003,
            0b01 => Self::Ieee802154_2006,
            0b10 => Self::Ieee802154_2015,
            _ => Self::Reserved,
        }
    }
}

impl core::fmt::Display for FrameVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ieee802154_2003 => write!(f, "2003"),
            Self::Ieee802154_2006 => write!(f, "2006"),
            Self::Ieee802154_2015 => write!(f, "2015"),
            Self::Reserved => write!(f, "Reserved"),
        }
    }
}

bitflags::bitflags! {
    /// The one-bit fields of the Frame Control field, at their position in the
    /// 16-bit value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FrameControlFlags: u16 {
        /// Security enabled.
        const SECURITY_ENABLED = 1 << 3;
        /// Frame pending.
        const FRAME_PENDING = 1 << 4;
        /// Acknowledgment request.
        const ACK_REQUEST = 1 << 5;
        /// PAN ID compression.
        const PAN_ID_COMPRESSION = 1 << 6;
        /// Reserved bit.
        const RESERVED = 1 << 7;
        /// Sequence number suppression (2015).
        const SEQUENCE_NUMBER_SUPPRESSION = 1 << 8;
        /// Information elements present (2015).
        const INFORMATION_ELEMENTS_PRESENT = 1 << 9;
    }
}

const FRAME_TYPE_MASK: u16 = 0b111;
const DST_ADDRESSING_MODE_SHIFT: u16 = 10;
const FRAME_VERSION_SHIFT: u16 = 12;
const SRC_ADDRESSING_MODE_SHIFT: u16 = 14;

/// A reader/writer for the IEEE 802.15.4 Frame Control field.
#[derive(Debug, Clone, Copy)]
pub struct FrameControl<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> FrameControl<T> {
    /// Create a new [`FrameControl`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self> {
        let fc = Self::new_unchecked(buffer);

        if !fc.check_len() {
            return Err(Error::BufferTooShort);
        }

        Ok(fc)
    }

    /// Returns `false` if the buffer is too short to contain the Frame Control field.
    fn check_len(&self) -> bool {
        self.buffer.as_ref().len() >= 2
    }

    /// Create a new [`FrameControl`] reader/writer from a given buffer without length checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the raw 16-bit value.
    pub fn bits(&self) -> u16 {
        let b = &self.buffer.as_ref()[..2];
        u16::from_le_bytes([b[0], b[1]])
    }

    /// Return the [`FrameType`] field.
    pub fn frame_type(&self) -> FrameType {
        FrameType::from((self.bits() & FRAME_TYPE_MASK) as u8)
    }

    /// Return the one-bit fields.
    pub fn flags(&self) -> FrameControlFlags {
        FrameControlFlags::from_bits_truncate(self.bits())
    }

    /// Returns `true` when the security enabled field is set.
    pub fn security_enabled(&self) -> bool {
        self.flags().contains(FrameControlFlags::SECURITY_ENABLED)
    }

    /// Returns `true` when the frame pending field is set.
    pub fn frame_pending(&self) -> bool {
        self.flags().contains(FrameControlFlags::FRAME_PENDING)
    }

    /// Returns `true` when the acknowledgement request field is set.
    pub fn ack_request(&self) -> bool {
        self.flags().contains(FrameControlFlags::ACK_REQUEST)
    }

    /// Returns `true` when the PAN ID compression field is set.
    pub fn pan_id_compression(&self) -> bool {
        self.flags().contains(FrameControlFlags::PAN_ID_COMPRESSION)
    }

    /// Returns `true` when the reserved bit is set.
    pub fn reserved(&self) -> bool {
        self.flags().contains(FrameControlFlags::RESERVED)
    }

    /// Returns `true` when the sequence number suppression field is set.
    pub fn sequence_number_suppression(&self) -> bool {
        self.flags()
            .contains(FrameControlFlags::SEQUENCE_NUMBER_SUPPRESSION)
    }

    /// Returns `true` when the information element field is set.
    pub fn information_elements_present(&self) -> bool {
        self.flags()
            .contains(FrameControlFlags::INFORMATION_ELEMENTS_PRESENT)
    }

    /// Return the Destination [`AddressingMode`].
    pub fn dst_addressing_mode(&self) -> AddressingMode {
        AddressingMode::from((self.bits() >> DST_ADDRESSING_MODE_SHIFT) as u8)
    }

    /// Return the Source [`AddressingMode`].
    pub fn src_addressing_mode(&self) -> AddressingMode {
        AddressingMode::from((self.bits() >> SRC_ADDRESSING_MODE_SHIFT) as u8)
    }

    /// Return the [`FrameVersion`].
    pub fn frame_version(&self) -> FrameVersion {
        FrameVersion::from((self.bits() >> FRAME_VERSION_SHIFT) as u8)
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> FrameControl<T> {
    /// Set the raw 16-bit value.
    pub fn set_bits(&mut self, raw: u16) {
        self.buffer.as_mut()[..2].copy_from_slice(&raw.to_le_bytes());
    }

    fn set_field(&mut self, mask: u16, shift: u16, value: u16) {
        let raw = (self.bits() & !(mask << shift)) | ((value & mask) << shift);
        self.set_bits(raw);
    }

    fn set_flag(&mut self, flag: FrameControlFlags, value: bool) {
        let mut flags = FrameControlFlags::from_bits_retain(self.bits());
        flags.set(flag, value);
        self.set_bits(flags.bits());
    }

    /// Set the frame type field.
    pub fn set_frame_type(&mut self, frame_type: FrameType) {
        self.set_field(FRAME_TYPE_MASK, 0, frame_type as u16);
    }

    /// Set the security enabled field.
    pub fn set_security_enabled(&mut self, security_enabled: bool) {
        self.set_flag(FrameControlFlags::SECURITY_ENABLED, security_enabled);
    }

    /// Set the frame pending field.
    pub fn set_frame_pending(&mut self, frame_pending: bool) {
        self.set_flag(FrameControlFlags::FRAME_PENDING, frame_pending);
    }

    /// Set the acknowledgement request field.
    pub fn set_ack_request(&mut self, ack_request: bool) {
        self.set_flag(FrameControlFlags::ACK_REQUEST, ack_request);
    }

    /// Set the PAN ID compression field.
    pub fn set_pan_id_compression(&mut self, pan_id_compression: bool) {
        self.set_flag(FrameControlFlags::PAN_ID_COMPRESSION, pan_id_compression);
    }

    /// Set the reserved bit.
    pub fn set_reserved(&mut self, reserved: bool) {
        self.set_flag(FrameControlFlags::RESERVED, reserved);
    }

    /// Set the sequence number suppression field.
    pub fn set_sequence_number_suppression(&mut self, sequence_number_suppression: bool) {
        self.set_flag(
            FrameControlFlags::SEQUENCE_NUMBER_SUPPRESSION,
            sequence_number_suppression,
        );
    }

    /// Set the information element present field.
    pub fn set_information_elements_present(&mut self, information_elements_present: bool) {
        self.set_flag(
            FrameControlFlags::INFORMATION_ELEMENTS_PRESENT,
            information_elements_present,
        );
    }

    /// Set the destination addressing mode field.
    pub fn set_dst_addressing_mode(&mut self, addressing_mode: AddressingMode) {
        self.set_field(0b11, DST_ADDRESSING_MODE_SHIFT, addressing_mode as u16);
    }

    /// Set the source addressing mode field.
    pub fn set_src_addressing_mode(&mut self, addressing_mode: AddressingMode) {
        self.set_field(0b11, SRC_ADDRESSING_MODE_SHIFT, addressing_mode as u16);
    }

    /// Set the frame version field.
    pub fn set_frame_version(&mut self, frame_version: FrameVersion) {
        self.set_field(0b11, FRAME_VERSION_SHIFT, frame_version as u16);
    }
}

impl<T: AsRef<[u8]>> core::fmt::Display for FrameControl<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Frame Control")?;
        writeln!(f, "  type: {:?}", self.frame_type())?;
        writeln!(
            f,
            "  security enabled: {}",
            self.security_enabled() as usize
        )?;
        writeln!(f, "  frame pending: {}", self.frame_pending() as usize)?;
        writeln!(f, "  ack request: {}", self.ack_request() as usize)?;
        writeln!(
            f,
            "  pan id compression: {}",
            self.pan_id_compression() as usize
        )?;
        writeln!(
            f,
            "  sequence number suppression: {}",
            self.sequence_number_suppression() as usize
        )?;
        writeln!(
            f,
            "  information elements present: {}",
            self.information_elements_present() as usize
        )?;
        writeln!(f, "  dst addressing mode: {:?}", self.dst_addressing_mode())?;
        writeln!(f, "  src addressing mode: {:?}", self.src_addressing_mode())?;
        writeln!(f, "  frame version: {:?}", self.frame_version())?;
        Ok(())
    }
}
