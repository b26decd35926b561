//! Addressing fields and the conditional header layout.

use super::{FrameControl, FrameVersion};

/// An IEEE 802.15.4 address.
///
/// Short addresses are held as host integers and go on the wire little-endian.
/// Extended addresses are held as the eight bytes handed over by the radio
/// driver, which reports them most-significant byte first.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum Address {
    /// No address.
    Absent,
    /// A 16-bit short address.
    Short(u16),
    /// A 64-bit extended address.
    Extended([u8; 8]),
}

impl Address {
    /// The broadcast address.
    pub const BROADCAST: Address = Address::Short(0xffff);

    /// Query whether the address is an unicast address.
    pub fn is_unicast(&self) -> bool {
        !self.is_broadcast()
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Return the [`AddressingMode`] matching this address.
    pub fn mode(&self) -> AddressingMode {
        AddressingMode::from(*self)
    }

    /// Return the length of the address in octets.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.mode().size()
    }

    /// Returns `true` if there is no address.
    pub fn is_empty(&self) -> bool {
        matches!(self, Address::Absent)
    }
}

impl From<Address> for AddressingMode {
    fn from(value: Address) -> Self {
        match value {
            Address::Absent => AddressingMode::Absent,
            Address::Short(_) => AddressingMode::Short,
            Address::Extended(_) => AddressingMode::Extended,
        }
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Address::Absent => write!(f, "absent"),
            Address::Short(value) => write!(f, "{:02x}:{:02x}", value >> 8, value & 0xff),
            Address::Extended(value) => {
                for (i, b) in value.iter().enumerate() {
                    if i != 0 {
                        write!(f, ":")?;
                    }
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }
    }
}

/// IEEE 802.15.4 addressing mode.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum AddressingMode {
    /// The address field is not present.
    Absent = 0b00,
    /// Reserved value, no address field.
    Reserved = 0b01,
    /// A 16-bit short address.
    Short = 0b10,
    /// A 64-bit extended address.
    Extended = 0b11,
}

impl AddressingMode {
    /// Return the size of the address field in octets.
    pub const fn size(&self) -> usize {
        match self {
            Self::Absent | Self::Reserved => 0,
            Self::Short => 2,
            Self::Extended => 8,
        }
    }

    /// Returns `true` if an address field (and its PAN ID) is carried.
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Short | Self::Extended)
    }
}

impl From<u8> for AddressingMode {
    fn from(value: u8) -> Self {
        match value & 0b11 {
            0b00 => Self::Absent,
            0b01 => Self::Reserved,
            0b10 => Self::Short,
            _ => Self::Extended,
        }
    }
}

impl core::fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Absent => write!(f, "None"),
            Self::Reserved => write!(f, "Reserved"),
            Self::Short => write!(f, "Short"),
            Self::Extended => write!(f, "Long"),
        }
    }
}

/// The shape of the header following the Frame Control field.
///
/// Every component that walks a header derives its field positions from this
/// one type, so building, acknowledging and decoding agree on the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeaderLayout {
    /// The sequence number byte is present.
    pub sequence_number: bool,
    /// The destination PAN ID is present.
    pub dst_pan_id: bool,
    /// The destination address mode.
    pub dst_addressing_mode: AddressingMode,
    /// The source PAN ID is present.
    pub src_pan_id: bool,
    /// The source address mode.
    pub src_addressing_mode: AddressingMode,
}

impl HeaderLayout {
    /// Derive the layout from the Frame Control field values.
    pub fn new(
        frame_version: FrameVersion,
        sequence_number_suppression: bool,
        pan_id_compression: bool,
        dst_addressing_mode: AddressingMode,
        src_addressing_mode: AddressingMode,
    ) -> Self {
        Self {
            sequence_number: !(frame_version == FrameVersion::Ieee802154_2015
                && sequence_number_suppression),
            dst_pan_id: dst_addressing_mode.is_present(),
            dst_addressing_mode,
            src_pan_id: !pan_id_compression,
            src_addressing_mode,
        }
    }

    /// Derive the layout from a Frame Control field.
    pub fn from_frame_control<T: AsRef<[u8]>>(fc: &FrameControl<T>) -> Self {
        Self::new(
            fc.frame_version(),
            fc.sequence_number_suppression(),
            fc.pan_id_compression(),
            fc.dst_addressing_mode(),
            fc.src_addressing_mode(),
        )
    }

    /// Return the length of the fields after the Frame Control field.
    pub fn fields_len(&self) -> usize {
        let mut len = 0;
        if self.sequence_number {
            len += 1;
        }
        if self.dst_pan_id {
            len += 2;
        }
        len += self.dst_addressing_mode.size();
        if self.src_pan_id {
            len += 2;
        }
        len + self.src_addressing_mode.size()
    }

    /// Return the length of the header, Frame Control field included.
    pub fn header_len(&self) -> usize {
        2 + self.fields_len()
    }
}
