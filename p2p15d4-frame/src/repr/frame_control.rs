use crate::{AddressingMode, FrameControl, FrameType, FrameVersion, HeaderLayout};

/// A high-level representation of the IEEE 802.15.4 Frame Control field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct FrameControlRepr {
    /// Frame type.
    pub frame_type: FrameType,
    /// Security enabled.
    pub security_enabled: bool,
    /// Frame pending.
    pub frame_pending: bool,
    /// Acknowledgment request.
    pub ack_request: bool,
    /// PAN ID compression.
    pub pan_id_compression: bool,
    /// Reserved bit.
    pub reserved: bool,
    /// Sequence number suppression.
    pub sequence_number_suppression: bool,
    /// Information elements present.
    pub information_elements_present: bool,
    /// Destination addressing mode.
    pub dst_addressing_mode: AddressingMode,
    /// Frame version.
    pub frame_version: FrameVersion,
    /// Source addressing mode.
    pub src_addressing_mode: AddressingMode,
}

impl FrameControlRepr {
    /// Parse an IEEE 802.15.4 Frame Control field.
    pub fn parse<T: AsRef<[u8]>>(fc: &FrameControl<T>) -> Self {
        Self {
            frame_type: fc.frame_type(),
            security_enabled: fc.security_enabled(),
            frame_pending: fc.frame_pending(),
            ack_request: fc.ack_request(),
            pan_id_compression: fc.pan_id_compression(),
            reserved: fc.reserved(),
            sequence_number_suppression: fc.sequence_number_suppression(),
            information_elements_present: fc.information_elements_present(),
            dst_addressing_mode: fc.dst_addressing_mode(),
            frame_version: fc.frame_version(),
            src_addressing_mode: fc.src_addressing_mode(),
        }
    }

    /// Unpack a 16-bit Frame Control value.
    pub fn from_bits(raw: u16) -> Self {
        Self::parse(&FrameControl::new_unchecked(raw.to_le_bytes()))
    }

    /// Pack into a 16-bit Frame Control value.
    pub fn to_bits(&self) -> u16 {
        let mut fc = FrameControl::new_unchecked([0u8; 2]);
        self.emit(&mut fc);
        fc.bits()
    }

    /// Return the length of the frame control field when emitted into a buffer.
    pub const fn buffer_len(&self) -> usize {
        2
    }

    /// Emit the frame control field into a buffer.
    pub fn emit<T: AsRef<[u8]> + AsMut<[u8]>>(&self, fc: &mut FrameControl<T>) {
        fc.set_frame_type(self.frame_type);
        fc.set_security_enabled(self.security_enabled);
        fc.set_frame_pending(self.frame_pending);
        fc.set_ack_request(self.ack_request);
        fc.set_pan_id_compression(self.pan_id_compression);
        fc.set_reserved(self.reserved);
        fc.set_sequence_number_suppression(self.sequence_number_suppression);
        fc.set_information_elements_present(self.information_elements_present);
        fc.set_dst_addressing_mode(self.dst_addressing_mode);
        fc.set_frame_version(self.frame_version);
        fc.set_src_addressing_mode(self.src_addressing_mode);
    }

    /// Return the layout of the header fields this Frame Control field
    /// announces.
    pub fn layout(&self) -> HeaderLayout {
        HeaderLayout::new(
            self.frame_version,
            self.sequence_number_suppression,
            self.pan_id_compression,
            self.dst_addressing_mode,
            self.src_addressing_mode,
        )
    }

    /// Return the name of the frame type, telling enhanced and immediate
    /// acknowledgments apart.
    pub fn frame_type_name(&self) -> &'static str {
        match (self.frame_type, self.frame_version) {
            (FrameType::Ack, FrameVersion::Ieee802154_2015) => "Enh-ACK",
            (FrameType::Ack, _) => "Imm-ACK",
            (FrameType::Beacon, _) => "Beacon",
            (FrameType::Data, _) => "Data",
            (FrameType::MacCommand, _) => "MAC CMD",
            (FrameType::Reserved, _) => "Reserved",
            (FrameType::Multipurpose, _) => "Multipurpose (2015)",
            (FrameType::Fragment, _) => "Fragment (2015)",
            (FrameType::Extended, _) => "Extended (2015)",
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

impl core::fmt::Display for FrameControlRepr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "------ Frame Control Field ------")?;
        writeln!(f, "Frame type:                   {}", self.frame_type_name())?;
        writeln!(f, "Security Enabled:             {}", yes_no(self.security_enabled))?;
        writeln!(f, "Frame pending:                {}", yes_no(self.frame_pending))?;
        writeln!(f, "Acknowledge request:          {}", yes_no(self.ack_request))?;
        writeln!(f, "PAN ID Compression:           {}", yes_no(self.pan_id_compression))?;
        writeln!(f, "Reserved:                     {}", yes_no(self.reserved))?;
        if self.frame_version == FrameVersion::Ieee802154_2015 {
            writeln!(
                f,
                "Sequence Number Suppression:  {}",
                yes_no(self.sequence_number_suppression)
            )?;
            writeln!(
                f,
                "Information Elements Present: {}",
                yes_no(self.information_elements_present)
            )?;
        }
        writeln!(f, "Destination addressing mode:  {}", self.dst_addressing_mode)?;
        writeln!(f, "Frame version:                {}", self.frame_version)?;
        writeln!(f, "Source addressing mode:       {}", self.src_addressing_mode)
    }
}
