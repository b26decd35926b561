//! Diagnostic decoding of received frames.

use core::fmt::{self, Display, Formatter};

use super::{AddressingFieldsRepr, FrameControlRepr};
use crate::cursor::Reader;
use crate::{
    Address, Error, FrameControl, FrameType, FrameVersion, LinkQuality, ReceivedFrame, Result,
};

const SEPARATOR: &str = "---------------------------------------------------------------------";

/// The decoded fields of a Data frame or an Enhanced Acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameBody<'f> {
    /// The sequence number, `None` when suppressed.
    pub sequence_number: Option<u8>,
    /// The addressing fields.
    pub addressing: AddressingFieldsRepr,
    /// The payload, without the filler byte added by the receiver.
    pub payload: &'f [u8],
    /// RSSI and LQI of the reception.
    pub link_quality: LinkQuality,
}

/// What could be decoded past the Frame Control field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameContent<'f> {
    /// Security or Information Elements are in use. Nothing past the Frame
    /// Control field was read.
    Unsupported,
    /// A frame type other than Data and Acknowledgment.
    UnsupportedFrameType,
    /// A Data frame.
    Data(FrameBody<'f>),
    /// A 2015 Enhanced Acknowledgment.
    EnhancedAck(FrameBody<'f>),
    /// A 2003 or 2006 immediate acknowledgment.
    ImmAck {
        /// The acknowledged sequence number.
        sequence_number: u8,
        /// RSSI and LQI of the reception.
        link_quality: LinkQuality,
    },
}

/// A diagnostic record of a received frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameReport<'f> {
    /// The Frame Control field.
    pub frame_control: FrameControlRepr,
    /// The decoded fields.
    pub content: FrameContent<'f>,
}

impl<'f> FrameReport<'f> {
    /// Decode a buffer delivered by the receiver.
    ///
    /// Frames using Security or Information Elements and frames of other types
    /// than Data and Acknowledgment are not errors: they are reported through
    /// [`FrameContent`]. Security and Information Elements are recognised
    /// from the Frame Control field alone, before the length prefix is
    /// checked.
    ///
    /// # Errors
    ///
    /// Returns an error when the buffer ends before the Frame Control field,
    /// when the length prefix does not fit the buffer or when the header runs
    /// past the end of the frame.
    pub fn parse(buffer: &'f [u8]) -> Result<Self> {
        let fc = FrameControl::new(buffer.get(1..3).ok_or(Error::BufferTooShort)?)?;
        let frame_control = FrameControlRepr::parse(&fc);

        if frame_control.security_enabled || frame_control.information_elements_present {
            return Ok(Self {
                frame_control,
                content: FrameContent::Unsupported,
            });
        }

        let frame = ReceivedFrame::new(buffer)?;

        let content = match (frame_control.frame_type, frame_control.frame_version) {
            (FrameType::Data, _) => FrameContent::Data(Self::parse_body(buffer, &frame_control)?),
            (FrameType::Ack, FrameVersion::Ieee802154_2015) => {
                FrameContent::EnhancedAck(Self::parse_body(buffer, &frame_control)?)
            }
            (FrameType::Ack, _) => {
                let mut r = Reader::at(frame.content_without_filler(), 3);
                FrameContent::ImmAck {
                    sequence_number: r.read_u8()?,
                    link_quality: frame.link_quality(),
                }
            }
            _ => FrameContent::UnsupportedFrameType,
        };

        Ok(Self {
            frame_control,
            content,
        })
    }

    fn parse_body(buffer: &'f [u8], frame_control: &FrameControlRepr) -> Result<FrameBody<'f>> {
        let frame = ReceivedFrame::new_unchecked(buffer);
        let layout = frame_control.layout();

        let content: &'f [u8] = &buffer[..frame.length() - 2];
        let mut r = Reader::at(content, 3);

        let sequence_number = if layout.sequence_number {
            Some(r.read_u8()?)
        } else {
            None
        };
        let addressing = AddressingFieldsRepr::parse(&mut r, &layout)?;

        Ok(FrameBody {
            sequence_number,
            addressing,
            payload: r.rest(),
            link_quality: frame.link_quality(),
        })
    }

    /// Return the RSSI and LQI values, when the frame was decoded far enough.
    pub fn link_quality(&self) -> Option<LinkQuality> {
        match self.content {
            FrameContent::Data(body) | FrameContent::EnhancedAck(body) => Some(body.link_quality),
            FrameContent::ImmAck { link_quality, .. } => Some(link_quality),
            FrameContent::Unsupported | FrameContent::UnsupportedFrameType => None,
        }
    }
}

/// A hex and ASCII dump, twelve bytes per line.
pub struct HexDump<'a>(pub &'a [u8]);

impl HexDump<'_> {
    /// Number of bytes on one line.
    pub const BYTES_PER_LINE: usize = 12;
}

impl Display for HexDump<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, line) in self.0.chunks(Self::BYTES_PER_LINE).enumerate() {
            if i == 0 {
                write!(f, "Data dump: ")?;
            } else {
                write!(f, "           ")?;
            }

            for b in line {
                write!(f, "{b:02x} ")?;
            }
            for _ in line.len()..Self::BYTES_PER_LINE {
                write!(f, "   ")?;
            }

            write!(f, "|")?;
            for &b in line {
                let c = if (32..=126).contains(&b) { b as char } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f, "|")?;
        }

        Ok(())
    }
}

/// Display an extended source address in the byte order of the destination,
/// the way the radio reports its own address.
struct SourceAddress(Address);

impl Display for SourceAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Address::Extended(mut raw) => {
                raw.reverse();
                write!(f, "{}", Address::Extended(raw))
            }
            address => write!(f, "{address}"),
        }
    }
}

struct PanId(u16);

impl Display for PanId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}:{:02x}", self.0 >> 8, self.0 & 0xff)
    }
}

fn fmt_addressing(f: &mut Formatter<'_>, addressing: &AddressingFieldsRepr) -> fmt::Result {
    match addressing.dst_address {
        Address::Absent => writeln!(f, "No DST address information present")?,
        address => {
            if let Some(pan_id) = addressing.dst_pan_id {
                writeln!(f, "DST PAN: {}", PanId(pan_id))?;
            }

            write!(f, "DST ADDR: {address}")?;
            if address.is_broadcast() {
                if addressing.dst_pan_id == Some(0xffff) {
                    write!(f, " (global Broadcast)")?;
                } else {
                    write!(f, " (local Broadcast)")?;
                }
            }
            writeln!(f)?;
        }
    }

    match (addressing.src_pan_id, addressing.dst_pan_id) {
        (Some(pan_id), _) => writeln!(f, "SRC PAN: {} (inter PAN)", PanId(pan_id))?,
        (None, Some(pan_id)) => writeln!(f, "SRC PAN: {} (intra PAN)", PanId(pan_id))?,
        (None, None) => {}
    }

    match addressing.src_address {
        Address::Absent => writeln!(f, "No SRC address information present."),
        address => writeln!(f, "SRC ADDR: {}", SourceAddress(address)),
    }
}

fn fmt_sequence_number(f: &mut Formatter<'_>, sequence_number: Option<u8>) -> fmt::Result {
    match sequence_number {
        Some(sequence_number) => writeln!(f, "Sequence number: {sequence_number}"),
        None => writeln!(f, "Sequence number suppressed."),
    }
}

fn fmt_link_quality(f: &mut Formatter<'_>, link_quality: &LinkQuality) -> fmt::Result {
    writeln!(f, "----- Transmission Info -----")?;
    writeln!(f, "RSSI: {}", link_quality.rssi)?;
    writeln!(f, "LQI: {}", link_quality.lqi)
}

impl Display for FrameReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        write!(f, "{}", self.frame_control)?;

        if let FrameContent::Unsupported = self.content {
            writeln!(
                f,
                "Security and Information Elements are currently not supported."
            )?;
            return writeln!(f, "{SEPARATOR}");
        }

        if self.frame_control.reserved {
            writeln!(f, "Reserved bit is set...")?;
        }

        writeln!(
            f,
            "------ {} Packet ------",
            self.frame_control.frame_type_name()
        )?;

        match &self.content {
            FrameContent::Data(body) => {
                fmt_sequence_number(f, body.sequence_number)?;
                fmt_addressing(f, &body.addressing)?;
                writeln!(f, "Data length: {}", body.payload.len())?;
                write!(f, "{}", HexDump(body.payload))?;
                fmt_link_quality(f, &body.link_quality)?;
            }
            FrameContent::EnhancedAck(body) => {
                fmt_sequence_number(f, body.sequence_number)?;
                fmt_addressing(f, &body.addressing)?;
                if body.payload.is_empty() {
                    writeln!(f, "ACK contains no data.")?;
                } else {
                    writeln!(f, "ACK contains data.")?;
                    writeln!(f, "Data length: {}", body.payload.len())?;
                    write!(f, "{}", HexDump(body.payload))?;
                }
                fmt_link_quality(f, &body.link_quality)?;
            }
            FrameContent::ImmAck {
                sequence_number,
                link_quality,
            } => {
                fmt_sequence_number(f, Some(*sequence_number))?;
                fmt_link_quality(f, link_quality)?;
            }
            FrameContent::UnsupportedFrameType => {
                writeln!(f, "Printing this packets is currently not supported.")?;
            }
            FrameContent::Unsupported => {}
        }

        writeln!(f, "{SEPARATOR}")
    }
}
