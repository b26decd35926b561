use colored::*;
use p2p15d4_frame::*;

/// An error while reading a frame from the command line.
#[derive(Debug)]
pub enum Error {
    /// The input is not valid hex.
    Hex(hex::FromHexError),
    /// The input is not a valid frame buffer.
    Frame(p2p15d4_frame::Error),
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::Hex(err)
    }
}

impl From<p2p15d4_frame::Error> for Error {
    fn from(err: p2p15d4_frame::Error) -> Self {
        Error::Frame(err)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Hex(err) => write!(f, "invalid hex input: {err}"),
            Error::Frame(err) => write!(f, "invalid frame: {err}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

struct Writer<'b> {
    buffer: &'b mut String,
    indent: usize,
}

impl<'b> Writer<'b> {
    fn new(buffer: &'b mut String) -> Self {
        Self { buffer, indent: 0 }
    }

    fn increase_indent(&mut self) {
        self.indent += 2;
    }

    fn decrease_indent(&mut self) {
        self.indent -= 2;
    }

    fn write(&mut self, s: String) {
        self.buffer.push_str(&" ".repeat(self.indent));
        self.buffer.push_str(&s);
    }

    fn writeln(&mut self, s: String) {
        self.write(s);
        self.buffer.push('\n');
    }

    fn section(&mut self, title: &str) {
        self.writeln(title.underline().bold().to_string());
    }

    fn field(&mut self, name: &str, value: impl std::fmt::Display) {
        self.writeln(format!("{}: {}", name.bold(), value));
    }
}

/// Extended source addresses are shown in the byte order of destination
/// addresses.
fn display_source(address: Address) -> Address {
    match address {
        Address::Extended(mut raw) => {
            raw.reverse();
            Address::Extended(raw)
        }
        address => address,
    }
}

fn broadcast_note(address: Address) -> &'static str {
    if address.is_broadcast() {
        " (broadcast)"
    } else {
        ""
    }
}

pub struct FrameParser {}

impl FrameParser {
    /// Parse a hex encoded receive buffer.
    pub fn parse_hex(input: &str) -> Result<String> {
        let data = hex::decode(input)?;
        Self::parse(&data)
    }

    /// Parse a receive buffer: the length prefix, the frame, a filler byte,
    /// the RSSI and the LQI.
    pub fn parse(input: &[u8]) -> Result<String> {
        let report = FrameReport::parse(input)?;
        let mut buffer = String::new();

        let mut w = Writer::new(&mut buffer);

        let fc = report.frame_control;

        // -----------------------------------------------------------------
        // Frame Control
        // -----------------------------------------------------------------
        w.section("Frame Control");
        w.increase_indent();
        w.field(
            "frame type",
            format!(
                "{}{:?}",
                if fc.frame_version == FrameVersion::Ieee802154_2015
                    && fc.frame_type == FrameType::Ack
                {
                    "Enhanced "
                } else {
                    ""
                },
                fc.frame_type
            )
            .bright_blue(),
        );
        w.field("security", fc.security_enabled as usize);
        w.field("frame pending", fc.frame_pending as usize);
        w.field("ack request", fc.ack_request as usize);
        w.field("pan id compression", fc.pan_id_compression as usize);
        if fc.reserved {
            w.field("reserved", "1".yellow());
        }
        w.field(
            "sequence number suppression",
            fc.sequence_number_suppression as usize,
        );
        w.field(
            "information elements present",
            fc.information_elements_present as usize,
        );
        w.field(
            "dst addressing mode",
            format!("{:?}", fc.dst_addressing_mode),
        );
        w.field(
            "src addressing mode",
            format!("{:?}", fc.src_addressing_mode),
        );
        w.field(
            "frame version",
            format!("{} ({})", fc.frame_version as usize, fc.frame_version),
        );
        w.decrease_indent();

        match report.content {
            FrameContent::Unsupported => {
                w.writeln(
                    "security and information elements are not supported"
                        .red()
                        .to_string(),
                );
            }
            FrameContent::UnsupportedFrameType => {
                w.writeln(
                    format!("{} frames are not supported", fc.frame_type)
                        .red()
                        .to_string(),
                );
            }
            FrameContent::Data(body) | FrameContent::EnhancedAck(body) => {
                Self::body(&mut w, &body);
            }
            FrameContent::ImmAck {
                sequence_number,
                link_quality,
            } => {
                Self::sequence_number(&mut w, Some(sequence_number));
                Self::link_quality(&mut w, &link_quality);
            }
        }

        Ok(buffer)
    }

    /// Build the Enhanced Acknowledgment for a hex encoded receive buffer and
    /// return it hex encoded.
    pub fn enhanced_ack_hex(input: &str) -> Result<String> {
        let data = hex::decode(input)?;
        let mut ack = [0u8; MAX_ENHANCED_ACK_LEN];
        let len = build_enhanced_ack(&data, &mut ack)?;
        Ok(hex::encode(&ack[..len]))
    }

    /// Render a receive buffer the way the firmware prints it.
    pub fn report_hex(input: &str) -> Result<String> {
        let data = hex::decode(input)?;
        Ok(FrameReport::parse(&data)?.to_string())
    }

    fn body(w: &mut Writer, body: &FrameBody) {
        Self::sequence_number(w, body.sequence_number);

        // -----------------------------------------------------------------
        // Addressing
        // -----------------------------------------------------------------
        let addr = &body.addressing;
        w.section("Addressing");
        w.increase_indent();

        if let Some(dst_pan_id) = addr.dst_pan_id {
            w.writeln(format!("{}: {:x}", "dst pan id".bold(), dst_pan_id));
        }

        if addr.dst_address != Address::Absent {
            w.field(
                "dst addr",
                format!("{}{}", addr.dst_address, broadcast_note(addr.dst_address)),
            );
        }

        if let Some(src_pan_id) = addr.src_pan_id {
            w.writeln(format!("{}: {:x}", "src pan id".bold(), src_pan_id));
        }

        if addr.src_address != Address::Absent {
            w.field("src addr", display_source(addr.src_address));
        }
        w.decrease_indent();

        // -----------------------------------------------------------------
        // Payload
        // -----------------------------------------------------------------
        if !body.payload.is_empty() {
            w.section("Payload");
            w.increase_indent();
            w.writeln(format!("{:x?}", body.payload));
            w.decrease_indent();
        }

        Self::link_quality(w, &body.link_quality);
    }

    fn sequence_number(w: &mut Writer, sequence_number: Option<u8>) {
        if let Some(seq) = sequence_number {
            w.section("Sequence Number");
            w.increase_indent();
            w.field("sequence number", seq);
            w.decrease_indent();
        }
    }

    fn link_quality(w: &mut Writer, link_quality: &LinkQuality) {
        w.section("Transmission Info");
        w.increase_indent();
        w.field("rssi", link_quality.rssi);
        w.field("lqi", link_quality.lqi);
        w.decrease_indent();
    }
}
