//! Header encoding, Enhanced-Ack construction and diagnostics decoding for
//! IEEE 802.15.4 data frames exchanged between two peers.
//!
//! The crate covers the subset of the standard used for direct point-to-point
//! data exchange:
//! - [`FrameControl`] / [`FrameControlRepr`]: the 16-bit Frame Control field.
//! - [`DataHeaderRepr`] and [`FrameBuilder`]: build 2003 or 2015 Data frame
//!   headers, computing PAN ID compression and sequence number suppression.
//! - [`build_enhanced_ack`]: mirror the header of a received frame into an
//!   Enhanced Acknowledgment, fast enough to run from the radio callback.
//! - [`FrameReport`]: decode a received buffer into a diagnostic record.
//!
//! Security and Information Elements are not handled. Frames that use them are
//! reported as [`FrameContent::Unsupported`].
//!
//! ## Buffers
//!
//! Every buffer starts with a one-byte length prefix, followed by the Frame
//! Control field. The length excludes itself and includes the 2-byte FCS the
//! radio appends on transmission.
//!
//! A buffer handed to the transmitter:
//! ```text
//! [length][FCF(2)][seq?][dst pan?][dst addr][src pan?][src addr][payload]
//! ```
//!
//! A buffer delivered by the receiver, where the hardware places a filler byte
//! between the payload and the signal quality values:
//! ```text
//! [length][FCF(2)][seq?][dst pan?][dst addr][src pan?][src addr][payload][0][rssi][lqi]
//! ```
//!
//! ## Writing a frame
//! ```
//! # use p2p15d4_frame::*;
//! let header = FrameBuilder::new_data_2015()
//!     .set_sequence_number(7)
//!     .set_ack_request(true)
//!     .set_dst(0x0001, Address::Short(0x0002))
//!     .set_src(0x0001, Address::Short(0x0003))
//!     .finalize()
//!     .unwrap();
//!
//! let frame = DataFrameRepr::new(header, b"Hallo");
//! let mut buffer = [0u8; MAX_FRAME_LEN];
//! let len = frame.emit(&mut buffer).unwrap();
//!
//! assert_eq!(buffer[0], 9 + 5 + 2);
//! assert_eq!(&buffer[3..len - 5], [0x07u8, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00]);
//! ```
//!
//! ## Reading a frame
//! ```
//! # use p2p15d4_frame::*;
//! let received = [
//!     0x11, 0x61, 0xa8, 0x07, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, b'H', b'a', b'l', b'l',
//!     b'o', 0x00, 0xc4, 0x78,
//! ];
//! let report = FrameReport::parse(&received).unwrap();
//!
//! let FrameContent::Data(body) = report.content else {
//!     panic!("not a data frame");
//! };
//! assert_eq!(body.sequence_number, Some(7));
//! assert_eq!(body.addressing.src_address, Address::Short(0x0003));
//! assert_eq!(body.payload, b"Hallo");
//! assert_eq!(body.link_quality.rssi, -60);
//! ```
#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(test)]
mod tests;

mod cursor;

mod frame_control;
pub use frame_control::*;

mod addressing;
pub use addressing::*;

mod frames;
pub use frames::*;

mod repr;
pub use repr::*;

/// The maximum size of a PSDU, FCS included.
pub const MAX_PSDU_LEN: usize = 127;

/// The size of a frame buffer: the length prefix followed by the largest
/// PSDU.
pub const MAX_FRAME_LEN: usize = MAX_PSDU_LEN + 1;

/// The size of the Frame Check Sequence appended by the radio.
pub const FCS_LEN: usize = 2;

/// An error that can occur when building or reading an IEEE 802.15.4 frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// The buffer is too short to hold the fields being read or written.
    BufferTooShort,
    /// The length prefix does not agree with the buffer.
    InvalidLength,
    /// The frame does not fit in a 127-byte PSDU.
    FrameTooLong,
    /// A 2003 Data frame was requested without a sequence number.
    MissingSequenceNumber,
    /// Only 2003 and 2015 Data frames can be built.
    UnsupportedFrameVersion,
    /// The acknowledgment needs a PAN ID the received header does not carry.
    MissingPanId,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BufferTooShort => write!(f, "buffer too short"),
            Error::InvalidLength => write!(f, "length prefix does not match the buffer"),
            Error::FrameTooLong => write!(f, "frame exceeds {MAX_PSDU_LEN} bytes"),
            Error::MissingSequenceNumber => {
                write!(f, "a 2003 data frame requires a sequence number")
            }
            Error::UnsupportedFrameVersion => {
                write!(f, "only 2003 and 2015 data frames can be built")
            }
            Error::MissingPanId => write!(f, "received header carries no PAN ID to acknowledge"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// A type alias for `Result<T, p2p15d4_frame::Error>`.
pub type Result<T> = core::result::Result<T, Error>;
