//! Enhanced Acknowledgment construction.
//!
//! The acknowledgment is a structural mirror of the received header: the
//! addressing modes swap roles and the address and PAN ID bytes are copied
//! across without being interpreted. Which PAN ID fields are written follows
//! the acknowledgment's own Frame Control field. Only the header prefix of the received
//! frame is read, so the cost is bounded by the largest header.

use crate::cursor::{Reader, Writer};
use crate::{
    Error, FrameControl, FrameControlRepr, FrameType, FrameVersion, HeaderLayout, Result, FCS_LEN,
};

/// A buffer of this size holds every Enhanced Acknowledgment produced by
/// [`build_enhanced_ack`]: the length prefix, the Frame Control field, a
/// sequence number, two PAN IDs and two extended addresses.
pub const MAX_ENHANCED_ACK_LEN: usize = 1 + 2 + 1 + 2 + 8 + 2 + 8;

/// Return the Frame Control field of the acknowledgment for a frame with the
/// given Frame Control field.
pub fn enhanced_ack_frame_control<T: AsRef<[u8]>>(received: &FrameControl<T>) -> FrameControlRepr {
    FrameControlRepr {
        frame_type: FrameType::Ack,
        security_enabled: false,
        frame_pending: false,
        ack_request: false,
        pan_id_compression: received.pan_id_compression(),
        reserved: false,
        sequence_number_suppression: received.sequence_number_suppression(),
        information_elements_present: false,
        dst_addressing_mode: received.src_addressing_mode(),
        frame_version: FrameVersion::Ieee802154_2015,
        src_addressing_mode: received.dst_addressing_mode(),
    }
}

/// Build the Enhanced Acknowledgment for a received frame.
///
/// `received` is a length-prefixed buffer as delivered by the receiver. The
/// acknowledgment is written into `ack`, starting with its own length prefix,
/// which counts the 2-byte FCS the radio appends. Returns the number of bytes
/// written into `ack`, length prefix included.
///
/// The PAN ID fields are written as the acknowledgment's own Frame Control
/// field requires them. With PAN ID compression the single received PAN ID
/// becomes the destination PAN ID. Without it the received source PAN ID
/// becomes the destination PAN ID and the received destination PAN ID becomes
/// the source PAN ID, falling back to whichever one the received frame carries.
///
/// # Errors
///
/// Returns [`Error::BufferTooShort`] when `received` ends inside the header or
/// when `ack` cannot hold the acknowledgment. A buffer of
/// [`MAX_ENHANCED_ACK_LEN`] bytes is always large enough.
///
/// Returns [`Error::MissingPanId`] when the acknowledgment needs a PAN ID and
/// the received header has none, as with a compressed frame that has a source
/// address but no destination address.
pub fn build_enhanced_ack(received: &[u8], ack: &mut [u8]) -> Result<usize> {
    let fc = FrameControl::new(received.get(1..3).ok_or(Error::BufferTooShort)?)?;
    let inbound = HeaderLayout::from_frame_control(&fc);

    let ack_fc = enhanced_ack_frame_control(&fc);
    let outbound = ack_fc.layout();

    let mut r = Reader::at(received, 3);
    let sequence_number = if inbound.sequence_number {
        Some(r.read_u8()?)
    } else {
        None
    };
    let dst_pan_id = if inbound.dst_pan_id { Some(r.take(2)?) } else { None };
    let dst_address = r.take(inbound.dst_addressing_mode.size())?;
    let src_pan_id = if inbound.src_pan_id { Some(r.take(2)?) } else { None };
    let src_address = r.take(inbound.src_addressing_mode.size())?;

    // PAN IDs travel with the address they were received with.
    let (pan_for_dst, pan_for_src) = if fc.pan_id_compression() {
        (dst_pan_id, None)
    } else {
        (src_pan_id, dst_pan_id)
    };

    let mut w = Writer::at(ack, 1);
    w.write_u16(ack_fc.to_bits())?;

    if let (true, Some(sequence_number)) = (outbound.sequence_number, sequence_number) {
        w.write_u8(sequence_number)?;
    }

    if outbound.dst_pan_id {
        w.write_slice(pan_for_dst.or(pan_for_src).ok_or(Error::MissingPanId)?)?;
    }
    w.write_slice(src_address)?;

    if outbound.src_pan_id {
        w.write_slice(pan_for_src.or(pan_for_dst).ok_or(Error::MissingPanId)?)?;
    }
    w.write_slice(dst_address)?;

    let written = w.position();
    ack[0] = (written - 1 + FCS_LEN) as u8;

    Ok(written)
}
