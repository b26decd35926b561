//! Readers over length-prefixed frame buffers.

use crate::{Error, FrameControl, Result, MAX_PSDU_LEN};

mod ack;
pub use ack::*;

/// Signal quality values appended by the radio after a received frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkQuality {
    /// Received signal strength, in dBm.
    pub rssi: i8,
    /// Link quality indicator.
    pub lqi: u8,
}

/// A reader for a buffer delivered by the receiver.
///
/// The buffer holds `length + 1` bytes: the length prefix, the frame, a filler
/// byte, the RSSI and the LQI. Immediate acknowledgments carry no filler byte.
#[derive(Debug, Clone, Copy)]
pub struct ReceivedFrame<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> ReceivedFrame<T> {
    /// The smallest length value that still covers the Frame Control field and
    /// the RSSI and LQI values.
    pub const MIN_LENGTH: usize = 4;

    /// Create a new [`ReceivedFrame`] reader from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooShort`] for an empty buffer and
    /// [`Error::InvalidLength`] when the length prefix does not fit the buffer.
    pub fn new(buffer: T) -> Result<Self> {
        let frame = Self::new_unchecked(buffer);
        frame.check_len()?;
        Ok(frame)
    }

    fn check_len(&self) -> Result<()> {
        let buffer = self.buffer.as_ref();
        let length = *buffer.first().ok_or(Error::BufferTooShort)? as usize;

        if !(Self::MIN_LENGTH..=MAX_PSDU_LEN).contains(&length) || buffer.len() <= length {
            return Err(Error::InvalidLength);
        }

        Ok(())
    }

    /// Create a new [`ReceivedFrame`] reader without length checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the length prefix.
    pub fn length(&self) -> usize {
        self.buffer.as_ref()[0] as usize
    }

    /// Return a [`FrameControl`] reader.
    pub fn frame_control(&self) -> FrameControl<&'_ [u8]> {
        FrameControl::new_unchecked(&self.buffer.as_ref()[1..3])
    }

    /// Return the RSSI and LQI values.
    pub fn link_quality(&self) -> LinkQuality {
        let b = self.buffer.as_ref();
        let length = self.length();
        LinkQuality {
            rssi: b[length - 1] as i8,
            lqi: b[length],
        }
    }

    /// Return the buffer up to the filler byte, length prefix included.
    pub fn content(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.length() - 2]
    }

    /// Return the buffer up to the RSSI value, length prefix included.
    ///
    /// This is the content of a frame without filler byte, such as an
    /// immediate acknowledgment.
    pub fn content_without_filler(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.length() - 1]
    }
}
