//! Bounds-checked read and write cursors over frame buffers.
//!
//! Every field access goes through one of these cursors. An access past the end
//! of the buffer returns [`Error::BufferTooShort`] and leaves the position
//! untouched.

use crate::{Error, Result};

/// A cursor reading fields front to back.
#[derive(Debug, Clone)]
pub(crate) struct Reader<'b> {
    buffer: &'b [u8],
    position: usize,
}

impl<'b> Reader<'b> {
    /// Create a reader positioned at `position`.
    pub fn at(buffer: &'b [u8], position: usize) -> Self {
        Self { buffer, position }
    }

    /// Return the current read position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Return the next `len` bytes and advance past them.
    pub fn take(&mut self, len: usize) -> Result<&'b [u8]> {
        let end = self.position.checked_add(len).ok_or(Error::BufferTooShort)?;
        let bytes = self
            .buffer
            .get(self.position..end)
            .ok_or(Error::BufferTooShort)?;
        self.position = end;
        Ok(bytes)
    }

    /// Advance past `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    /// Return every byte left and advance to the end.
    pub fn rest(&mut self) -> &'b [u8] {
        let rest = self.buffer.get(self.position..).unwrap_or(&[]);
        self.position = self.buffer.len().max(self.position);
        rest
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read a 16-bit value stored little-endian.
    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Read the next `N` bytes in buffer order.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut raw = [0u8; N];
        raw.copy_from_slice(self.take(N)?);
        Ok(raw)
    }

    /// Read `N` bytes, last byte first.
    pub fn read_reversed<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut raw = self.read_array::<N>()?;
        raw.reverse();
        Ok(raw)
    }
}

/// A cursor writing fields front to back.
#[derive(Debug)]
pub(crate) struct Writer<'b> {
    buffer: &'b mut [u8],
    position: usize,
}

impl<'b> Writer<'b> {
    /// Create a writer positioned at `position`.
    pub fn at(buffer: &'b mut [u8], position: usize) -> Self {
        Self { buffer, position }
    }

    /// Return the current write position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Reserve the next `len` bytes and advance past them.
    fn reserve(&mut self, len: usize) -> Result<&mut [u8]> {
        let start = self.position;
        let end = start.checked_add(len).ok_or(Error::BufferTooShort)?;
        if end > self.buffer.len() {
            return Err(Error::BufferTooShort);
        }
        self.position = end;
        Ok(&mut self.buffer[start..end])
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.reserve(1)?[0] = value;
        Ok(())
    }

    /// Write a 16-bit value little-endian.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.reserve(2)?.copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    /// Write `bytes` in buffer order.
    pub fn write_slice(&mut self, bytes: &[u8]) -> Result<()> {
        self.reserve(bytes.len())?.copy_from_slice(bytes);
        Ok(())
    }

    /// Write `bytes` last byte first.
    pub fn write_reversed(&mut self, bytes: &[u8]) -> Result<()> {
        let b = self.reserve(bytes.len())?;
        for (dst, src) in b.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }
        Ok(())
    }
}
