use crate::cursor::{Reader, Writer};
use crate::{Address, AddressingMode, HeaderLayout, Result};

/// A high-level representation of the IEEE 802.15.4 Addressing Fields.
///
/// A `None` source PAN ID means the field was elided by PAN ID compression and
/// the destination PAN ID applies to both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct AddressingFieldsRepr {
    /// Destination PAN identifier.
    pub dst_pan_id: Option<u16>,
    /// Destination address.
    pub dst_address: Address,
    /// Source PAN identifier.
    pub src_pan_id: Option<u16>,
    /// Source address.
    pub src_address: Address,
}

impl Default for AddressingFieldsRepr {
    fn default() -> Self {
        Self {
            dst_pan_id: None,
            dst_address: Address::Absent,
            src_pan_id: None,
            src_address: Address::Absent,
        }
    }
}

impl AddressingFieldsRepr {
    /// Read the addressing fields announced by `layout`.
    ///
    /// An extended destination address is stored reversed, undoing the
    /// reversal applied when it was written. An extended source address is
    /// stored as found on the air, which is the byte order the radio reports
    /// its own extended address in.
    pub(crate) fn parse(r: &mut Reader<'_>, layout: &HeaderLayout) -> Result<Self> {
        let dst_pan_id = if layout.dst_pan_id {
            Some(r.read_u16()?)
        } else {
            None
        };

        let dst_address = match layout.dst_addressing_mode {
            AddressingMode::Short => Address::Short(r.read_u16()?),
            AddressingMode::Extended => Address::Extended(r.read_reversed::<8>()?),
            AddressingMode::Absent | AddressingMode::Reserved => Address::Absent,
        };

        let src_pan_id = if layout.src_pan_id {
            Some(r.read_u16()?)
        } else {
            None
        };

        let src_address = match layout.src_addressing_mode {
            AddressingMode::Short => Address::Short(r.read_u16()?),
            AddressingMode::Extended => Address::Extended(r.read_array::<8>()?),
            AddressingMode::Absent | AddressingMode::Reserved => Address::Absent,
        };

        Ok(Self {
            dst_pan_id,
            dst_address,
            src_pan_id,
            src_address,
        })
    }

    /// Return the length of the addressing fields when emitted into a buffer.
    pub fn buffer_len(&self) -> usize {
        let mut len = 0;
        if self.dst_pan_id.is_some() {
            len += 2;
        }
        len += self.dst_address.len();
        if self.src_pan_id.is_some() {
            len += 2;
        }
        len + self.src_address.len()
    }

    /// Write the addressing fields. An extended destination address is written
    /// reversed, an extended source address verbatim.
    pub(crate) fn emit(&self, w: &mut Writer<'_>) -> Result<()> {
        if let Some(pan_id) = self.dst_pan_id {
            w.write_u16(pan_id)?;
        }

        match self.dst_address {
            Address::Short(address) => w.write_u16(address)?,
            Address::Extended(address) => w.write_reversed(&address)?,
            Address::Absent => {}
        }

        if let Some(pan_id) = self.src_pan_id {
            w.write_u16(pan_id)?;
        }

        match self.src_address {
            Address::Short(address) => w.write_u16(address)?,
            Address::Extended(address) => w.write_slice(&address)?,
            Address::Absent => {}
        }

        Ok(())
    }

    /// Return the PAN ID of the source, which is the destination PAN ID when
    /// PAN ID compression elided the source PAN ID.
    pub fn effective_src_pan_id(&self) -> Option<u16> {
        self.src_pan_id.or(self.dst_pan_id)
    }

    /// Returns `true` when both ends are in the same PAN.
    pub fn is_intra_pan(&self) -> bool {
        self.src_pan_id.is_none()
    }
}
