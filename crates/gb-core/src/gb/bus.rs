use thiserror::Error;

pub mod consts;
pub mod memory_bus;


#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusError {
    #[error("address ${0:04X} is not mapped to any memory region")]
    UnmappedAddress(u16),

    #[error("memory region {first} overlaps {second}")]
    OverlappingRegions { first: String, second: String },

    #[error("memory region {0} is empty")]
    EmptyRegion(String),

    #[error("memory region {0} extends past $FFFF")]
    RegionOutOfBounds(String),
}

/// Byte-addressed access to the 16-bit address space.
///
/// 16-bit accesses are little-endian: the low byte lives at `addr`, the high
/// byte at `addr + 1`.
pub trait BusInterface {
    fn read8(&self, addr: u16) -> Result<u8, BusError>;
    fn write8(&mut self, addr: u16, value: u8) -> Result<(), BusError>;
    fn is_mapped(&self, addr: u16) -> bool;

    fn read16(&self, addr: u16) -> Result<u16, BusError> {
        let hi_addr = addr.checked_add(1).ok_or(BusError::UnmappedAddress(addr))?;
        let lo = self.read8(addr)?;
        let hi = self.read8(hi_addr)?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Writes nothing unless both bytes are mapped.
    fn write16(&mut self, addr: u16, value: u16) -> Result<(), BusError> {
        let hi_addr = addr.checked_add(1).ok_or(BusError::UnmappedAddress(addr))?;
        for target in [addr, hi_addr] {
            if !self.is_mapped(target) {
                return Err(BusError::UnmappedAddress(target));
            }
        }

        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo)?;
        self.write8(hi_addr, hi)
    }
}
