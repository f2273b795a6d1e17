use crate::gb::bus::consts::*;
use crate::gb::bus::{BusError, BusInterface};
use crate::trace;
use std::fmt;
use std::ops::Range;

/// A fixed address range backed by its own buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryRegion {
    pub name: String,
    pub range: Range<usize>,
    data: Vec<u8>,
}

impl MemoryRegion {
    pub fn new(name: &str, range: Range<usize>) -> Self {
        MemoryRegion {
            name: name.to_string(),
            data: vec![0; range.len()],
            range,
        }
    }

    pub fn contains(&self, addr: u16) -> bool {
        self.range.contains(&(addr as usize))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn overlaps(&self, other: &MemoryRegion) -> bool {
        self.range.start < other.range.end && other.range.start < self.range.end
    }
}

/// Routes 8/16-bit accesses to the first region containing the address.
#[derive(Clone, Debug)]
pub struct MemoryBus {
    regions: Vec<MemoryRegion>,
}

impl MemoryBus {
    /// VRAM, ERAM, WRAM, OAM and HRAM at their standard addresses.
    pub fn new() -> Self {
        MemoryBus {
            regions: vec![
                MemoryRegion::new("VRAM", VRAM_START..VRAM_END),
                MemoryRegion::new("ERAM", ERAM_START..ERAM_END),
                MemoryRegion::new("WRAM", WRAM_START..WRAM_END),
                MemoryRegion::new("OAM", OAM_START..OAM_END),
                MemoryRegion::new("HRAM", HRAM_START..HRAM_END),
            ],
        }
    }

    /// A bus over a custom map. Regions must be non-empty, fit in the 16-bit
    /// address space and not overlap each other.
    pub fn with_regions(regions: Vec<MemoryRegion>) -> Result<Self, BusError> {
        for (i, region) in regions.iter().enumerate() {
            if region.range.is_empty() {
                return Err(BusError::EmptyRegion(region.name.clone()));
            }
            if region.range.end > ADDRESS_SPACE {
                return Err(BusError::RegionOutOfBounds(region.name.clone()));
            }
            if let Some(earlier) = regions[..i].iter().find(|earlier| earlier.overlaps(region)) {
                return Err(BusError::OverlappingRegions {
                    first: earlier.name.clone(),
                    second: region.name.clone(),
                });
            }
        }
        Ok(MemoryBus { regions })
    }

    pub fn regions(&self) -> &[MemoryRegion] {
        &self.regions
    }

    pub fn region(&self, name: &str) -> Option<&MemoryRegion> {
        self.regions.iter().find(|region| region.name == name)
    }

    /// Zeroes every backing store. The map itself is unchanged.
    pub fn reset(&mut self) {
        for region in self.regions.iter_mut() {
            region.data.fill(0);
        }
    }

    /// Index of the owning region and the offset into its buffer.
    fn locate(&self, addr: u16) -> Result<(usize, usize), BusError> {
        self.regions
            .iter()
            .position(|region| region.contains(addr))
            .map(|index| (index, addr as usize - self.regions[index].range.start))
            .ok_or(BusError::UnmappedAddress(addr))
    }
}

impl Default for MemoryBus {
    fn default() -> Self {
        MemoryBus::new()
    }
}

impl BusInterface for MemoryBus {
    fn read8(&self, addr: u16) -> Result<u8, BusError> {
        let (index, offset) = self.locate(addr)?;
        let value = self.regions[index].data[offset];
        trace!("[BUS READ] ${:04X} -> {:02X} ({})", addr, value, self.regions[index].name);
        Ok(value)
    }

    fn write8(&mut self, addr: u16, value: u8) -> Result<(), BusError> {
        let (index, offset) = self.locate(addr)?;
        self.regions[index].data[offset] = value;
        trace!("[BUS WRITE] ${:04X} <- {:02X} ({})", addr, value, self.regions[index].name);
        Ok(())
    }

    fn is_mapped(&self, addr: u16) -> bool {
        self.regions.iter().any(|region| region.contains(addr))
    }
}

impl fmt::Display for MemoryBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for region in &self.regions {
            writeln!(
                f,
                "{:<5} ${:04X}-${:04X} ({} bytes)",
                region.name,
                region.range.start,
                region.range.end - 1,
                region.len()
            )?;
        }
        Ok(())
    }
}
