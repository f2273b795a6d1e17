//! Header and global checksums.
//!
//! The boot ROM refuses to start a cartridge whose header checksum ($014D)
//! does not match, so a mismatch there is fatal. The global checksum
//! ($014E-$014F) is never verified by the hardware and is only reported.

use std::ops::RangeInclusive;

pub const HEADER_CHECKSUM_RANGE: RangeInclusive<usize> = 0x0134..=0x014C;
pub const HEADER_CHECKSUM_ADDR: usize = 0x014D;
pub const GLOBAL_CHECKSUM_HI: usize = 0x014E;
pub const GLOBAL_CHECKSUM_LO: usize = 0x014F;

/// `x = x - byte - 1` over $0134-$014C, truncated to 8 bits.
///
/// Panics if `data` is shorter than $014D bytes.
pub fn header_checksum(data: &[u8]) -> u8 {
    data[HEADER_CHECKSUM_RANGE]
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_sub(b).wrapping_sub(1))
}

/// Sum of every byte modulo 2^16, skipping the two global checksum bytes.
pub fn global_checksum(data: &[u8]) -> u16 {
    data.iter()
        .enumerate()
        .filter(|(i, _)| *i != GLOBAL_CHECKSUM_HI && *i != GLOBAL_CHECKSUM_LO)
        .fold(0u16, |acc, (_, &b)| acc.wrapping_add(b as u16))
}

/// Checks a cartridge image against its stored header checksum.
///
/// The image must be at least $014E bytes long.
#[derive(Copy, Clone, Debug)]
pub struct HeaderValidator<'a> {
    data: &'a [u8],
}

impl<'a> HeaderValidator<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn stored_header_checksum(&self) -> u8 {
        self.data[HEADER_CHECKSUM_ADDR]
    }

    pub fn computed_header_checksum(&self) -> u8 {
        header_checksum(self.data)
    }

    pub fn header_checksum_ok(&self) -> bool {
        self.computed_header_checksum() == self.stored_header_checksum()
    }
}
