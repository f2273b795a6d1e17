// Half-open address ranges of the default memory map

pub const VRAM_START: usize = 0x8000;
pub const VRAM_END: usize = 0xA000;

pub const ERAM_START: usize = 0xA000;
pub const ERAM_END: usize = 0xC000;

pub const WRAM_START: usize = 0xC000;
pub const WRAM_END: usize = 0xE000;

pub const OAM_START: usize = 0xFE00;
pub const OAM_END: usize = 0xFEA0;

// $FFFF (interrupt enable) is not part of HRAM
pub const HRAM_START: usize = 0xFF80;
pub const HRAM_END: usize = 0xFFFF;

pub const ADDRESS_SPACE: usize = 0x10000;

// Start of the program area in cartridge ROM, right after the header
pub const USER_PROGRAM_START: usize = 0x0150;
pub const USER_PROGRAM_END: usize = 0x8000;
