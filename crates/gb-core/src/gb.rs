pub mod bus;
pub mod cartridge;
pub mod cpu;
pub mod tracer;

#[cfg(any(test, feature = "testing-utils"))]
pub mod test_utils;

use crate::{trace, trace_obj};
use bus::consts::{USER_PROGRAM_END, USER_PROGRAM_START};
use bus::memory_bus::MemoryBus;
use cartridge::Cartridge;
use cartridge::error::CartridgeError;
use cpu::Registers;
use std::fmt;
use std::path::Path;

/// A cartridge wired to a fresh register file and the default memory map.
#[derive(Clone, Debug)]
pub struct GameBoy {
    cartridge: Cartridge,
    pub registers: Registers,
    pub bus: MemoryBus,
}

impl GameBoy {
    pub fn new(cartridge: Cartridge) -> Self {
        let gameboy = GameBoy {
            cartridge,
            registers: Registers::new(),
            bus: MemoryBus::new(),
        };
        log::debug!("{}", gameboy.boot_banner());
        trace!("[GB] {}", gameboy.boot_banner());
        trace_obj!(&gameboy.registers);
        gameboy
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        Ok(GameBoy::new(Cartridge::open(path)?))
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    /// The program area of the image, $0150-$7FFF, cut short on small images.
    pub fn user_program(&self) -> &[u8] {
        let data = self.cartridge.data();
        let end = data.len().min(USER_PROGRAM_END);
        data.get(USER_PROGRAM_START..end).unwrap_or(&[])
    }

    pub fn boot_banner(&self) -> String {
        format!("Starting {} v{:?}", self.cartridge.title(), self.cartridge.version())
    }

    /// Zeroes the registers and every RAM region. The cartridge is kept.
    pub fn reset(&mut self) {
        self.registers.reset();
        self.bus.reset();
        trace!("[GB] reset");
    }
}

impl fmt::Display for GameBoy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.boot_banner())?;
        writeln!(f, "{}", self.cartridge)?;
        writeln!(f, "{}", self.registers)?;
        write!(f, "{}", self.bus)
    }
}
