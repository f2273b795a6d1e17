// Game Boy core modules
pub mod gb;
pub mod prelude;

// Re-exports
pub use gb::GameBoy;

pub use gb::bus::BusError;
pub use gb::cartridge::Cartridge;
pub use gb::cartridge::error::CartridgeError;
