//! Convenient imports for consumers of gb-core
//!
//! Pull in everything commonly needed in one line:
//! ```rust
//! use gb_core::prelude::*;
//! ```

// Machine and cartridge API
pub use crate::gb::GameBoy;
pub use crate::gb::cartridge::Cartridge;
pub use crate::gb::cartridge::error::CartridgeError;
pub use crate::gb::cartridge::header::ParsedHeader;
pub use crate::gb::cartridge::report::{HeaderReport, ReportValue};

// Bus
pub use crate::gb::bus::memory_bus::{MemoryBus, MemoryRegion};
pub use crate::gb::bus::{BusError, BusInterface};

// CPU state
pub use crate::gb::cpu::{Flags, Registers};

// Macros
pub use crate::trace_dump;

// Conditional testing utilities
#[cfg(feature = "testing-utils")]
pub use crate::gb::test_utils::*;
