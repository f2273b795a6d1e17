pub mod registers;

pub use registers::{Flags, Registers};
