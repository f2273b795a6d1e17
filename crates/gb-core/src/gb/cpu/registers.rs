use crate::gb::tracer::Traceable;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /* The F register
        7  bit  0
        ---- ----
        ZNHC 0000
        |||| ||||
        |||| ++++- always zero
        |||+------ Carry
        ||+------- Half carry
        |+-------- Subtract
        +--------- Zero
     */
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Flags: u8 {
        const ZERO =       0b1000_0000;
        const SUBTRACT =   0b0100_0000;
        const HALF_CARRY = 0b0010_0000;
        const CARRY =      0b0001_0000;
    }
}

impl Flags {
    pub fn new() -> Self {
        Flags::from_bits_truncate(0)
    }

    /// Loads F from a byte. The low nibble is dropped.
    pub fn update(&mut self, data: u8) {
        *self = Flags::from_bits_truncate(data);
    }
}

/// The SM83 register file plus the machine/clock cycle counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub f: Flags,
    pub h: u8,
    pub l: u8,
    pub pc: u16,
    pub sp: u16,
    /// Machine cycles of the last instruction
    pub m: u8,
    /// Clock cycles of the last instruction
    pub t: u8,
}

impl Registers {
    pub fn new() -> Self {
        Registers::default()
    }

    pub fn reset(&mut self) {
        *self = Registers::default();
    }

    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.bits()])
    }

    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f.update(f);
    }

    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    pub fn set_bc(&mut self, value: u16) {
        [self.b, self.c] = value.to_be_bytes();
    }

    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    pub fn set_de(&mut self, value: u16) {
        [self.d, self.e] = value.to_be_bytes();
    }

    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    pub fn set_hl(&mut self, value: u16) {
        [self.h, self.l] = value.to_be_bytes();
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Registers<M={:#04X} T={:#04X} A={:#04X} B={:#04X} C={:#04X} D={:#04X} E={:#04X} \
             F={:#04X} H={:#04X} L={:#04X} PC={:#04X} SP={:#04X}>",
            self.m,
            self.t,
            self.a,
            self.b,
            self.c,
            self.d,
            self.e,
            self.f.bits(),
            self.h,
            self.l,
            self.pc,
            self.sp,
        )
    }
}

impl Traceable for Registers {
    fn trace_name(&self) -> &'static str {
        "CPU"
    }

    fn trace_state(&self) -> Option<String> {
        Some(format!(
            "PC:{:04X} SP:{:04X} AF:{:04X} BC:{:04X} DE:{:04X} HL:{:04X}",
            self.pc,
            self.sp,
            self.af(),
            self.bc(),
            self.de(),
            self.hl()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let regs = Registers::new();
        assert_eq!(regs.af(), 0);
        assert_eq!(regs.bc(), 0);
        assert_eq!(regs.pc, 0);
        assert_eq!(regs.sp, 0);
        assert!(regs.f.is_empty());
    }

    #[test]
    fn register_pairs_are_high_low() {
        let mut regs = Registers::new();
        regs.set_bc(0x1234);
        regs.set_de(0xABCD);
        regs.set_hl(0x8001);

        assert_eq!((regs.b, regs.c), (0x12, 0x34));
        assert_eq!((regs.d, regs.e), (0xAB, 0xCD));
        assert_eq!((regs.h, regs.l), (0x80, 0x01));
        assert_eq!(regs.hl(), 0x8001);
    }

    #[test]
    fn af_drops_low_nibble_of_flags() {
        let mut regs = Registers::new();
        regs.set_af(0x01FF);
        assert_eq!(regs.a, 0x01);
        assert_eq!(regs.f, Flags::all());
        assert_eq!(regs.af(), 0x01F0);
    }

    #[test]
    fn flag_bits() {
        let mut flags = Flags::new();
        flags.insert(Flags::ZERO | Flags::CARRY);
        assert_eq!(flags.bits(), 0x90);
        flags.remove(Flags::ZERO);
        assert!(flags.contains(Flags::CARRY));
        assert!(!flags.contains(Flags::HALF_CARRY));
    }

    #[test]
    fn reset_clears_everything() {
        let mut regs = Registers::new();
        regs.set_af(0xFFF0);
        regs.pc = 0x0100;
        regs.sp = 0xFFFE;
        regs.m = 3;
        regs.t = 12;
        regs.reset();
        assert_eq!(regs, Registers::default());
    }

    #[test]
    fn display_lists_every_register() {
        let mut regs = Registers::new();
        regs.pc = 0x0100;
        regs.sp = 0xFFFE;
        regs.a = 0x01;
        assert_eq!(
            regs.to_string(),
            "Registers<M=0x00 T=0x00 A=0x01 B=0x00 C=0x00 D=0x00 E=0x00 \
             F=0x00 H=0x00 L=0x00 PC=0x100 SP=0xFFFE>"
        );

        regs.pc = 0x0001;
        assert!(regs.to_string().contains(" PC=0x01 SP=0xFFFE>"));
    }

    #[test]
    fn traces_pairs() {
        let mut regs = Registers::new();
        regs.set_hl(0xC000);
        let trace = regs.trace().unwrap();
        assert_eq!(trace, "CPU PC:0000 SP:0000 AF:0000 BC:0000 DE:0000 HL:C000");
    }
}
