use std::fmt;

use super::Cpu;

/// Registers for the Game Boy CPU (SM83).
///
/// The eight 8-bit registers are stored as their four 16-bit pairs, so
/// writing `B` is observable through `BC` and the other way around without
/// any synchronisation. The high byte of every pair is the first register
/// of its name (A, B, D, H), independent of host byte order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    af: u16,
    bc: u16,
    de: u16,
    hl: u16,
    pub sp: u16,
    pub pc: u16,
}

#[inline]
const fn high(pair: u16) -> u8 {
    (pair >> 8) as u8
}

#[inline]
const fn low(pair: u16) -> u8 {
    pair as u8
}

#[inline]
const fn with_high(pair: u16, value: u8) -> u16 {
    (pair & 0x00FF) | ((value as u16) << 8)
}

#[inline]
const fn with_low(pair: u16, value: u8) -> u16 {
    (pair & 0xFF00) | value as u16
}

impl Registers {
    /// Register values the DMG boot ROM leaves behind when it jumps to the
    /// cartridge entry point at 0x0100.
    pub const fn power_on() -> Self {
        Self {
            af: 0x01B0,
            bc: 0x0013,
            de: 0x00D8,
            hl: 0x014D,
            sp: 0xFFFE,
            pc: 0x0100,
        }
    }

    #[inline]
    pub fn af(&self) -> u16 {
        self.af
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        // Lower 4 bits of F are always zero.
        self.af = value & 0xFFF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        self.bc
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        self.bc = value;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        self.de
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        self.de = value;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        self.hl
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        self.hl = value;
    }

    #[inline]
    pub fn a(&self) -> u8 {
        high(self.af)
    }

    #[inline]
    pub fn set_a(&mut self, value: u8) {
        self.af = with_high(self.af, value);
    }

    #[inline]
    pub fn f(&self) -> u8 {
        low(self.af)
    }

    #[inline]
    pub fn set_f(&mut self, value: u8) {
        self.af = with_low(self.af, value & 0xF0);
    }

    #[inline]
    pub fn b(&self) -> u8 {
        high(self.bc)
    }

    #[inline]
    pub fn set_b(&mut self, value: u8) {
        self.bc = with_high(self.bc, value);
    }

    #[inline]
    pub fn c(&self) -> u8 {
        low(self.bc)
    }

    #[inline]
    pub fn set_c(&mut self, value: u8) {
        self.bc = with_low(self.bc, value);
    }

    #[inline]
    pub fn d(&self) -> u8 {
        high(self.de)
    }

    #[inline]
    pub fn set_d(&mut self, value: u8) {
        self.de = with_high(self.de, value);
    }

    #[inline]
    pub fn e(&self) -> u8 {
        low(self.de)
    }

    #[inline]
    pub fn set_e(&mut self, value: u8) {
        self.de = with_low(self.de, value);
    }

    #[inline]
    pub fn h(&self) -> u8 {
        high(self.hl)
    }

    #[inline]
    pub fn set_h(&mut self, value: u8) {
        self.hl = with_high(self.hl, value);
    }

    #[inline]
    pub fn l(&self) -> u8 {
        low(self.hl)
    }

    #[inline]
    pub fn set_l(&mut self, value: u8) {
        self.hl = with_low(self.hl, value);
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
            self.af, self.bc, self.de, self.hl, self.sp, self.pc
        )
    }
}

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        let bit = flag as u8;
        (self.regs.f() & (1 << bit)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let bit = flag as u8;
        let f = self.regs.f();
        if value {
            self.regs.set_f(f | (1 << bit));
        } else {
            self.regs.set_f(f & !(1 << bit));
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.set_f(0);
    }

    /// Overwrite all four flags at once.
    #[inline]
    pub(super) fn set_znhc(&mut self, z: bool, n: bool, h: bool, c: bool) {
        let f = (u8::from(z) << Flag::Z as u8)
            | (u8::from(n) << Flag::N as u8)
            | (u8::from(h) << Flag::H as u8)
            | (u8::from(c) << Flag::C as u8);
        self.regs.set_f(f);
    }
}
