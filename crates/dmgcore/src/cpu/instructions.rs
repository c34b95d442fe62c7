//! Opcode dispatch tables.
//!
//! Both tables are plain `static` arrays of [`Instruction`] descriptors
//! built at compile time. Each slot pairs the documented timing with a
//! function pointer into `ops`, so decoding is a single index.

use std::fmt;

use super::ops::*;
use super::{Bus, Cpu};

/// Opcode byte that selects [`CB_TABLE`] for the following byte.
pub const CB_PREFIX: u8 = 0xCB;

/// T-cycles charged for the 0xCB prefix fetch on top of the CB entry.
pub const CB_PREFIX_CYCLES: u8 = 4;

/// One opcode table slot.
#[derive(Clone, Copy)]
pub struct Instruction {
    /// Disassembly text. Operands are written as `u8`, `u16` or `i8`.
    pub mnemonic: &'static str,
    /// Total encoded length in bytes, opcode (and CB prefix) included.
    pub length: u8,
    /// T-cycles when the instruction completes (branch taken).
    pub cycles: u8,
    /// T-cycles when a conditional branch falls through. Equal to
    /// `cycles` for everything else.
    pub cycles_not_taken: u8,
    defined: bool,
    prefixed: bool,
    operation: Operation,
}

impl Instruction {
    pub(crate) const fn op(
        mnemonic: &'static str,
        length: u8,
        cycles: u8,
        operation: Operation,
    ) -> Self {
        Self {
            mnemonic,
            length,
            cycles,
            cycles_not_taken: cycles,
            defined: true,
            prefixed: false,
            operation,
        }
    }

    /// CB-table entry: two bytes (prefix and opcode), no operands.
    pub(crate) const fn cb(mnemonic: &'static str, cycles: u8, operation: Operation) -> Self {
        Self {
            mnemonic,
            length: 2,
            cycles,
            cycles_not_taken: cycles,
            defined: true,
            prefixed: true,
            operation,
        }
    }

    pub(crate) const fn branch(
        mnemonic: &'static str,
        length: u8,
        cycles: u8,
        cycles_not_taken: u8,
        operation: Operation,
    ) -> Self {
        Self {
            mnemonic,
            length,
            cycles,
            cycles_not_taken,
            defined: true,
            prefixed: false,
            operation,
        }
    }

    /// Placeholder for the opcodes the SM83 leaves undefined.
    pub(crate) const UNUSED: Self = Self {
        mnemonic: "UNUSED",
        length: 1,
        cycles: 4,
        cycles_not_taken: 4,
        defined: false,
        prefixed: false,
        operation: unused,
    };

    pub fn is_defined(&self) -> bool {
        self.defined
    }

    /// Whether this entry lives in [`CB_TABLE`].
    pub fn is_prefixed(&self) -> bool {
        self.prefixed
    }

    /// Whether taken and not-taken costs differ.
    pub fn is_conditional(&self) -> bool {
        self.cycles != self.cycles_not_taken
    }

    #[inline]
    pub fn cycles_for(&self, taken: bool) -> u8 {
        if taken {
            self.cycles
        } else {
            self.cycles_not_taken
        }
    }

    /// Run the opcode body against `cpu`; returns the cycle cost for the
    /// branch outcome. Operand bytes are fetched from `cpu.regs.pc`.
    #[inline]
    pub fn execute(&self, cpu: &mut Cpu, bus: &mut dyn Bus) -> u8 {
        let taken = (self.operation)(cpu, bus);
        self.cycles_for(taken)
    }

    /// Bytes following the opcode. STOP counts its padding byte.
    pub fn operand_len(&self) -> u8 {
        if self.prefixed {
            0
        } else {
            self.length - 1
        }
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("length", &self.length)
            .field("cycles", &self.cycles)
            .field("cycles_not_taken", &self.cycles_not_taken)
            .field("defined", &self.defined)
            .field("prefixed", &self.prefixed)
            .finish()
    }
}

/// Unprefixed opcodes, indexed by the opcode byte.
pub static BASE_TABLE: [Instruction; 256] = [
    /* 0x00 */ Instruction::op("NOP", 1, 4, nop),
    /* 0x01 */ Instruction::op("LD BC,u16", 3, 12, ld_rp_u16::<0>),
    /* 0x02 */ Instruction::op("LD (BC),A", 1, 8, ld_ind_a::<0>),
    /* 0x03 */ Instruction::op("INC BC", 1, 8, inc_rp::<0>),
    /* 0x04 */ Instruction::op("INC B", 1, 4, inc_r::<0>),
    /* 0x05 */ Instruction::op("DEC B", 1, 4, dec_r::<0>),
    /* 0x06 */ Instruction::op("LD B,u8", 2, 8, ld_r_u8::<0>),
    /* 0x07 */ Instruction::op("RLCA", 1, 4, rotate_a::<0>),
    /* 0x08 */ Instruction::op("LD (u16),SP", 3, 20, ld_u16_sp),
    /* 0x09 */ Instruction::op("ADD HL,BC", 1, 8, add_hl_rp::<0>),
    /* 0x0A */ Instruction::op("LD A,(BC)", 1, 8, ld_a_ind::<0>),
    /* 0x0B */ Instruction::op("DEC BC", 1, 8, dec_rp::<0>),
    /* 0x0C */ Instruction::op("INC C", 1, 4, inc_r::<1>),
    /* 0x0D */ Instruction::op("DEC C", 1, 4, dec_r::<1>),
    /* 0x0E */ Instruction::op("LD C,u8", 2, 8, ld_r_u8::<1>),
    /* 0x0F */ Instruction::op("RRCA", 1, 4, rotate_a::<1>),
    /* 0x10 */ Instruction::op("STOP", 2, 4, stop),
    /* 0x11 */ Instruction::op("LD DE,u16", 3, 12, ld_rp_u16::<1>),
    /* 0x12 */ Instruction::op("LD (DE),A", 1, 8, ld_ind_a::<1>),
    /* 0x13 */ Instruction::op("INC DE", 1, 8, inc_rp::<1>),
    /* 0x14 */ Instruction::op("INC D", 1, 4, inc_r::<2>),
    /* 0x15 */ Instruction::op("DEC D", 1, 4, dec_r::<2>),
    /* 0x16 */ Instruction::op("LD D,u8", 2, 8, ld_r_u8::<2>),
    /* 0x17 */ Instruction::op("RLA", 1, 4, rotate_a::<2>),
    /* 0x18 */ Instruction::op("JR i8", 2, 12, jr),
    /* 0x19 */ Instruction::op("ADD HL,DE", 1, 8, add_hl_rp::<1>),
    /* 0x1A */ Instruction::op("LD A,(DE)", 1, 8, ld_a_ind::<1>),
    /* 0x1B */ Instruction::op("DEC DE", 1, 8, dec_rp::<1>),
    /* 0x1C */ Instruction::op("INC E", 1, 4, inc_r::<3>),
    /* 0x1D */ Instruction::op("DEC E", 1, 4, dec_r::<3>),
    /* 0x1E */ Instruction::op("LD E,u8", 2, 8, ld_r_u8::<3>),
    /* 0x1F */ Instruction::op("RRA", 1, 4, rotate_a::<3>),
    /* 0x20 */ Instruction::branch("JR NZ,i8", 2, 12, 8, jr_cc::<0>),
    /* 0x21 */ Instruction::op("LD HL,u16", 3, 12, ld_rp_u16::<2>),
    /* 0x22 */ Instruction::op("LD (HL+),A", 1, 8, ld_ind_a::<2>),
    /* 0x23 */ Instruction::op("INC HL", 1, 8, inc_rp::<2>),
    /* 0x24 */ Instruction::op("INC H", 1, 4, inc_r::<4>),
    /* 0x25 */ Instruction::op("DEC H", 1, 4, dec_r::<4>),
    /* 0x26 */ Instruction::op("LD H,u8", 2, 8, ld_r_u8::<4>),
    /* 0x27 */ Instruction::op("DAA", 1, 4, daa),
    /* 0x28 */ Instruction::branch("JR Z,i8", 2, 12, 8, jr_cc::<1>),
    /* 0x29 */ Instruction::op("ADD HL,HL", 1, 8, add_hl_rp::<2>),
    /* 0x2A */ Instruction::op("LD A,(HL+)", 1, 8, ld_a_ind::<2>),
    /* 0x2B */ Instruction::op("DEC HL", 1, 8, dec_rp::<2>),
    /* 0x2C */ Instruction::op("INC L", 1, 4, inc_r::<5>),
    /* 0x2D */ Instruction::op("DEC L", 1, 4, dec_r::<5>),
    /* 0x2E */ Instruction::op("LD L,u8", 2, 8, ld_r_u8::<5>),
    /* 0x2F */ Instruction::op("CPL", 1, 4, cpl),
    /* 0x30 */ Instruction::branch("JR NC,i8", 2, 12, 8, jr_cc::<2>),
    /* 0x31 */ Instruction::op("LD SP,u16", 3, 12, ld_rp_u16::<3>),
    /* 0x32 */ Instruction::op("LD (HL-),A", 1, 8, ld_ind_a::<3>),
    /* 0x33 */ Instruction::op("INC SP", 1, 8, inc_rp::<3>),
    /* 0x34 */ Instruction::op("INC (HL)", 1, 12, inc_r::<6>),
    /* 0x35 */ Instruction::op("DEC (HL)", 1, 12, dec_r::<6>),
    /* 0x36 */ Instruction::op("LD (HL),u8", 2, 12, ld_r_u8::<6>),
    /* 0x37 */ Instruction::op("SCF", 1, 4, scf),
    /* 0x38 */ Instruction::branch("JR C,i8", 2, 12, 8, jr_cc::<3>),
    /* 0x39 */ Instruction::op("ADD HL,SP", 1, 8, add_hl_rp::<3>),
    /* 0x3A */ Instruction::op("LD A,(HL-)", 1, 8, ld_a_ind::<3>),
    /* 0x3B */ Instruction::op("DEC SP", 1, 8, dec_rp::<3>),
    /* 0x3C */ Instruction::op("INC A", 1, 4, inc_r::<7>),
    /* 0x3D */ Instruction::op("DEC A", 1, 4, dec_r::<7>),
    /* 0x3E */ Instruction::op("LD A,u8", 2, 8, ld_r_u8::<7>),
    /* 0x3F */ Instruction::op("CCF", 1, 4, ccf),
    /* 0x40 */ Instruction::op("LD B,B", 1, 4, ld_r_r::<0, 0>),
    /* 0x41 */ Instruction::op("LD B,C", 1, 4, ld_r_r::<0, 1>),
    /* 0x42 */ Instruction::op("LD B,D", 1, 4, ld_r_r::<0, 2>),
    /* 0x43 */ Instruction::op("LD B,E", 1, 4, ld_r_r::<0, 3>),
    /* 0x44 */ Instruction::op("LD B,H", 1, 4, ld_r_r::<0, 4>),
    /* 0x45 */ Instruction::op("LD B,L", 1, 4, ld_r_r::<0, 5>),
    /* 0x46 */ Instruction::op("LD B,(HL)", 1, 8, ld_r_r::<0, 6>),
    /* 0x47 */ Instruction::op("LD B,A", 1, 4, ld_r_r::<0, 7>),
    /* 0x48 */ Instruction::op("LD C,B", 1, 4, ld_r_r::<1, 0>),
    /* 0x49 */ Instruction::op("LD C,C", 1, 4, ld_r_r::<1, 1>),
    /* 0x4A */ Instruction::op("LD C,D", 1, 4, ld_r_r::<1, 2>),
    /* 0x4B */ Instruction::op("LD C,E", 1, 4, ld_r_r::<1, 3>),
    /* 0x4C */ Instruction::op("LD C,H", 1, 4, ld_r_r::<1, 4>),
    /* 0x4D */ Instruction::op("LD C,L", 1, 4, ld_r_r::<1, 5>),
    /* 0x4E */ Instruction::op("LD C,(HL)", 1, 8, ld_r_r::<1, 6>),
    /* 0x4F */ Instruction::op("LD C,A", 1, 4, ld_r_r::<1, 7>),
    /* 0x50 */ Instruction::op("LD D,B", 1, 4, ld_r_r::<2, 0>),
    /* 0x51 */ Instruction::op("LD D,C", 1, 4, ld_r_r::<2, 1>),
    /* 0x52 */ Instruction::op("LD D,D", 1, 4, ld_r_r::<2, 2>),
    /* 0x53 */ Instruction::op("LD D,E", 1, 4, ld_r_r::<2, 3>),
    /* 0x54 */ Instruction::op("LD D,H", 1, 4, ld_r_r::<2, 4>),
    /* 0x55 */ Instruction::op("LD D,L", 1, 4, ld_r_r::<2, 5>),
    /* 0x56 */ Instruction::op("LD D,(HL)", 1, 8, ld_r_r::<2, 6>),
    /* 0x57 */ Instruction::op("LD D,A", 1, 4, ld_r_r::<2, 7>),
    /* 0x58 */ Instruction::op("LD E,B", 1, 4, ld_r_r::<3, 0>),
    /* 0x59 */ Instruction::op("LD E,C", 1, 4, ld_r_r::<3, 1>),
    /* 0x5A */ Instruction::op("LD E,D", 1, 4, ld_r_r::<3, 2>),
    /* 0x5B */ Instruction::op("LD E,E", 1, 4, ld_r_r::<3, 3>),
    /* 0x5C */ Instruction::op("LD E,H", 1, 4, ld_r_r::<3, 4>),
    /* 0x5D */ Instruction::op("LD E,L", 1, 4, ld_r_r::<3, 5>),
    /* 0x5E */ Instruction::op("LD E,(HL)", 1, 8, ld_r_r::<3, 6>),
    /* 0x5F */ Instruction::op("LD E,A", 1, 4, ld_r_r::<3, 7>),
    /* 0x60 */ Instruction::op("LD H,B", 1, 4, ld_r_r::<4, 0>),
    /* 0x61 */ Instruction::op("LD H,C", 1, 4, ld_r_r::<4, 1>),
    /* 0x62 */ Instruction::op("LD H,D", 1, 4, ld_r_r::<4, 2>),
    /* 0x63 */ Instruction::op("LD H,E", 1, 4, ld_r_r::<4, 3>),
    /* 0x64 */ Instruction::op("LD H,H", 1, 4, ld_r_r::<4, 4>),
    /* 0x65 */ Instruction::op("LD H,L", 1, 4, ld_r_r::<4, 5>),
    /* 0x66 */ Instruction::op("LD H,(HL)", 1, 8, ld_r_r::<4, 6>),
    /* 0x67 */ Instruction::op("LD H,A", 1, 4, ld_r_r::<4, 7>),
    /* 0x68 */ Instruction::op("LD L,B", 1, 4, ld_r_r::<5, 0>),
    /* 0x69 */ Instruction::op("LD L,C", 1, 4, ld_r_r::<5, 1>),
    /* 0x6A */ Instruction::op("LD L,D", 1, 4, ld_r_r::<5, 2>),
    /* 0x6B */ Instruction::op("LD L,E", 1, 4, ld_r_r::<5, 3>),
    /* 0x6C */ Instruction::op("LD L,H", 1, 4, ld_r_r::<5, 4>),
    /* 0x6D */ Instruction::op("LD L,L", 1, 4, ld_r_r::<5, 5>),
    /* 0x6E */ Instruction::op("LD L,(HL)", 1, 8, ld_r_r::<5, 6>),
    /* 0x6F */ Instruction::op("LD L,A", 1, 4, ld_r_r::<5, 7>),
    /* 0x70 */ Instruction::op("LD (HL),B", 1, 8, ld_r_r::<6, 0>),
    /* 0x71 */ Instruction::op("LD (HL),C", 1, 8, ld_r_r::<6, 1>),
    /* 0x72 */ Instruction::op("LD (HL),D", 1, 8, ld_r_r::<6, 2>),
    /* 0x73 */ Instruction::op("LD (HL),E", 1, 8, ld_r_r::<6, 3>),
    /* 0x74 */ Instruction::op("LD (HL),H", 1, 8, ld_r_r::<6, 4>),
    /* 0x75 */ Instruction::op("LD (HL),L", 1, 8, ld_r_r::<6, 5>),
    /* 0x76 */ Instruction::op("HALT", 1, 4, halt),
    /* 0x77 */ Instruction::op("LD (HL),A", 1, 8, ld_r_r::<6, 7>),
    /* 0x78 */ Instruction::op("LD A,B", 1, 4, ld_r_r::<7, 0>),
    /* 0x79 */ Instruction::op("LD A,C", 1, 4, ld_r_r::<7, 1>),
    /* 0x7A */ Instruction::op("LD A,D", 1, 4, ld_r_r::<7, 2>),
    /* 0x7B */ Instruction::op("LD A,E", 1, 4, ld_r_r::<7, 3>),
    /* 0x7C */ Instruction::op("LD A,H", 1, 4, ld_r_r::<7, 4>),
    /* 0x7D */ Instruction::op("LD A,L", 1, 4, ld_r_r::<7, 5>),
    /* 0x7E */ Instruction::op("LD A,(HL)", 1, 8, ld_r_r::<7, 6>),
    /* 0x7F */ Instruction::op("LD A,A", 1, 4, ld_r_r::<7, 7>),
    /* 0x80 */ Instruction::op("ADD A,B", 1, 4, alu_r::<0, 0>),
    /* 0x81 */ Instruction::op("ADD A,C", 1, 4, alu_r::<0, 1>),
    /* 0x82 */ Instruction::op("ADD A,D", 1, 4, alu_r::<0, 2>),
    /* 0x83 */ Instruction::op("ADD A,E", 1, 4, alu_r::<0, 3>),
    /* 0x84 */ Instruction::op("ADD A,H", 1, 4, alu_r::<0, 4>),
    /* 0x85 */ Instruction::op("ADD A,L", 1, 4, alu_r::<0, 5>),
    /* 0x86 */ Instruction::op("ADD A,(HL)", 1, 8, alu_r::<0, 6>),
    /* 0x87 */ Instruction::op("ADD A,A", 1, 4, alu_r::<0, 7>),
    /* 0x88 */ Instruction::op("ADC A,B", 1, 4, alu_r::<1, 0>),
    /* 0x89 */ Instruction::op("ADC A,C", 1, 4, alu_r::<1, 1>),
    /* 0x8A */ Instruction::op("ADC A,D", 1, 4, alu_r::<1, 2>),
    /* 0x8B */ Instruction::op("ADC A,E", 1, 4, alu_r::<1, 3>),
    /* 0x8C */ Instruction::op("ADC A,H", 1, 4, alu_r::<1, 4>),
    /* 0x8D */ Instruction::op("ADC A,L", 1, 4, alu_r::<1, 5>),
    /* 0x8E */ Instruction::op("ADC A,(HL)", 1, 8, alu_r::<1, 6>),
    /* 0x8F */ Instruction::op("ADC A,A", 1, 4, alu_r::<1, 7>),
    /* 0x90 */ Instruction::op("SUB A,B", 1, 4, alu_r::<2, 0>),
    /* 0x91 */ Instruction::op("SUB A,C", 1, 4, alu_r::<2, 1>),
    /* 0x92 */ Instruction::op("SUB A,D", 1, 4, alu_r::<2, 2>),
    /* 0x93 */ Instruction::op("SUB A,E", 1, 4, alu_r::<2, 3>),
    /* 0x94 */ Instruction::op("SUB A,H", 1, 4, alu_r::<2, 4>),
    /* 0x95 */ Instruction::op("SUB A,L", 1, 4, alu_r::<2, 5>),
    /* 0x96 */ Instruction::op("SUB A,(HL)", 1, 8, alu_r::<2, 6>),
    /* 0x97 */ Instruction::op("SUB A,A", 1, 4, alu_r::<2, 7>),
    /* 0x98 */ Instruction::op("SBC A,B", 1, 4, alu_r::<3, 0>),
    /* 0x99 */ Instruction::op("SBC A,C", 1, 4, alu_r::<3, 1>),
    /* 0x9A */ Instruction::op("SBC A,D", 1, 4, alu_r::<3, 2>),
    /* 0x9B */ Instruction::op("SBC A,E", 1, 4, alu_r::<3, 3>),
    /* 0x9C */ Instruction::op("SBC A,H", 1, 4, alu_r::<3, 4>),
    /* 0x9D */ Instruction::op("SBC A,L", 1, 4, alu_r::<3, 5>),
    /* 0x9E */ Instruction::op("SBC A,(HL)", 1, 8, alu_r::<3, 6>),
    /* 0x9F */ Instruction::op("SBC A,A", 1, 4, alu_r::<3, 7>),
    /* 0xA0 */ Instruction::op("AND A,B", 1, 4, alu_r::<4, 0>),
    /* 0xA1 */ Instruction::op("AND A,C", 1, 4, alu_r::<4, 1>),
    /* 0xA2 */ Instruction::op("AND A,D", 1, 4, alu_r::<4, 2>),
    /* 0xA3 */ Instruction::op("AND A,E", 1, 4, alu_r::<4, 3>),
    /* 0xA4 */ Instruction::op("AND A,H", 1, 4, alu_r::<4, 4>),
    /* 0xA5 */ Instruction::op("AND A,L", 1, 4, alu_r::<4, 5>),
    /* 0xA6 */ Instruction::op("AND A,(HL)", 1, 8, alu_r::<4, 6>),
    /* 0xA7 */ Instruction::op("AND A,A", 1, 4, alu_r::<4, 7>),
    /* 0xA8 */ Instruction::op("XOR A,B", 1, 4, alu_r::<5, 0>),
    /* 0xA9 */ Instruction::op("XOR A,C", 1, 4, alu_r::<5, 1>),
    /* 0xAA */ Instruction::op("XOR A,D", 1, 4, alu_r::<5, 2>),
    /* 0xAB */ Instruction::op("XOR A,E", 1, 4, alu_r::<5, 3>),
    /* 0xAC */ Instruction::op("XOR A,H", 1, 4, alu_r::<5, 4>),
    /* 0xAD */ Instruction::op("XOR A,L", 1, 4, alu_r::<5, 5>),
    /* 0xAE */ Instruction::op("XOR A,(HL)", 1, 8, alu_r::<5, 6>),
    /* 0xAF */ Instruction::op("XOR A,A", 1, 4, alu_r::<5, 7>),
    /* 0xB0 */ Instruction::op("OR A,B", 1, 4, alu_r::<6, 0>),
    /* 0xB1 */ Instruction::op("OR A,C", 1, 4, alu_r::<6, 1>),
    /* 0xB2 */ Instruction::op("OR A,D", 1, 4, alu_r::<6, 2>),
    /* 0xB3 */ Instruction::op("OR A,E", 1, 4, alu_r::<6, 3>),
    /* 0xB4 */ Instruction::op("OR A,H", 1, 4, alu_r::<6, 4>),
    /* 0xB5 */ Instruction::op("OR A,L", 1, 4, alu_r::<6, 5>),
    /* 0xB6 */ Instruction::op("OR A,(HL)", 1, 8, alu_r::<6, 6>),
    /* 0xB7 */ Instruction::op("OR A,A", 1, 4, alu_r::<6, 7>),
    /* 0xB8 */ Instruction::op("CP A,B", 1, 4, alu_r::<7, 0>),
    /* 0xB9 */ Instruction::op("CP A,C", 1, 4, alu_r::<7, 1>),
    /* 0xBA */ Instruction::op("CP A,D", 1, 4, alu_r::<7, 2>),
    /* 0xBB */ Instruction::op("CP A,E", 1, 4, alu_r::<7, 3>),
    /* 0xBC */ Instruction::op("CP A,H", 1, 4, alu_r::<7, 4>),
    /* 0xBD */ Instruction::op("CP A,L", 1, 4, alu_r::<7, 5>),
    /* 0xBE */ Instruction::op("CP A,(HL)", 1, 8, alu_r::<7, 6>),
    /* 0xBF */ Instruction::op("CP A,A", 1, 4, alu_r::<7, 7>),
    /* 0xC0 */ Instruction::branch("RET NZ", 1, 20, 8, ret_cc::<0>),
    /* 0xC1 */ Instruction::op("POP BC", 1, 12, pop::<0>),
    /* 0xC2 */ Instruction::branch("JP NZ,u16", 3, 16, 12, jp_cc::<0>),
    /* 0xC3 */ Instruction::op("JP u16", 3, 16, jp),
    /* 0xC4 */ Instruction::branch("CALL NZ,u16", 3, 24, 12, call_cc::<0>),
    /* 0xC5 */ Instruction::op("PUSH BC", 1, 16, push::<0>),
    /* 0xC6 */ Instruction::op("ADD A,u8", 2, 8, alu_u8::<0>),
    /* 0xC7 */ Instruction::op("RST 00h", 1, 16, rst::<0x00>),
    /* 0xC8 */ Instruction::branch("RET Z", 1, 20, 8, ret_cc::<1>),
    /* 0xC9 */ Instruction::op("RET", 1, 16, ret),
    /* 0xCA */ Instruction::branch("JP Z,u16", 3, 16, 12, jp_cc::<1>),
    /* 0xCB */ Instruction::op("PREFIX CB", 1, 4, prefix_cb),
    /* 0xCC */ Instruction::branch("CALL Z,u16", 3, 24, 12, call_cc::<1>),
    /* 0xCD */ Instruction::op("CALL u16", 3, 24, call),
    /* 0xCE */ Instruction::op("ADC A,u8", 2, 8, alu_u8::<1>),
    /* 0xCF */ Instruction::op("RST 08h", 1, 16, rst::<0x08>),
    /* 0xD0 */ Instruction::branch("RET NC", 1, 20, 8, ret_cc::<2>),
    /* 0xD1 */ Instruction::op("POP DE", 1, 12, pop::<1>),
    /* 0xD2 */ Instruction::branch("JP NC,u16", 3, 16, 12, jp_cc::<2>),
    /* 0xD3 */ Instruction::UNUSED,
    /* 0xD4 */ Instruction::branch("CALL NC,u16", 3, 24, 12, call_cc::<2>),
    /* 0xD5 */ Instruction::op("PUSH DE", 1, 16, push::<1>),
    /* 0xD6 */ Instruction::op("SUB A,u8", 2, 8, alu_u8::<2>),
    /* 0xD7 */ Instruction::op("RST 10h", 1, 16, rst::<0x10>),
    /* 0xD8 */ Instruction::branch("RET C", 1, 20, 8, ret_cc::<3>),
    /* 0xD9 */ Instruction::op("RETI", 1, 16, reti),
    /* 0xDA */ Instruction::branch("JP C,u16", 3, 16, 12, jp_cc::<3>),
    /* 0xDB */ Instruction::UNUSED,
    /* 0xDC */ Instruction::branch("CALL C,u16", 3, 24, 12, call_cc::<3>),
    /* 0xDD */ Instruction::UNUSED,
    /* 0xDE */ Instruction::op("SBC A,u8", 2, 8, alu_u8::<3>),
    /* 0xDF */ Instruction::op("RST 18h", 1, 16, rst::<0x18>),
    /* 0xE0 */ Instruction::op("LD (FF00+u8),A", 2, 12, ldh_u8_a),
    /* 0xE1 */ Instruction::op("POP HL", 1, 12, pop::<2>),
    /* 0xE2 */ Instruction::op("LD (FF00+C),A", 1, 8, ldh_c_a),
    /* 0xE3 */ Instruction::UNUSED,
    /* 0xE4 */ Instruction::UNUSED,
    /* 0xE5 */ Instruction::op("PUSH HL", 1, 16, push::<2>),
    /* 0xE6 */ Instruction::op("AND A,u8", 2, 8, alu_u8::<4>),
    /* 0xE7 */ Instruction::op("RST 20h", 1, 16, rst::<0x20>),
    /* 0xE8 */ Instruction::op("ADD SP,i8", 2, 16, add_sp_i8),
    /* 0xE9 */ Instruction::op("JP HL", 1, 4, jp_hl),
    /* 0xEA */ Instruction::op("LD (u16),A", 3, 16, ld_u16_a),
    /* 0xEB */ Instruction::UNUSED,
    /* 0xEC */ Instruction::UNUSED,
    /* 0xED */ Instruction::UNUSED,
    /* 0xEE */ Instruction::op("XOR A,u8", 2, 8, alu_u8::<5>),
    /* 0xEF */ Instruction::op("RST 28h", 1, 16, rst::<0x28>),
    /* 0xF0 */ Instruction::op("LD A,(FF00+u8)", 2, 12, ldh_a_u8),
    /* 0xF1 */ Instruction::op("POP AF", 1, 12, pop::<3>),
    /* 0xF2 */ Instruction::op("LD A,(FF00+C)", 1, 8, ldh_a_c),
    /* 0xF3 */ Instruction::op("DI", 1, 4, di),
    /* 0xF4 */ Instruction::UNUSED,
    /* 0xF5 */ Instruction::op("PUSH AF", 1, 16, push::<3>),
    /* 0xF6 */ Instruction::op("OR A,u8", 2, 8, alu_u8::<6>),
    /* 0xF7 */ Instruction::op("RST 30h", 1, 16, rst::<0x30>),
    /* 0xF8 */ Instruction::op("LD HL,SP+i8", 2, 12, ld_hl_sp_i8),
    /* 0xF9 */ Instruction::op("LD SP,HL", 1, 8, ld_sp_hl),
    /* 0xFA */ Instruction::op("LD A,(u16)", 3, 16, ld_a_u16),
    /* 0xFB */ Instruction::op("EI", 1, 4, ei),
    /* 0xFC */ Instruction::UNUSED,
    /* 0xFD */ Instruction::UNUSED,
    /* 0xFE */ Instruction::op("CP A,u8", 2, 8, alu_u8::<7>),
    /* 0xFF */ Instruction::op("RST 38h", 1, 16, rst::<0x38>),
];

/// CB-prefixed opcodes, indexed by the byte after 0xCB. Cycle counts
/// exclude the [`CB_PREFIX_CYCLES`] charged for the prefix itself.
pub static CB_TABLE: [Instruction; 256] = [
    /* 0x00 */ Instruction::cb("RLC B", 4, rotate::<0, 0>),
    /* 0x01 */ Instruction::cb("RLC C", 4, rotate::<0, 1>),
    /* 0x02 */ Instruction::cb("RLC D", 4, rotate::<0, 2>),
    /* 0x03 */ Instruction::cb("RLC E", 4, rotate::<0, 3>),
    /* 0x04 */ Instruction::cb("RLC H", 4, rotate::<0, 4>),
    /* 0x05 */ Instruction::cb("RLC L", 4, rotate::<0, 5>),
    /* 0x06 */ Instruction::cb("RLC (HL)", 12, rotate::<0, 6>),
    /* 0x07 */ Instruction::cb("RLC A", 4, rotate::<0, 7>),
    /* 0x08 */ Instruction::cb("RRC B", 4, rotate::<1, 0>),
    /* 0x09 */ Instruction::cb("RRC C", 4, rotate::<1, 1>),
    /* 0x0A */ Instruction::cb("RRC D", 4, rotate::<1, 2>),
    /* 0x0B */ Instruction::cb("RRC E", 4, rotate::<1, 3>),
    /* 0x0C */ Instruction::cb("RRC H", 4, rotate::<1, 4>),
    /* 0x0D */ Instruction::cb("RRC L", 4, rotate::<1, 5>),
    /* 0x0E */ Instruction::cb("RRC (HL)", 12, rotate::<1, 6>),
    /* 0x0F */ Instruction::cb("RRC A", 4, rotate::<1, 7>),
    /* 0x10 */ Instruction::cb("RL B", 4, rotate::<2, 0>),
    /* 0x11 */ Instruction::cb("RL C", 4, rotate::<2, 1>),
    /* 0x12 */ Instruction::cb("RL D", 4, rotate::<2, 2>),
    /* 0x13 */ Instruction::cb("RL E", 4, rotate::<2, 3>),
    /* 0x14 */ Instruction::cb("RL H", 4, rotate::<2, 4>),
    /* 0x15 */ Instruction::cb("RL L", 4, rotate::<2, 5>),
    /* 0x16 */ Instruction::cb("RL (HL)", 12, rotate::<2, 6>),
    /* 0x17 */ Instruction::cb("RL A", 4, rotate::<2, 7>),
    /* 0x18 */ Instruction::cb("RR B", 4, rotate::<3, 0>),
    /* 0x19 */ Instruction::cb("RR C", 4, rotate::<3, 1>),
    /* 0x1A */ Instruction::cb("RR D", 4, rotate::<3, 2>),
    /* 0x1B */ Instruction::cb("RR E", 4, rotate::<3, 3>),
    /* 0x1C */ Instruction::cb("RR H", 4, rotate::<3, 4>),
    /* 0x1D */ Instruction::cb("RR L", 4, rotate::<3, 5>),
    /* 0x1E */ Instruction::cb("RR (HL)", 12, rotate::<3, 6>),
    /* 0x1F */ Instruction::cb("RR A", 4, rotate::<3, 7>),
    /* 0x20 */ Instruction::cb("SLA B", 4, rotate::<4, 0>),
    /* 0x21 */ Instruction::cb("SLA C", 4, rotate::<4, 1>),
    /* 0x22 */ Instruction::cb("SLA D", 4, rotate::<4, 2>),
    /* 0x23 */ Instruction::cb("SLA E", 4, rotate::<4, 3>),
    /* 0x24 */ Instruction::cb("SLA H", 4, rotate::<4, 4>),
    /* 0x25 */ Instruction::cb("SLA L", 4, rotate::<4, 5>),
    /* 0x26 */ Instruction::cb("SLA (HL)", 12, rotate::<4, 6>),
    /* 0x27 */ Instruction::cb("SLA A", 4, rotate::<4, 7>),
    /* 0x28 */ Instruction::cb("SRA B", 4, rotate::<5, 0>),
    /* 0x29 */ Instruction::cb("SRA C", 4, rotate::<5, 1>),
    /* 0x2A */ Instruction::cb("SRA D", 4, rotate::<5, 2>),
    /* 0x2B */ Instruction::cb("SRA E", 4, rotate::<5, 3>),
    /* 0x2C */ Instruction::cb("SRA H", 4, rotate::<5, 4>),
    /* 0x2D */ Instruction::cb("SRA L", 4, rotate::<5, 5>),
    /* 0x2E */ Instruction::cb("SRA (HL)", 12, rotate::<5, 6>),
    /* 0x2F */ Instruction::cb("SRA A", 4, rotate::<5, 7>),
    /* 0x30 */ Instruction::cb("SWAP B", 4, rotate::<6, 0>),
    /* 0x31 */ Instruction::cb("SWAP C", 4, rotate::<6, 1>),
    /* 0x32 */ Instruction::cb("SWAP D", 4, rotate::<6, 2>),
    /* 0x33 */ Instruction::cb("SWAP E", 4, rotate::<6, 3>),
    /* 0x34 */ Instruction::cb("SWAP H", 4, rotate::<6, 4>),
    /* 0x35 */ Instruction::cb("SWAP L", 4, rotate::<6, 5>),
    /* 0x36 */ Instruction::cb("SWAP (HL)", 12, rotate::<6, 6>),
    /* 0x37 */ Instruction::cb("SWAP A", 4, rotate::<6, 7>),
    /* 0x38 */ Instruction::cb("SRL B", 4, rotate::<7, 0>),
    /* 0x39 */ Instruction::cb("SRL C", 4, rotate::<7, 1>),
    /* 0x3A */ Instruction::cb("SRL D", 4, rotate::<7, 2>),
    /* 0x3B */ Instruction::cb("SRL E", 4, rotate::<7, 3>),
    /* 0x3C */ Instruction::cb("SRL H", 4, rotate::<7, 4>),
    /* 0x3D */ Instruction::cb("SRL L", 4, rotate::<7, 5>),
    /* 0x3E */ Instruction::cb("SRL (HL)", 12, rotate::<7, 6>),
    /* 0x3F */ Instruction::cb("SRL A", 4, rotate::<7, 7>),
    /* 0x40 */ Instruction::cb("BIT 0,B", 4, bit::<0, 0>),
    /* 0x41 */ Instruction::cb("BIT 0,C", 4, bit::<0, 1>),
    /* 0x42 */ Instruction::cb("BIT 0,D", 4, bit::<0, 2>),
    /* 0x43 */ Instruction::cb("BIT 0,E", 4, bit::<0, 3>),
    /* 0x44 */ Instruction::cb("BIT 0,H", 4, bit::<0, 4>),
    /* 0x45 */ Instruction::cb("BIT 0,L", 4, bit::<0, 5>),
    /* 0x46 */ Instruction::cb("BIT 0,(HL)", 8, bit::<0, 6>),
    /* 0x47 */ Instruction::cb("BIT 0,A", 4, bit::<0, 7>),
    /* 0x48 */ Instruction::cb("BIT 1,B", 4, bit::<1, 0>),
    /* 0x49 */ Instruction::cb("BIT 1,C", 4, bit::<1, 1>),
    /* 0x4A */ Instruction::cb("BIT 1,D", 4, bit::<1, 2>),
    /* 0x4B */ Instruction::cb("BIT 1,E", 4, bit::<1, 3>),
    /* 0x4C */ Instruction::cb("BIT 1,H", 4, bit::<1, 4>),
    /* 0x4D */ Instruction::cb("BIT 1,L", 4, bit::<1, 5>),
    /* 0x4E */ Instruction::cb("BIT 1,(HL)", 8, bit::<1, 6>),
    /* 0x4F */ Instruction::cb("BIT 1,A", 4, bit::<1, 7>),
    /* 0x50 */ Instruction::cb("BIT 2,B", 4, bit::<2, 0>),
    /* 0x51 */ Instruction::cb("BIT 2,C", 4, bit::<2, 1>),
    /* 0x52 */ Instruction::cb("BIT 2,D", 4, bit::<2, 2>),
    /* 0x53 */ Instruction::cb("BIT 2,E", 4, bit::<2, 3>),
    /* 0x54 */ Instruction::cb("BIT 2,H", 4, bit::<2, 4>),
    /* 0x55 */ Instruction::cb("BIT 2,L", 4, bit::<2, 5>),
    /* 0x56 */ Instruction::cb("BIT 2,(HL)", 8, bit::<2, 6>),
    /* 0x57 */ Instruction::cb("BIT 2,A", 4, bit::<2, 7>),
    /* 0x58 */ Instruction::cb("BIT 3,B", 4, bit::<3, 0>),
    /* 0x59 */ Instruction::cb("BIT 3,C", 4, bit::<3, 1>),
    /* 0x5A */ Instruction::cb("BIT 3,D", 4, bit::<3, 2>),
    /* 0x5B */ Instruction::cb("BIT 3,E", 4, bit::<3, 3>),
    /* 0x5C */ Instruction::cb("BIT 3,H", 4, bit::<3, 4>),
    /* 0x5D */ Instruction::cb("BIT 3,L", 4, bit::<3, 5>),
    /* 0x5E */ Instruction::cb("BIT 3,(HL)", 8, bit::<3, 6>),
    /* 0x5F */ Instruction::cb("BIT 3,A", 4, bit::<3, 7>),
    /* 0x60 */ Instruction::cb("BIT 4,B", 4, bit::<4, 0>),
    /* 0x61 */ Instruction::cb("BIT 4,C", 4, bit::<4, 1>),
    /* 0x62 */ Instruction::cb("BIT 4,D", 4, bit::<4, 2>),
    /* 0x63 */ Instruction::cb("BIT 4,E", 4, bit::<4, 3>),
    /* 0x64 */ Instruction::cb("BIT 4,H", 4, bit::<4, 4>),
    /* 0x65 */ Instruction::cb("BIT 4,L", 4, bit::<4, 5>),
    /* 0x66 */ Instruction::cb("BIT 4,(HL)", 8, bit::<4, 6>),
    /* 0x67 */ Instruction::cb("BIT 4,A", 4, bit::<4, 7>),
    /* 0x68 */ Instruction::cb("BIT 5,B", 4, bit::<5, 0>),
    /* 0x69 */ Instruction::cb("BIT 5,C", 4, bit::<5, 1>),
    /* 0x6A */ Instruction::cb("BIT 5,D", 4, bit::<5, 2>),
    /* 0x6B */ Instruction::cb("BIT 5,E", 4, bit::<5, 3>),
    /* 0x6C */ Instruction::cb("BIT 5,H", 4, bit::<5, 4>),
    /* 0x6D */ Instruction::cb("BIT 5,L", 4, bit::<5, 5>),
    /* 0x6E */ Instruction::cb("BIT 5,(HL)", 8, bit::<5, 6>),
    /* 0x6F */ Instruction::cb("BIT 5,A", 4, bit::<5, 7>),
    /* 0x70 */ Instruction::cb("BIT 6,B", 4, bit::<6, 0>),
    /* 0x71 */ Instruction::cb("BIT 6,C", 4, bit::<6, 1>),
    /* 0x72 */ Instruction::cb("BIT 6,D", 4, bit::<6, 2>),
    /* 0x73 */ Instruction::cb("BIT 6,E", 4, bit::<6, 3>),
    /* 0x74 */ Instruction::cb("BIT 6,H", 4, bit::<6, 4>),
    /* 0x75 */ Instruction::cb("BIT 6,L", 4, bit::<6, 5>),
    /* 0x76 */ Instruction::cb("BIT 6,(HL)", 8, bit::<6, 6>),
    /* 0x77 */ Instruction::cb("BIT 6,A", 4, bit::<6, 7>),
    /* 0x78 */ Instruction::cb("BIT 7,B", 4, bit::<7, 0>),
    /* 0x79 */ Instruction::cb("BIT 7,C", 4, bit::<7, 1>),
    /* 0x7A */ Instruction::cb("BIT 7,D", 4, bit::<7, 2>),
    /* 0x7B */ Instruction::cb("BIT 7,E", 4, bit::<7, 3>),
    /* 0x7C */ Instruction::cb("BIT 7,H", 4, bit::<7, 4>),
    /* 0x7D */ Instruction::cb("BIT 7,L", 4, bit::<7, 5>),
    /* 0x7E */ Instruction::cb("BIT 7,(HL)", 8, bit::<7, 6>),
    /* 0x7F */ Instruction::cb("BIT 7,A", 4, bit::<7, 7>),
    /* 0x80 */ Instruction::cb("RES 0,B", 4, res::<0, 0>),
    /* 0x81 */ Instruction::cb("RES 0,C", 4, res::<0, 1>),
    /* 0x82 */ Instruction::cb("RES 0,D", 4, res::<0, 2>),
    /* 0x83 */ Instruction::cb("RES 0,E", 4, res::<0, 3>),
    /* 0x84 */ Instruction::cb("RES 0,H", 4, res::<0, 4>),
    /* 0x85 */ Instruction::cb("RES 0,L", 4, res::<0, 5>),
    /* 0x86 */ Instruction::cb("RES 0,(HL)", 12, res::<0, 6>),
    /* 0x87 */ Instruction::cb("RES 0,A", 4, res::<0, 7>),
    /* 0x88 */ Instruction::cb("RES 1,B", 4, res::<1, 0>),
    /* 0x89 */ Instruction::cb("RES 1,C", 4, res::<1, 1>),
    /* 0x8A */ Instruction::cb("RES 1,D", 4, res::<1, 2>),
    /* 0x8B */ Instruction::cb("RES 1,E", 4, res::<1, 3>),
    /* 0x8C */ Instruction::cb("RES 1,H", 4, res::<1, 4>),
    /* 0x8D */ Instruction::cb("RES 1,L", 4, res::<1, 5>),
    /* 0x8E */ Instruction::cb("RES 1,(HL)", 12, res::<1, 6>),
    /* 0x8F */ Instruction::cb("RES 1,A", 4, res::<1, 7>),
    /* 0x90 */ Instruction::cb("RES 2,B", 4, res::<2, 0>),
    /* 0x91 */ Instruction::cb("RES 2,C", 4, res::<2, 1>),
    /* 0x92 */ Instruction::cb("RES 2,D", 4, res::<2, 2>),
    /* 0x93 */ Instruction::cb("RES 2,E", 4, res::<2, 3>),
    /* 0x94 */ Instruction::cb("RES 2,H", 4, res::<2, 4>),
    /* 0x95 */ Instruction::cb("RES 2,L", 4, res::<2, 5>),
    /* 0x96 */ Instruction::cb("RES 2,(HL)", 12, res::<2, 6>),
    /* 0x97 */ Instruction::cb("RES 2,A", 4, res::<2, 7>),
    /* 0x98 */ Instruction::cb("RES 3,B", 4, res::<3, 0>),
    /* 0x99 */ Instruction::cb("RES 3,C", 4, res::<3, 1>),
    /* 0x9A */ Instruction::cb("RES 3,D", 4, res::<3, 2>),
    /* 0x9B */ Instruction::cb("RES 3,E", 4, res::<3, 3>),
    /* 0x9C */ Instruction::cb("RES 3,H", 4, res::<3, 4>),
    /* 0x9D */ Instruction::cb("RES 3,L", 4, res::<3, 5>),
    /* 0x9E */ Instruction::cb("RES 3,(HL)", 12, res::<3, 6>),
    /* 0x9F */ Instruction::cb("RES 3,A", 4, res::<3, 7>),
    /* 0xA0 */ Instruction::cb("RES 4,B", 4, res::<4, 0>),
    /* 0xA1 */ Instruction::cb("RES 4,C", 4, res::<4, 1>),
    /* 0xA2 */ Instruction::cb("RES 4,D", 4, res::<4, 2>),
    /* 0xA3 */ Instruction::cb("RES 4,E", 4, res::<4, 3>),
    /* 0xA4 */ Instruction::cb("RES 4,H", 4, res::<4, 4>),
    /* 0xA5 */ Instruction::cb("RES 4,L", 4, res::<4, 5>),
    /* 0xA6 */ Instruction::cb("RES 4,(HL)", 12, res::<4, 6>),
    /* 0xA7 */ Instruction::cb("RES 4,A", 4, res::<4, 7>),
    /* 0xA8 */ Instruction::cb("RES 5,B", 4, res::<5, 0>),
    /* 0xA9 */ Instruction::cb("RES 5,C", 4, res::<5, 1>),
    /* 0xAA */ Instruction::cb("RES 5,D", 4, res::<5, 2>),
    /* 0xAB */ Instruction::cb("RES 5,E", 4, res::<5, 3>),
    /* 0xAC */ Instruction::cb("RES 5,H", 4, res::<5, 4>),
    /* 0xAD */ Instruction::cb("RES 5,L", 4, res::<5, 5>),
    /* 0xAE */ Instruction::cb("RES 5,(HL)", 12, res::<5, 6>),
    /* 0xAF */ Instruction::cb("RES 5,A", 4, res::<5, 7>),
    /* 0xB0 */ Instruction::cb("RES 6,B", 4, res::<6, 0>),
    /* 0xB1 */ Instruction::cb("RES 6,C", 4, res::<6, 1>),
    /* 0xB2 */ Instruction::cb("RES 6,D", 4, res::<6, 2>),
    /* 0xB3 */ Instruction::cb("RES 6,E", 4, res::<6, 3>),
    /* 0xB4 */ Instruction::cb("RES 6,H", 4, res::<6, 4>),
    /* 0xB5 */ Instruction::cb("RES 6,L", 4, res::<6, 5>),
    /* 0xB6 */ Instruction::cb("RES 6,(HL)", 12, res::<6, 6>),
    /* 0xB7 */ Instruction::cb("RES 6,A", 4, res::<6, 7>),
    /* 0xB8 */ Instruction::cb("RES 7,B", 4, res::<7, 0>),
    /* 0xB9 */ Instruction::cb("RES 7,C", 4, res::<7, 1>),
    /* 0xBA */ Instruction::cb("RES 7,D", 4, res::<7, 2>),
    /* 0xBB */ Instruction::cb("RES 7,E", 4, res::<7, 3>),
    /* 0xBC */ Instruction::cb("RES 7,H", 4, res::<7, 4>),
    /* 0xBD */ Instruction::cb("RES 7,L", 4, res::<7, 5>),
    /* 0xBE */ Instruction::cb("RES 7,(HL)", 12, res::<7, 6>),
    /* 0xBF */ Instruction::cb("RES 7,A", 4, res::<7, 7>),
    /* 0xC0 */ Instruction::cb("SET 0,B", 4, set::<0, 0>),
    /* 0xC1 */ Instruction::cb("SET 0,C", 4, set::<0, 1>),
    /* 0xC2 */ Instruction::cb("SET 0,D", 4, set::<0, 2>),
    /* 0xC3 */ Instruction::cb("SET 0,E", 4, set::<0, 3>),
    /* 0xC4 */ Instruction::cb("SET 0,H", 4, set::<0, 4>),
    /* 0xC5 */ Instruction::cb("SET 0,L", 4, set::<0, 5>),
    /* 0xC6 */ Instruction::cb("SET 0,(HL)", 12, set::<0, 6>),
    /* 0xC7 */ Instruction::cb("SET 0,A", 4, set::<0, 7>),
    /* 0xC8 */ Instruction::cb("SET 1,B", 4, set::<1, 0>),
    /* 0xC9 */ Instruction::cb("SET 1,C", 4, set::<1, 1>),
    /* 0xCA */ Instruction::cb("SET 1,D", 4, set::<1, 2>),
    /* 0xCB */ Instruction::cb("SET 1,E", 4, set::<1, 3>),
    /* 0xCC */ Instruction::cb("SET 1,H", 4, set::<1, 4>),
    /* 0xCD */ Instruction::cb("SET 1,L", 4, set::<1, 5>),
    /* 0xCE */ Instruction::cb("SET 1,(HL)", 12, set::<1, 6>),
    /* 0xCF */ Instruction::cb("SET 1,A", 4, set::<1, 7>),
    /* 0xD0 */ Instruction::cb("SET 2,B", 4, set::<2, 0>),
    /* 0xD1 */ Instruction::cb("SET 2,C", 4, set::<2, 1>),
    /* 0xD2 */ Instruction::cb("SET 2,D", 4, set::<2, 2>),
    /* 0xD3 */ Instruction::cb("SET 2,E", 4, set::<2, 3>),
    /* 0xD4 */ Instruction::cb("SET 2,H", 4, set::<2, 4>),
    /* 0xD5 */ Instruction::cb("SET 2,L", 4, set::<2, 5>),
    /* 0xD6 */ Instruction::cb("SET 2,(HL)", 12, set::<2, 6>),
    /* 0xD7 */ Instruction::cb("SET 2,A", 4, set::<2, 7>),
    /* 0xD8 */ Instruction::cb("SET 3,B", 4, set::<3, 0>),
    /* 0xD9 */ Instruction::cb("SET 3,C", 4, set::<3, 1>),
    /* 0xDA */ Instruction::cb("SET 3,D", 4, set::<3, 2>),
    /* 0xDB */ Instruction::cb("SET 3,E", 4, set::<3, 3>),
    /* 0xDC */ Instruction::cb("SET 3,H", 4, set::<3, 4>),
    /* 0xDD */ Instruction::cb("SET 3,L", 4, set::<3, 5>),
    /* 0xDE */ Instruction::cb("SET 3,(HL)", 12, set::<3, 6>),
    /* 0xDF */ Instruction::cb("SET 3,A", 4, set::<3, 7>),
    /* 0xE0 */ Instruction::cb("SET 4,B", 4, set::<4, 0>),
    /* 0xE1 */ Instruction::cb("SET 4,C", 4, set::<4, 1>),
    /* 0xE2 */ Instruction::cb("SET 4,D", 4, set::<4, 2>),
    /* 0xE3 */ Instruction::cb("SET 4,E", 4, set::<4, 3>),
    /* 0xE4 */ Instruction::cb("SET 4,H", 4, set::<4, 4>),
    /* 0xE5 */ Instruction::cb("SET 4,L", 4, set::<4, 5>),
    /* 0xE6 */ Instruction::cb("SET 4,(HL)", 12, set::<4, 6>),
    /* 0xE7 */ Instruction::cb("SET 4,A", 4, set::<4, 7>),
    /* 0xE8 */ Instruction::cb("SET 5,B", 4, set::<5, 0>),
    /* 0xE9 */ Instruction::cb("SET 5,C", 4, set::<5, 1>),
    /* 0xEA */ Instruction::cb("SET 5,D", 4, set::<5, 2>),
    /* 0xEB */ Instruction::cb("SET 5,E", 4, set::<5, 3>),
    /* 0xEC */ Instruction::cb("SET 5,H", 4, set::<5, 4>),
    /* 0xED */ Instruction::cb("SET 5,L", 4, set::<5, 5>),
    /* 0xEE */ Instruction::cb("SET 5,(HL)", 12, set::<5, 6>),
    /* 0xEF */ Instruction::cb("SET 5,A", 4, set::<5, 7>),
    /* 0xF0 */ Instruction::cb("SET 6,B", 4, set::<6, 0>),
    /* 0xF1 */ Instruction::cb("SET 6,C", 4, set::<6, 1>),
    /* 0xF2 */ Instruction::cb("SET 6,D", 4, set::<6, 2>),
    /* 0xF3 */ Instruction::cb("SET 6,E", 4, set::<6, 3>),
    /* 0xF4 */ Instruction::cb("SET 6,H", 4, set::<6, 4>),
    /* 0xF5 */ Instruction::cb("SET 6,L", 4, set::<6, 5>),
    /* 0xF6 */ Instruction::cb("SET 6,(HL)", 12, set::<6, 6>),
    /* 0xF7 */ Instruction::cb("SET 6,A", 4, set::<6, 7>),
    /* 0xF8 */ Instruction::cb("SET 7,B", 4, set::<7, 0>),
    /* 0xF9 */ Instruction::cb("SET 7,C", 4, set::<7, 1>),
    /* 0xFA */ Instruction::cb("SET 7,D", 4, set::<7, 2>),
    /* 0xFB */ Instruction::cb("SET 7,E", 4, set::<7, 3>),
    /* 0xFC */ Instruction::cb("SET 7,H", 4, set::<7, 4>),
    /* 0xFD */ Instruction::cb("SET 7,L", 4, set::<7, 5>),
    /* 0xFE */ Instruction::cb("SET 7,(HL)", 12, set::<7, 6>),
    /* 0xFF */ Instruction::cb("SET 7,A", 4, set::<7, 7>),
];
