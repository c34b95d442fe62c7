use super::{Cpu, Flag};

impl Cpu {
    /// ADD (`with_carry == false`) or ADC into A.
    pub(super) fn alu_add(&mut self, value: u8, with_carry: bool) {
        let a = self.regs.a();
        let cin = u8::from(with_carry && self.get_flag(Flag::C));

        let wide = u16::from(a) + u16::from(value) + u16::from(cin);
        let sum = wide as u8;
        let nibble_carry = (a & 0x0F) + (value & 0x0F) + cin > 0x0F;

        self.regs.set_a(sum);
        self.set_znhc(sum == 0, false, nibble_carry, wide > 0xFF);
    }

    /// SUB or SBC into A.
    pub(super) fn alu_sub(&mut self, value: u8, with_carry: bool) {
        let diff = self.subtract_flags(value, with_carry);
        self.regs.set_a(diff);
    }

    /// CP: the flags of `A - value`, A untouched.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.subtract_flags(value, false);
    }

    fn subtract_flags(&mut self, value: u8, with_carry: bool) -> u8 {
        let a = self.regs.a();
        let cin = u8::from(with_carry && self.get_flag(Flag::C));

        let diff = a.wrapping_sub(value).wrapping_sub(cin);
        let nibble_borrow = (a & 0x0F) < (value & 0x0F) + cin;
        let borrow = u16::from(a) < u16::from(value) + u16::from(cin);

        self.set_znhc(diff == 0, true, nibble_borrow, borrow);
        diff
    }

    /// AND, XOR and OR. H is set only by AND.
    fn logic(&mut self, result: u8, half: bool) {
        self.regs.set_a(result);
        self.set_znhc(result == 0, false, half, false);
    }

    /// Apply one of the eight A-register ALU operations by its opcode
    /// index: 0=ADD 1=ADC 2=SUB 3=SBC 4=AND 5=XOR 6=OR 7=CP.
    pub(super) fn alu_op(&mut self, op: u8, value: u8) {
        let a = self.regs.a();
        match op {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.logic(a & value, true),
            5 => self.logic(a ^ value, false),
            6 => self.logic(a | value, false),
            _ => self.alu_cp(value),
        }
    }

    /// BCD correction of A after an ADD/ADC (N clear) or SUB/SBC (N set).
    /// N is preserved, H always ends up clear.
    pub(super) fn alu_daa(&mut self) {
        let subtract = self.get_flag(Flag::N);
        let mut a = self.regs.a();
        let mut correction = 0u8;
        let mut carry = self.get_flag(Flag::C);

        if self.get_flag(Flag::H) || (!subtract && a & 0x0F > 0x09) {
            correction |= 0x06;
        }
        if carry || (!subtract && a > 0x99) {
            correction |= 0x60;
            carry = true;
        }

        a = if subtract {
            a.wrapping_sub(correction)
        } else {
            a.wrapping_add(correction)
        };

        self.regs.set_a(a);
        self.set_znhc(a == 0, subtract, false, carry);
    }

    /// INC r / INC (HL). Carry is left alone.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let out = value.wrapping_add(1);
        let c = self.get_flag(Flag::C);
        self.set_znhc(out == 0, false, value & 0x0F == 0x0F, c);
        out
    }

    /// DEC r / DEC (HL). Carry is left alone.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let out = value.wrapping_sub(1);
        let c = self.get_flag(Flag::C);
        self.set_znhc(out == 0, true, value & 0x0F == 0, c);
        out
    }

    /// ADD HL,rr: carries out of bit 11 and bit 15, Z kept.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let z = self.get_flag(Flag::Z);
        let (sum, overflow) = hl.overflowing_add(value);

        self.set_znhc(z, false, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF, overflow);
        self.regs.set_hl(sum);
    }

    /// `base + i8` as used by ADD SP,i8 and LD HL,SP+i8. Flags come from
    /// the unsigned low-byte addition; Z and N are cleared.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let low = base as u8;
        let h = (low & 0x0F) + (imm8 & 0x0F) > 0x0F;
        let c = u16::from(low) + u16::from(imm8) > 0xFF;

        self.set_znhc(false, false, h, c);
        base.wrapping_add(imm8 as i8 as u16)
    }

    /// Rotate/shift family shared by the CB table and the accumulator
    /// forms, by CB opcode index:
    /// 0=RLC 1=RRC 2=RL 3=RR 4=SLA 5=SRA 6=SWAP 7=SRL.
    ///
    /// Sets Z from the result, clears N and H, and sets C to the bit
    /// shifted out (SWAP always clears C).
    pub(super) fn alu_rotate(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.get_flag(Flag::C);
        let (result, carry_out) = match op {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            3 => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        };

        self.set_znhc(result == 0, false, false, carry_out);
        result
    }

    /// BIT b: Z is the complement of the tested bit, N=0, H=1, C preserved.
    #[inline]
    pub(super) fn alu_bit(&mut self, bit: u8, value: u8) {
        let c = self.get_flag(Flag::C);
        self.set_znhc(value & (1 << bit) == 0, false, true, c);
    }
}
