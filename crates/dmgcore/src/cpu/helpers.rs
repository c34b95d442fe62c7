use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Helper to read an 8-bit register or (HL) by index.
    ///
    /// The encoding matches the standard Game Boy register order used by
    /// opcode tables:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn read_reg8(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match index {
            0 => self.regs.b(),
            1 => self.regs.c(),
            2 => self.regs.d(),
            3 => self.regs.e(),
            4 => self.regs.h(),
            5 => self.regs.l(),
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a(),
        }
    }

    /// Helper to write an 8-bit register or (HL) by index.
    ///
    /// The encoding matches `read_reg8`.
    #[inline]
    pub(super) fn write_reg8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index {
            0 => self.regs.set_b(value),
            1 => self.regs.set_c(value),
            2 => self.regs.set_d(value),
            3 => self.regs.set_e(value),
            4 => self.regs.set_h(value),
            5 => self.regs.set_l(value),
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.set_a(value),
        }
    }

    /// 16-bit register pair by index as used by LD/INC/DEC/ADD:
    /// 0=BC, 1=DE, 2=HL, 3=SP.
    #[inline]
    pub(super) fn read_rp(&self, index: u8) -> u16 {
        match index {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn write_rp(&mut self, index: u8, value: u16) {
        match index {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    /// 16-bit register pair by index as used by PUSH/POP:
    /// 0=BC, 1=DE, 2=HL, 3=AF.
    #[inline]
    pub(super) fn read_rp2(&self, index: u8) -> u16 {
        match index {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.af(),
        }
    }

    #[inline]
    pub(super) fn write_rp2(&mut self, index: u8, value: u16) {
        match index {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.set_af(value),
        }
    }

    /// Branch condition by index: 0=NZ, 1=Z, 2=NC, 3=C.
    #[inline]
    pub(super) fn condition(&self, cc: u8) -> bool {
        match cc {
            0 => !self.get_flag(Flag::Z),
            1 => self.get_flag(Flag::Z),
            2 => !self.get_flag(Flag::C),
            _ => self.get_flag(Flag::C),
        }
    }

    #[inline]
    pub(super) fn fetch8(&mut self, bus: &mut dyn Bus) -> u8 {
        let value = bus.read8(self.regs.pc);
        if self.halt_bug {
            // HALT bug: this is deliberate hardware behaviour, not a defect
            // to fix. The first fetch after the bug reads the byte but does
            // not increment PC, so the same byte is fetched again next.
            self.halt_bug = false;
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        value
    }

    #[inline]
    pub(super) fn fetch16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Push a 16-bit value: high byte goes to SP-1, low byte to SP-2.
    #[inline]
    pub(super) fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(super) fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }
}
