use super::{Bus, Cpu};
use crate::interrupt::{Interrupt, InterruptFlags, DISPATCH_CYCLES, IE_ADDR, IF_ADDR};

impl Cpu {
    /// Interrupts both requested (IF) and enabled (IE).
    #[inline]
    pub fn pending_interrupts(bus: &mut dyn Bus) -> InterruptFlags {
        let if_reg = bus.read8(IF_ADDR);
        let ie_reg = bus.read8(IE_ADDR);
        InterruptFlags::from_bits_truncate(if_reg & ie_reg)
    }

    /// Request `interrupt` by setting its IF bit through the bus.
    ///
    /// A halted CPU is woken even if IME is clear; dispatch still waits for
    /// the next instruction boundary.
    pub fn raise_interrupt(&mut self, bus: &mut dyn Bus, interrupt: Interrupt) {
        let if_reg = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, if_reg | interrupt.flag().bits());
        self.halted = false;
    }

    /// Promote a pending EI once the instruction after it has completed.
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        }
        if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }

    /// Evaluate interrupts at an instruction boundary.
    ///
    /// Dispatches at most one interrupt, the highest-priority one pending,
    /// and returns the extra cycles it consumed (0 when nothing fired).
    pub(super) fn service_interrupts(&mut self, bus: &mut dyn Bus) -> u8 {
        let pending = Self::pending_interrupts(bus);
        let Some(interrupt) = pending.highest_priority() else {
            return 0;
        };

        if !self.ime {
            // Pending interrupts end HALT even with IME clear.
            self.halted = false;
            return 0;
        }

        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.halted = false;

        let mut return_pc = self.regs.pc;
        if self.halt_bug {
            // EI; HALT with an interrupt already pending: the repeated byte
            // is the HALT itself, so the handler returns to it.
            self.halt_bug = false;
            return_pc = return_pc.wrapping_sub(1);
        }
        self.push_u16(bus, return_pc);

        let if_reg = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, if_reg & !interrupt.flag().bits());

        self.regs.pc = interrupt.vector();
        log::debug!(
            "interrupt {:?} -> {:#06X} (return {:#06X}, IF={:#04X} IE={:#04X})",
            interrupt,
            self.regs.pc,
            return_pc,
            if_reg,
            bus.read8(IE_ADDR)
        );
        DISPATCH_CYCLES
    }
}
