use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            regs: Registers::power_on(),
            ime: false,
            halted: false,
            halt_bug: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            locked: false,
        }
    }

    /// Reset the CPU to its power-on state.
    ///
    /// Registers return to the values the DMG boot ROM hands over at
    /// 0x0100. IME is clear at that point; the game is responsible for
    /// enabling interrupts via EI/RETI as needed.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether an undefined opcode has locked the CPU.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether the next opcode fetch will repeat its byte (HALT bug).
    pub fn halt_bug_pending(&self) -> bool {
        self.halt_bug
    }
}
