mod alu;
mod bus;
mod disasm;
mod fault;
mod helpers;
mod init;
mod instructions;
mod interrupts;
mod ops;
mod regs;
mod step;
mod trace;

pub use bus::{Bus, DIV_ADDR};
pub use disasm::{disassemble, format_instruction};
pub use fault::CpuFault;
pub use instructions::{Instruction, BASE_TABLE, CB_PREFIX, CB_PREFIX_CYCLES, CB_TABLE};
pub use regs::{Flag, Registers};
pub use trace::{LogTracer, NullTracer, TraceRecord, Tracer};

/// T-cycles reported for a step taken while the CPU sits in HALT.
pub const HALT_IDLE_CYCLES: u8 = 4;

/// Game Boy CPU core.
///
/// Holds the register file and the control flags that survive between
/// instructions. Memory is never owned here; every step borrows a [`Bus`].
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    /// Set when HALT executes with IME=0 while an interrupt is already
    /// pending. The next opcode fetch then reads its byte without moving
    /// PC, so that byte is executed twice.
    halt_bug: bool,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// When true, the CPU has fetched an undefined opcode. Real hardware
    /// hard-locks in that case, so every later step reports a fault until
    /// `reset`.
    locked: bool,
}

#[cfg(test)]
mod tests;
