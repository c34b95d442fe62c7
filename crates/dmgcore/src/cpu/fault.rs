use std::fmt;

use super::Registers;

/// Unrecoverable CPU condition.
///
/// Hardware hard-locks on these; the core mirrors that by refusing to run
/// further instructions until [`Cpu::reset`](super::Cpu::reset).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuFault {
    /// An opcode with no defined operation was fetched at `pc`.
    UndefinedOpcode {
        opcode: u8,
        pc: u16,
        registers: Registers,
    },
    /// A step was requested after an earlier fault locked the CPU.
    Locked { pc: u16 },
}

impl fmt::Display for CpuFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuFault::UndefinedOpcode {
                opcode,
                pc,
                registers,
            } => write!(
                f,
                "undefined opcode {opcode:#04X} at {pc:#06X} [{registers}]"
            ),
            CpuFault::Locked { pc } => {
                write!(f, "CPU is locked after a fault (PC={pc:#06X})")
            }
        }
    }
}

impl std::error::Error for CpuFault {}
