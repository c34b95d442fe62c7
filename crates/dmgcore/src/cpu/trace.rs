//! Per-step tracing hook.
//!
//! The engine never logs instructions on its own. A [`Tracer`] passed to
//! [`Cpu::step_traced`](super::Cpu::step_traced) sees one [`TraceRecord`]
//! per step; [`NullTracer`] is the default and costs nothing.

use super::{format_instruction, Instruction, Registers};

/// What one step did.
#[derive(Clone, Copy, Debug)]
pub struct TraceRecord {
    /// Address the opcode was fetched from (or the idle PC while halted).
    pub pc: u16,
    /// Opcode byte; for CB forms, the byte after the prefix.
    pub opcode: u8,
    pub prefixed: bool,
    /// `None` for a step spent idling in HALT.
    pub instruction: Option<&'static Instruction>,
    operands: [u8; 2],
    /// Register file after the step (including any interrupt dispatch).
    pub registers: Registers,
    pub ime: bool,
    pub halted: bool,
    /// Total T-cycles of the step.
    pub cycles: u8,
}

impl TraceRecord {
    #[allow(clippy::too_many_arguments)]
    pub(super) fn new(
        pc: u16,
        opcode: u8,
        prefixed: bool,
        instruction: Option<&'static Instruction>,
        operands: [u8; 2],
        registers: Registers,
        ime: bool,
        halted: bool,
        cycles: u8,
    ) -> Self {
        Self {
            pc,
            opcode,
            prefixed,
            instruction,
            operands,
            registers,
            ime,
            halted,
            cycles,
        }
    }

    /// Raw operand bytes that followed the opcode.
    pub fn operands(&self) -> &[u8] {
        let len = self
            .instruction
            .map_or(0, |instruction| instruction.operand_len() as usize);
        &self.operands[..len]
    }

    /// Disassembled text, or `HALT (idle)` for a halted step.
    pub fn text(&self) -> String {
        match self.instruction {
            Some(instruction) => format_instruction(instruction, self.operands()),
            None => String::from("HALT (idle)"),
        }
    }
}

pub trait Tracer {
    /// When false the engine skips building records (and the operand
    /// reads that go with them).
    fn enabled(&self) -> bool {
        true
    }

    fn trace(&mut self, record: &TraceRecord);
}

/// Tracer that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTracer;

impl Tracer for NullTracer {
    fn enabled(&self) -> bool {
        false
    }

    fn trace(&mut self, _record: &TraceRecord) {}
}

/// Emits one `log::trace!` line per step.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn enabled(&self) -> bool {
        log::log_enabled!(log::Level::Trace)
    }

    fn trace(&mut self, record: &TraceRecord) {
        log::trace!(
            "{:04X}: {:<20} {} IME={} HALT={} +{}",
            record.pc,
            record.text(),
            record.registers,
            u8::from(record.ime),
            u8::from(record.halted),
            record.cycles
        );
    }
}
