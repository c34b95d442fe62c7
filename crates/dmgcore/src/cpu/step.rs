use super::{
    Bus, Cpu, CpuFault, NullTracer, TraceRecord, Tracer, BASE_TABLE, CB_PREFIX,
    CB_PREFIX_CYCLES, CB_TABLE, HALT_IDLE_CYCLES,
};

impl Cpu {
    /// Execute one instruction (or one idle HALT slot) and return the
    /// T-cycles consumed, interrupt dispatch included.
    ///
    /// Undefined opcodes are fatal: this panics with the fault diagnostic.
    /// Use [`Cpu::try_step`] to get the fault as a value instead.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u8 {
        self.step_traced(bus, &mut NullTracer)
    }

    pub fn try_step<B: Bus>(&mut self, bus: &mut B) -> Result<u8, CpuFault> {
        self.try_step_traced(bus, &mut NullTracer)
    }

    pub fn step_traced<B: Bus, T: Tracer + ?Sized>(&mut self, bus: &mut B, tracer: &mut T) -> u8 {
        match self.try_step_traced(bus, tracer) {
            Ok(cycles) => cycles,
            Err(fault) => panic!("fatal CPU fault: {fault}"),
        }
    }

    /// One machine step.
    ///
    /// Order within a step is fixed: execute the instruction (all of its bus
    /// accesses), tick the bus with its cycles, promote a delayed EI, then
    /// evaluate interrupts at the boundary and tick for any dispatch.
    pub fn try_step_traced<B: Bus, T: Tracer + ?Sized>(
        &mut self,
        bus: &mut B,
        tracer: &mut T,
    ) -> Result<u8, CpuFault> {
        let bus: &mut dyn Bus = bus;

        if self.locked {
            return Err(CpuFault::Locked { pc: self.regs.pc });
        }

        let pc = self.regs.pc;
        let mut opcode = 0;
        let mut prefixed = false;
        let mut executed = None;
        let mut operands = [0u8; 2];

        let cycles = if self.halted {
            HALT_IDLE_CYCLES
        } else {
            opcode = self.fetch8(bus);
            let (instruction, prefix_cycles) = if opcode == CB_PREFIX {
                opcode = self.fetch8(bus);
                prefixed = true;
                (&CB_TABLE[opcode as usize], CB_PREFIX_CYCLES)
            } else {
                (&BASE_TABLE[opcode as usize], 0)
            };

            if !instruction.is_defined() {
                self.locked = true;
                let registers = self.regs;
                log::error!(
                    "undefined opcode {opcode:#04X} fetched at {pc:#06X}, CPU locked [{registers}]"
                );
                return Err(CpuFault::UndefinedOpcode {
                    opcode,
                    pc,
                    registers,
                });
            }

            if tracer.enabled() {
                let len = instruction.operand_len() as usize;
                for (offset, slot) in operands.iter_mut().take(len).enumerate() {
                    *slot = bus.read8(self.regs.pc.wrapping_add(offset as u16));
                }
            }

            executed = Some(instruction);
            prefix_cycles + instruction.execute(self, bus)
        };

        bus.tick(cycles);

        if executed.is_some() {
            self.apply_ime_delay();
        }

        let dispatch = self.service_interrupts(bus);
        if dispatch > 0 {
            bus.tick(dispatch);
        }

        let total = cycles + dispatch;
        if tracer.enabled() {
            tracer.trace(&TraceRecord::new(
                pc,
                opcode,
                prefixed,
                executed,
                operands,
                self.regs,
                self.ime,
                self.halted,
                total,
            ));
        }
        Ok(total)
    }
}
