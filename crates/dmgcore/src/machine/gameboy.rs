use crate::cpu::{Bus, Cpu, CpuFault, NullTracer, Tracer};
use crate::interrupt::Interrupt;

use super::cartridge::{self, Cartridge, CartridgeError};
use super::joypad::Button;
use super::GameBoyBus;

/// High-level DMG machine.
///
/// Owns the CPU, the bus and the per-step tracer. Each `step` runs one
/// instruction, feeds its cycles to the timer, then lets the CPU take at
/// most one interrupt.
pub struct GameBoy {
    cpu: Cpu,
    bus: GameBoyBus,
    tracer: Box<dyn Tracer>,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self {
            cpu: Cpu::new(),
            bus: GameBoyBus::default(),
            tracer: Box::new(NullTracer),
        }
    }

    /// Parse `rom` and insert it. PC is already at 0x0100 from the
    /// simulated boot state.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), CartridgeError> {
        let cartridge = cartridge::from_rom(rom)?;
        self.insert_cartridge(cartridge);
        Ok(())
    }

    pub fn insert_cartridge(&mut self, cartridge: Box<dyn Cartridge>) {
        self.bus.insert_cartridge(cartridge);
    }

    /// Return CPU and bus to their power-on state. The cartridge stays
    /// inserted.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.bus.reset();
    }

    /// Run one instruction. Panics on an undefined opcode; see
    /// [`GameBoy::try_step`].
    pub fn step(&mut self) -> u8 {
        self.cpu.step_traced(&mut self.bus, self.tracer.as_mut())
    }

    pub fn try_step(&mut self) -> Result<u8, CpuFault> {
        self.cpu.try_step_traced(&mut self.bus, self.tracer.as_mut())
    }

    /// Step until at least `budget` T-cycles have elapsed. Returns the
    /// cycles actually run, which may overshoot by one instruction.
    pub fn run_cycles(&mut self, budget: u64) -> Result<u64, CpuFault> {
        let mut elapsed = 0u64;
        while elapsed < budget {
            elapsed += self.try_step()? as u64;
        }
        Ok(elapsed)
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bus.peek(addr)
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.bus.write8(addr, value);
    }

    pub fn raise_interrupt(&mut self, interrupt: Interrupt) {
        self.cpu.raise_interrupt(&mut self.bus, interrupt);
    }

    /// Update a button. A new press requests the Joypad interrupt.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        if self.bus.set_button(button, pressed) {
            self.raise_interrupt(Interrupt::Joypad);
        }
    }

    /// Bytes sent over the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        self.bus.serial().output()
    }

    pub fn set_tracer(&mut self, tracer: Box<dyn Tracer>) {
        self.tracer = tracer;
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &GameBoyBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut GameBoyBus {
        &mut self.bus
    }
}
