pub mod cpu;
pub mod interrupt;
pub mod machine;

pub use cpu::{Bus, Cpu, CpuFault, Flag, Instruction, Registers};
pub use interrupt::{Interrupt, InterruptFlags};
pub use machine::{Button, Cartridge, CartridgeError, GameBoy, GameBoyBus};

/// Master clock of the DMG in T-cycles per second.
pub const CLOCK_HZ: u32 = 4_194_304;
