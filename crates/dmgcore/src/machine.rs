//! Everything around the CPU: memory map, timer, serial, joypad,
//! cartridges and the [`GameBoy`] facade that steps them together.

mod bus;
pub mod cartridge;
mod gameboy;
mod joypad;
mod serial;
mod timer;

pub use bus::GameBoyBus;
pub use cartridge::{Cartridge, CartridgeError};
pub use gameboy::GameBoy;
pub use joypad::Button;
pub use serial::Serial;
pub use timer::{Timer, DIV_ADDR, TAC_ADDR, TIMA_ADDR, TMA_ADDR};

/// P1 / JOYP.
pub const P1_ADDR: u16 = 0xFF00;
/// Serial transfer data.
pub const SB_ADDR: u16 = 0xFF01;
/// Serial transfer control.
pub const SC_ADDR: u16 = 0xFF02;
