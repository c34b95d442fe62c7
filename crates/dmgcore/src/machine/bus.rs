use crate::cpu::Bus;
use crate::interrupt::InterruptFlags;

use super::cartridge::Cartridge;
use super::joypad::{Button, Joypad};
use super::serial::Serial;
use super::timer::Timer;

mod init;
mod mmio;

const VRAM_SIZE: usize = 0x2000;
const WRAM_SIZE: usize = 0x2000;
const OAM_SIZE: usize = 0xA0;
const HRAM_SIZE: usize = 0x7F;
/// Backing store for I/O registers without a dedicated model.
const IO_SIZE: usize = 0x80;

/// DMG memory map.
///
/// Owns every byte the CPU can address except the cartridge, which is
/// plugged in as a [`Cartridge`]. IF and IE are ordinary registers here;
/// the CPU reaches them only through [`Bus`].
pub struct GameBoyBus {
    cartridge: Option<Box<dyn Cartridge>>,
    vram: [u8; VRAM_SIZE],
    wram: [u8; WRAM_SIZE],
    oam: [u8; OAM_SIZE],
    hram: [u8; HRAM_SIZE],
    io: [u8; IO_SIZE],
    timer: Timer,
    serial: Serial,
    joypad: Joypad,
    if_reg: InterruptFlags,
    ie_reg: u8,
}

impl Default for GameBoyBus {
    fn default() -> Self {
        let mut bus = Self {
            cartridge: None,
            vram: [0; VRAM_SIZE],
            wram: [0; WRAM_SIZE],
            oam: [0; OAM_SIZE],
            hram: [0; HRAM_SIZE],
            io: [0; IO_SIZE],
            timer: Timer::new(),
            serial: Serial::default(),
            joypad: Joypad::default(),
            if_reg: InterruptFlags::empty(),
            ie_reg: 0,
        };
        bus.apply_dmg_initial_io_state();
        bus
    }
}

impl Bus for GameBoyBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read8_mmio(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write8_mmio(addr, value)
    }

    fn tick(&mut self, cycles: u8) {
        self.timer.update(cycles, &mut self.if_reg);
    }
}

impl GameBoyBus {
    /// Read without going through the CPU-facing trait.
    pub fn peek(&self, addr: u16) -> u8 {
        self.read8_mmio(addr)
    }

    pub fn insert_cartridge(&mut self, cartridge: Box<dyn Cartridge>) {
        self.cartridge = Some(cartridge);
    }

    pub fn eject_cartridge(&mut self) -> Option<Box<dyn Cartridge>> {
        self.cartridge.take()
    }

    pub fn cartridge_title(&self) -> Option<String> {
        self.cartridge.as_ref().map(|cartridge| cartridge.title())
    }

    /// Power-cycle everything on the bus except the inserted cartridge.
    pub fn reset(&mut self) {
        let cartridge = self.cartridge.take();
        *self = Self::default();
        self.cartridge = cartridge;
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn serial(&self) -> &Serial {
        &self.serial
    }

    pub fn interrupt_flags(&self) -> InterruptFlags {
        self.if_reg
    }

    /// Returns true when the button went from released to pressed.
    pub(super) fn set_button(&mut self, button: Button, pressed: bool) -> bool {
        self.joypad.set(button, pressed)
    }
}
