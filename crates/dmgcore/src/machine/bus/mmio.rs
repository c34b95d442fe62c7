use crate::interrupt::{InterruptFlags, IE_ADDR, IF_ADDR};
use crate::machine::{P1_ADDR, SB_ADDR, SC_ADDR};

use super::GameBoyBus;

impl GameBoyBus {
    pub(super) fn read8_mmio(&self, addr: u16) -> u8 {
        match addr {
            // Cartridge ROM and external RAM; open bus without a cartridge.
            0x0000..=0x7FFF | 0xA000..=0xBFFF => self
                .cartridge
                .as_ref()
                .map_or(0xFF, |cartridge| cartridge.read(addr)),
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize],
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize],
            // Echo RAM mirrors 0xC000–0xDDFF.
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize],
            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize],
            // Not usable.
            0xFEA0..=0xFEFF => 0xFF,

            P1_ADDR => self.joypad.read(),
            SB_ADDR => self.serial.read_sb(),
            SC_ADDR => self.serial.read_sc(),
            0xFF04..=0xFF07 => self.timer.read_register(addr),
            // IF's upper 3 bits always read as 1.
            IF_ADDR => self.if_reg.bits() | 0b1110_0000,
            0xFF03 | 0xFF08..=0xFF0E | 0xFF10..=0xFF4B => self.io[(addr - 0xFF00) as usize],
            0xFF4C..=0xFF7F => 0xFF,

            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize],
            IE_ADDR => self.ie_reg,
        }
    }

    pub(super) fn write8_mmio(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF | 0xA000..=0xBFFF => {
                if let Some(cartridge) = self.cartridge.as_mut() {
                    cartridge.write(addr, value);
                }
            }
            0x8000..=0x9FFF => self.vram[(addr - 0x8000) as usize] = value,
            0xC000..=0xDFFF => self.wram[(addr - 0xC000) as usize] = value,
            0xE000..=0xFDFF => self.wram[(addr - 0xE000) as usize] = value,
            0xFE00..=0xFE9F => self.oam[(addr - 0xFE00) as usize] = value,
            0xFEA0..=0xFEFF => {}

            P1_ADDR => self.joypad.write(value),
            SB_ADDR => self.serial.write_sb(value),
            SC_ADDR => {
                if self.serial.write_sc(value) {
                    self.if_reg.insert(InterruptFlags::SERIAL);
                }
            }
            0xFF04..=0xFF07 => self.timer.write_register(addr, value),
            IF_ADDR => self.if_reg = InterruptFlags::from_bits_truncate(value),
            0xFF03 | 0xFF08..=0xFF0E | 0xFF10..=0xFF4B => {
                self.io[(addr - 0xFF00) as usize] = value
            }
            0xFF4C..=0xFF7F => {}

            0xFF80..=0xFFFE => self.hram[(addr - 0xFF80) as usize] = value,
            IE_ADDR => self.ie_reg = value,
        }
    }
}
