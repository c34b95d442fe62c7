use super::{header_title, rom_byte, Cartridge, ExternalRam};

/// MBC5: 9-bit ROM bank (up to 8 MiB) and 4-bit RAM bank.
///
/// Unlike MBC1, bank 0 may be mapped at 0x4000. The rumble motor bit on
/// rumble carts is treated as part of the RAM bank number.
pub struct Mbc5 {
    rom: Vec<u8>,
    ram: ExternalRam,
    rom_bank: u16,
    ram_bank: u8,
}

impl Mbc5 {
    pub fn new(rom: &[u8], ram_banks: usize) -> Self {
        Self {
            rom: rom.to_vec(),
            ram: ExternalRam::new(ram_banks),
            rom_bank: 1,
            ram_bank: 0,
        }
    }
}

impl Cartridge for Mbc5 {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3FFF => rom_byte(&self.rom, 0, addr),
            0x4000..=0x7FFF => rom_byte(&self.rom, self.rom_bank as usize, addr),
            0xA000..=0xBFFF => self.ram.read(self.ram_bank as usize, addr),
            _ => 0xFF,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram.write_enable(value),
            0x2000..=0x2FFF => self.rom_bank = (self.rom_bank & 0x100) | value as u16,
            0x3000..=0x3FFF => {
                self.rom_bank = (self.rom_bank & 0x0FF) | (((value & 0x01) as u16) << 8)
            }
            0x4000..=0x5FFF => self.ram_bank = value & 0x0F,
            0xA000..=0xBFFF => self.ram.write(self.ram_bank as usize, addr, value),
            _ => {}
        }
    }

    fn title(&self) -> String {
        header_title(&self.rom)
    }
}
