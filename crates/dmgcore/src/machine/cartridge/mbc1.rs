use super::{header_title, rom_byte, Cartridge, ExternalRam};

/// MBC1: up to 2 MiB ROM and 32 KiB RAM.
///
/// The 2-bit upper register extends the ROM bank in mode 0. In mode 1 it
/// also selects the bank mapped at 0x0000 and the RAM bank. Multicart
/// wiring is not detected.
pub struct Mbc1 {
    rom: Vec<u8>,
    ram: ExternalRam,
    /// 5-bit ROM bank register; 0 is promoted to 1.
    bank_low: u8,
    /// 2-bit upper bank / RAM bank register.
    bank_high: u8,
    advanced_mode: bool,
}

impl Mbc1 {
    pub fn new(rom: &[u8], ram_banks: usize) -> Self {
        Self {
            rom: rom.to_vec(),
            ram: ExternalRam::new(ram_banks),
            bank_low: 1,
            bank_high: 0,
            advanced_mode: false,
        }
    }

    fn low_area_bank(&self) -> usize {
        if self.advanced_mode {
            (self.bank_high as usize) << 5
        } else {
            0
        }
    }

    fn high_area_bank(&self) -> usize {
        ((self.bank_high as usize) << 5) | self.bank_low as usize
    }

    fn ram_bank(&self) -> usize {
        if self.advanced_mode {
            self.bank_high as usize
        } else {
            0
        }
    }
}

impl Cartridge for Mbc1 {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3FFF => rom_byte(&self.rom, self.low_area_bank(), addr),
            0x4000..=0x7FFF => rom_byte(&self.rom, self.high_area_bank(), addr),
            0xA000..=0xBFFF => self.ram.read(self.ram_bank(), addr),
            _ => 0xFF,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram.write_enable(value),
            0x2000..=0x3FFF => self.bank_low = (value & 0x1F).max(1),
            0x4000..=0x5FFF => self.bank_high = value & 0x03,
            0x6000..=0x7FFF => self.advanced_mode = (value & 0x01) != 0,
            0xA000..=0xBFFF => {
                let bank = self.ram_bank();
                self.ram.write(bank, addr, value);
            }
            _ => {}
        }
    }

    fn title(&self) -> String {
        header_title(&self.rom)
    }
}
