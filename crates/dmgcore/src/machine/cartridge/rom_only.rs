use super::{header_title, rom_byte, Cartridge, ExternalRam};

/// 32 KiB ROM with no mapper, optionally with up to 8 KiB of RAM
/// (types 0x08/0x09). That RAM has no enable latch.
pub struct RomOnly {
    rom: Vec<u8>,
    ram: ExternalRam,
}

impl RomOnly {
    pub fn new(rom: &[u8], ram_banks: usize) -> Self {
        let mut ram = ExternalRam::new(ram_banks.min(1));
        ram.enabled = true;
        Self {
            rom: rom.to_vec(),
            ram,
        }
    }
}

impl Cartridge for RomOnly {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x3FFF => rom_byte(&self.rom, 0, addr),
            0x4000..=0x7FFF => rom_byte(&self.rom, 1, addr),
            0xA000..=0xBFFF => self.ram.read(0, addr),
            _ => 0xFF,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if (0xA000..=0xBFFF).contains(&addr) {
            self.ram.write(0, addr, value);
        }
    }

    fn title(&self) -> String {
        header_title(&self.rom)
    }
}
