//! Cartridge collaborators.
//!
//! The bus forwards every access in 0x0000–0x7FFF and 0xA000–0xBFFF to a
//! [`Cartridge`] unchanged; bank switching lives entirely behind the trait.

mod mbc1;
mod mbc5;
mod rom_only;

use std::fmt;

pub use mbc1::Mbc1;
pub use mbc5::Mbc5;
pub use rom_only::RomOnly;

pub const ROM_BANK_SIZE: usize = 0x4000;
pub const RAM_BANK_SIZE: usize = 0x2000;

/// First byte after the cartridge header.
const HEADER_END: usize = 0x0150;
const TITLE_START: usize = 0x0134;
const TITLE_END: usize = 0x0144;
const CARTRIDGE_TYPE: usize = 0x0147;
const RAM_SIZE: usize = 0x0149;

pub trait Cartridge {
    /// Read from ROM (0x0000–0x7FFF) or external RAM (0xA000–0xBFFF).
    fn read(&self, addr: u16) -> u8;

    /// Write to the same windows. ROM-area writes program the mapper.
    fn write(&mut self, addr: u16, value: u8);

    /// Game title from the header.
    fn title(&self) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartridgeError {
    /// The image ends before the header does.
    RomTooSmall { len: usize },
    /// Header byte 0x0147 names a mapper that is not supported.
    UnsupportedType { code: u8 },
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartridgeError::RomTooSmall { len } => write!(
                f,
                "ROM image is {len} bytes, shorter than the {HEADER_END}-byte header"
            ),
            CartridgeError::UnsupportedType { code } => {
                write!(f, "unsupported cartridge type {code:#04X}")
            }
        }
    }
}

impl std::error::Error for CartridgeError {}

/// Build the cartridge described by the header of `rom`.
pub fn from_rom(rom: &[u8]) -> Result<Box<dyn Cartridge>, CartridgeError> {
    if rom.len() < HEADER_END {
        return Err(CartridgeError::RomTooSmall { len: rom.len() });
    }

    let code = rom[CARTRIDGE_TYPE];
    let ram_banks = ram_bank_count(rom[RAM_SIZE]);
    let cartridge: Box<dyn Cartridge> = match code {
        0x00 | 0x08 | 0x09 => Box::new(RomOnly::new(rom, ram_banks)),
        0x01..=0x03 => Box::new(Mbc1::new(rom, ram_banks)),
        0x19..=0x1E => Box::new(Mbc5::new(rom, ram_banks)),
        _ => return Err(CartridgeError::UnsupportedType { code }),
    };

    log::info!(
        "cartridge \"{}\": type {:#04X}, {} ROM banks, {} RAM banks",
        cartridge.title(),
        code,
        rom_bank_count(rom),
        ram_banks
    );
    Ok(cartridge)
}

/// Printable title from 0x0134–0x0143, cut at the first NUL.
pub(crate) fn header_title(rom: &[u8]) -> String {
    rom.get(TITLE_START..TITLE_END)
        .unwrap_or_default()
        .iter()
        .take_while(|&&byte| byte != 0)
        .filter(|byte| byte.is_ascii_graphic() || **byte == b' ')
        .map(|&byte| byte as char)
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// RAM banks for header byte 0x0149. A 2 KiB chip is rounded up to one
/// 8 KiB bank.
fn ram_bank_count(code: u8) -> usize {
    match code {
        0x01 | 0x02 => 1,
        0x03 => 4,
        0x04 => 16,
        0x05 => 8,
        _ => 0,
    }
}

fn rom_bank_count(rom: &[u8]) -> usize {
    (rom.len() / ROM_BANK_SIZE).max(1)
}

/// Byte `addr & 0x3FFF` of ROM bank `bank`. Banks past the end of the
/// image wrap, as the unused bank lines on the chip do.
fn rom_byte(rom: &[u8], bank: usize, addr: u16) -> u8 {
    let bank = bank % rom_bank_count(rom);
    let index = bank * ROM_BANK_SIZE + (addr as usize & (ROM_BANK_SIZE - 1));
    rom.get(index).copied().unwrap_or(0xFF)
}

/// Banked external RAM shared by all cartridge kinds.
struct ExternalRam {
    data: Vec<u8>,
    enabled: bool,
}

impl ExternalRam {
    fn new(banks: usize) -> Self {
        Self {
            data: vec![0xFF; banks * RAM_BANK_SIZE],
            enabled: false,
        }
    }

    fn banks(&self) -> usize {
        self.data.len() / RAM_BANK_SIZE
    }

    /// The RAM-enable register: 0x0A in the low nibble enables access.
    fn write_enable(&mut self, value: u8) {
        self.enabled = (value & 0x0F) == 0x0A;
    }

    fn index(&self, bank: usize, addr: u16) -> Option<usize> {
        if !self.enabled || self.data.is_empty() {
            return None;
        }
        let bank = bank % self.banks();
        Some(bank * RAM_BANK_SIZE + (addr as usize & (RAM_BANK_SIZE - 1)))
    }

    fn read(&self, bank: usize, addr: u16) -> u8 {
        self.index(bank, addr)
            .and_then(|index| self.data.get(index).copied())
            .unwrap_or(0xFF)
    }

    fn write(&mut self, bank: usize, addr: u16, value: u8) {
        if let Some(slot) = self
            .index(bank, addr)
            .and_then(|index| self.data.get_mut(index))
        {
            *slot = value;
        }
    }
}
