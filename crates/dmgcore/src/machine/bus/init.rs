use crate::interrupt::InterruptFlags;

use super::GameBoyBus;

/// I/O register values the DMG boot ROM leaves behind, for registers the
/// bus only stores (sound and LCD).
const DMG_IO_DEFAULTS: &[(u16, u8)] = &[
    (0xFF10, 0x80),
    (0xFF11, 0xBF),
    (0xFF12, 0xF3),
    (0xFF13, 0xFF),
    (0xFF14, 0xBF),
    (0xFF16, 0x3F),
    (0xFF18, 0xFF),
    (0xFF19, 0xBF),
    (0xFF1A, 0x7F),
    (0xFF1B, 0xFF),
    (0xFF1C, 0x9F),
    (0xFF1D, 0xFF),
    (0xFF1E, 0xBF),
    (0xFF20, 0xFF),
    (0xFF23, 0xBF),
    (0xFF24, 0x77),
    (0xFF25, 0xF3),
    (0xFF26, 0xF1),
    // LCDC, STAT
    (0xFF40, 0x91),
    (0xFF41, 0x85),
    // DMA, BGP
    (0xFF46, 0xFF),
    (0xFF47, 0xFC),
];

impl GameBoyBus {
    /// Approximate the post-boot I/O state seen at PC=0x0100.
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        for &(addr, value) in DMG_IO_DEFAULTS {
            self.io[(addr - 0xFF00) as usize] = value;
        }

        self.timer.init_dmg();
        self.serial.init_dmg();

        // The boot ROM exits with a VBlank request latched.
        self.if_reg = InterruptFlags::VBLANK;
        self.ie_reg = 0x00;
    }
}
