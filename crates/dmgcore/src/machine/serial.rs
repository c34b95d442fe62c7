/// SB/SC serial port, reduced to what test ROMs need.
///
/// There is never a link partner. Starting a transfer on the internal
/// clock (SC bits 7 and 0 set) completes it at once: SB is appended to
/// `output`, the start bit drops and the caller raises the Serial
/// interrupt.
#[derive(Clone, Debug, Default)]
pub struct Serial {
    sb: u8,
    sc: u8,
    output: Vec<u8>,
}

impl Serial {
    pub(super) fn init_dmg(&mut self) {
        self.sb = 0x00;
        self.sc = 0x00;
        self.output.clear();
    }

    pub(super) fn read_sb(&self) -> u8 {
        self.sb
    }

    pub(super) fn read_sc(&self) -> u8 {
        // Bits 6-1 are unused on DMG.
        self.sc | 0b0111_1110
    }

    pub(super) fn write_sb(&mut self, value: u8) {
        self.sb = value;
    }

    /// Returns true when the write completed a transfer.
    pub(super) fn write_sc(&mut self, value: u8) -> bool {
        self.sc = value & 0x81;
        if (self.sc & 0x81) != 0x81 {
            return false;
        }
        self.output.push(self.sb);
        self.sc &= !0x80;
        true
    }

    /// Every byte sent since power-on or the last reset.
    pub fn output(&self) -> &[u8] {
        &self.output
    }
}
