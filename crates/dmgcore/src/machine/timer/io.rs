use super::{Timer, DIV_ADDR, TIMA_ADDR, TMA_ADDR};

impl Timer {
    pub(in crate::machine) fn read_register(&self, addr: u16) -> u8 {
        match addr {
            DIV_ADDR => self.div(),
            TIMA_ADDR => self.tima,
            TMA_ADDR => self.tma,
            // Unused TAC bits read back as 1.
            _ => self.tac | 0b1111_1000,
        }
    }

    pub(in crate::machine) fn write_register(&mut self, addr: u16, value: u8) {
        match addr {
            // The written value is ignored; DIV always restarts from 0.
            DIV_ADDR => self.reset_div(),
            TIMA_ADDR => self.tima = value,
            TMA_ADDR => self.tma = value,
            _ => {
                self.tac = value & 0x07;
                self.enabled = (self.tac & 0x04) != 0;
                self.set_speed(self.tac);
            }
        }
    }
}
