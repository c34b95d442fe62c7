#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    /// (is d-pad, bit in the P1 low nibble)
    fn line(self) -> (bool, u8) {
        match self {
            Button::Right => (true, 0x01),
            Button::Left => (true, 0x02),
            Button::Up => (true, 0x04),
            Button::Down => (true, 0x08),
            Button::A => (false, 0x01),
            Button::B => (false, 0x02),
            Button::Select => (false, 0x04),
            Button::Start => (false, 0x08),
        }
    }
}

/// P1 register state.
///
/// `dpad`/`buttons` use 1 for pressed; P1 itself reports pressed as 0.
#[derive(Clone, Debug)]
pub(super) struct Joypad {
    select: u8,
    buttons: u8,
    dpad: u8,
}

impl Default for Joypad {
    fn default() -> Self {
        Self {
            // No group selected.
            select: 0x30,
            buttons: 0,
            dpad: 0,
        }
    }
}

impl Joypad {
    pub(super) fn read(&self) -> u8 {
        let mut low = 0x0F;
        // Bit 4 low selects the d-pad, bit 5 low the buttons.
        if (self.select & 0x10) == 0 {
            low &= !self.dpad;
        }
        if (self.select & 0x20) == 0 {
            low &= !self.buttons;
        }
        0xC0 | self.select | (low & 0x0F)
    }

    pub(super) fn write(&mut self, value: u8) {
        self.select = value & 0x30;
    }

    /// Update one button. Returns true on a new press, which is when the
    /// hardware raises the Joypad interrupt.
    pub(super) fn set(&mut self, button: Button, pressed: bool) -> bool {
        let (dpad, mask) = button.line();
        let group = if dpad { &mut self.dpad } else { &mut self.buttons };
        let was_pressed = (*group & mask) != 0;
        if pressed {
            *group |= mask;
        } else {
            *group &= !mask;
        }
        pressed && !was_pressed
    }
}
