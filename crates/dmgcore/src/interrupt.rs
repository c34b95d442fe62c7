//! Interrupt sources and the IF/IE bit layout.
//!
//! IF (0xFF0F) and IE (0xFFFF) are ordinary memory-mapped bytes; nothing in
//! here owns state. The CPU reads both through the bus at every instruction
//! boundary and dispatches at most one interrupt per boundary.

use bitflags::bitflags;

/// Address of the Interrupt Flag register.
pub const IF_ADDR: u16 = 0xFF0F;
/// Address of the Interrupt Enable register.
pub const IE_ADDR: u16 = 0xFFFF;

/// Extra T-cycles consumed by an interrupt dispatch.
pub const DISPATCH_CYCLES: u8 = 20;

bitflags! {
    /// The five interrupt request lines as laid out in IF and IE.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0x01;
        const LCD_STAT = 0x02;
        const TIMER = 0x04;
        const SERIAL = 0x08;
        const JOYPAD = 0x10;
    }
}

impl InterruptFlags {
    /// Highest-priority source present in `self`, if any.
    ///
    /// Priority follows bit order: VBlank wins over LCD-Stat, which wins
    /// over Timer, then Serial, then Joypad.
    pub fn highest_priority(self) -> Option<Interrupt> {
        Interrupt::ALL
            .into_iter()
            .find(|interrupt| self.contains(interrupt.flag()))
    }
}

/// A single interrupt source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    /// All sources in dispatch priority order.
    pub const ALL: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub fn flag(self) -> InterruptFlags {
        match self {
            Interrupt::VBlank => InterruptFlags::VBLANK,
            Interrupt::LcdStat => InterruptFlags::LCD_STAT,
            Interrupt::Timer => InterruptFlags::TIMER,
            Interrupt::Serial => InterruptFlags::SERIAL,
            Interrupt::Joypad => InterruptFlags::JOYPAD,
        }
    }

    /// Fixed handler address the CPU jumps to when dispatching.
    #[inline]
    pub fn vector(self) -> u16 {
        match self {
            Interrupt::VBlank => 0x0040,
            Interrupt::LcdStat => 0x0048,
            Interrupt::Timer => 0x0050,
            Interrupt::Serial => 0x0058,
            Interrupt::Joypad => 0x0060,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_follows_bit_order() {
        let pending = InterruptFlags::TIMER | InterruptFlags::VBLANK;
        assert_eq!(pending.highest_priority(), Some(Interrupt::VBlank));

        let pending = InterruptFlags::JOYPAD | InterruptFlags::SERIAL;
        assert_eq!(pending.highest_priority(), Some(Interrupt::Serial));

        assert_eq!(InterruptFlags::empty().highest_priority(), None);
    }

    #[test]
    fn vectors_are_eight_bytes_apart() {
        for (index, interrupt) in Interrupt::ALL.into_iter().enumerate() {
            assert_eq!(interrupt.vector(), 0x0040 + 8 * index as u16);
            assert_eq!(interrupt.flag().bits(), 1 << index);
        }
    }

    #[test]
    fn upper_bits_are_not_interrupt_sources() {
        let flags = InterruptFlags::from_bits_truncate(0xE4);
        assert_eq!(flags, InterruptFlags::TIMER);
    }
}
