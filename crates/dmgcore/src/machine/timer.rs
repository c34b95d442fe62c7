//! Divider and programmable timer (DIV/TIMA/TMA/TAC).
//!
//! Time is fed in whole instructions through [`Timer::update`]. DIV is the
//! upper byte of a free-running 16-bit counter. TIMA uses an accumulator:
//! cycles pile up while the timer is enabled and every full period of the
//! selected rate increments TIMA once.

mod io;

use crate::interrupt::InterruptFlags;
use crate::CLOCK_HZ;

pub use crate::cpu::DIV_ADDR;
pub const TIMA_ADDR: u16 = 0xFF05;
pub const TMA_ADDR: u16 = 0xFF06;
pub const TAC_ADDR: u16 = 0xFF07;

/// T-cycles per TIMA increment, indexed by TAC bits 1:0.
const PERIODS: [u32; 4] = [1024, 16, 64, 256];

#[derive(Clone, Debug)]
pub struct Timer {
    /// Free-running counter; DIV reads its upper byte.
    divider: u16,
    /// Cycles accumulated toward the next TIMA increment.
    counter: u32,
    /// Current TIMA period in T-cycles.
    period: u32,
    tima: u8,
    tma: u8,
    /// TAC raw value (lower 3 bits meaningful).
    tac: u8,
    enabled: bool,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    pub fn new() -> Self {
        Self {
            divider: 0,
            counter: 0,
            period: PERIODS[0],
            tima: 0,
            tma: 0,
            tac: 0,
            enabled: false,
        }
    }

    /// DMG state at PC=0x0100: DIV reads 0xAB, timer stopped.
    pub fn init_dmg(&mut self) {
        *self = Self::new();
        self.divider = 0xABCC;
    }

    /// Advance by `cycles` T-cycles, raising the Timer interrupt in
    /// `if_reg` for every TIMA overflow.
    pub fn update(&mut self, cycles: u8, if_reg: &mut InterruptFlags) {
        self.divider = self.divider.wrapping_add(cycles as u16);
        if !self.enabled {
            return;
        }

        self.counter += cycles as u32;
        while self.counter >= self.period {
            self.counter -= self.period;
            self.increment_tima(if_reg);
        }
    }

    fn increment_tima(&mut self, if_reg: &mut InterruptFlags) {
        let (next, overflow) = self.tima.overflowing_add(1);
        if overflow {
            self.tima = self.tma;
            if_reg.insert(InterruptFlags::TIMER);
        } else {
            self.tima = next;
        }
    }

    /// Zero the divider. Any write to DIV lands here.
    pub fn reset_div(&mut self) {
        self.divider = 0;
        self.counter = 0;
    }

    /// Select the TIMA rate from TAC bits 1:0; takes effect immediately.
    ///
    /// Cycles already accumulated toward the old period are folded into the
    /// new one, so a faster rate never releases a burst of increments.
    pub fn set_speed(&mut self, rate: u8) {
        self.period = PERIODS[(rate & 0x03) as usize];
        self.counter %= self.period;
    }

    /// TIMA increments per second at the current rate.
    pub fn frequency(&self) -> u32 {
        CLOCK_HZ / self.period
    }

    #[inline]
    pub fn div(&self) -> u8 {
        (self.divider >> 8) as u8
    }

    #[inline]
    pub fn tima(&self) -> u8 {
        self.tima
    }

    #[inline]
    pub fn tma(&self) -> u8 {
        self.tma
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enabled
    }
}
