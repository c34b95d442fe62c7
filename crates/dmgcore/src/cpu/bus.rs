/// Divider register. STOP resets it with a bus write, like any other
/// DIV write.
pub const DIV_ADDR: u16 = 0xFF04;

/// Abstraction over the Game Boy bus (memory and IO).
///
/// The instruction engine only ever talks to memory through this trait, so
/// it stays object safe: opcode bodies receive it as `&mut dyn Bus`.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Advance bus-side peripherals by a given number of CPU T-cycles.
    ///
    /// The CPU calls this once per executed instruction (or halted idle
    /// step) after the instruction has finished all of its memory
    /// accesses, and once more with the dispatch cost when an interrupt is
    /// taken. Default implementation does nothing; system buses override
    /// it to drive the timer and serial port.
    fn tick(&mut self, _cycles: u8) {}
}
