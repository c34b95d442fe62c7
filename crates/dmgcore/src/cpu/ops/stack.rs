use crate::cpu::{Bus, Cpu};

/// PUSH rp2
pub(in crate::cpu) fn push<const RP2: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.read_rp2(RP2);
    cpu.push_u16(bus, value);
    true
}

/// POP rp2. POP AF drops the low nibble of F.
pub(in crate::cpu) fn pop<const RP2: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.pop_u16(bus);
    cpu.write_rp2(RP2, value);
    true
}
