use crate::cpu::{Bus, Cpu};

/// RLC/RRC/RL/RR/SLA/SRA/SWAP/SRL r (CB 0x00–0x3F)
pub(in crate::cpu) fn rotate<const OP: u8, const R: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.read_reg8(bus, R);
    let result = cpu.alu_rotate(OP, value);
    cpu.write_reg8(bus, R, result);
    true
}

/// BIT n,r (CB 0x40–0x7F). Only reads its operand.
pub(in crate::cpu) fn bit<const BIT: u8, const R: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.read_reg8(bus, R);
    cpu.alu_bit(BIT, value);
    true
}

/// RES n,r (CB 0x80–0xBF). No flags.
pub(in crate::cpu) fn res<const BIT: u8, const R: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.read_reg8(bus, R) & !(1 << BIT);
    cpu.write_reg8(bus, R, value);
    true
}

/// SET n,r (CB 0xC0–0xFF). No flags.
pub(in crate::cpu) fn set<const BIT: u8, const R: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.read_reg8(bus, R) | (1 << BIT);
    cpu.write_reg8(bus, R, value);
    true
}
