use crate::cpu::{Bus, Cpu};

/// INC r (and INC (HL)). C is untouched.
pub(in crate::cpu) fn inc_r<const R: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.read_reg8(bus, R);
    let result = cpu.alu_inc8(value);
    cpu.write_reg8(bus, R, result);
    true
}

/// DEC r (and DEC (HL)). C is untouched.
pub(in crate::cpu) fn dec_r<const R: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.read_reg8(bus, R);
    let result = cpu.alu_dec8(value);
    cpu.write_reg8(bus, R, result);
    true
}

/// INC rp. No flags.
pub(in crate::cpu) fn inc_rp<const RP: u8>(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    let value = cpu.read_rp(RP).wrapping_add(1);
    cpu.write_rp(RP, value);
    true
}

/// DEC rp. No flags.
pub(in crate::cpu) fn dec_rp<const RP: u8>(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    let value = cpu.read_rp(RP).wrapping_sub(1);
    cpu.write_rp(RP, value);
    true
}
