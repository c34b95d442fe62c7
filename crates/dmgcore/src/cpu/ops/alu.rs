use crate::cpu::{Bus, Cpu, Flag};

/// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r (0x80–0xBF)
pub(in crate::cpu) fn alu_r<const OP: u8, const R: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.read_reg8(bus, R);
    cpu.alu_op(OP, value);
    true
}

/// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,u8
pub(in crate::cpu) fn alu_u8<const OP: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.fetch8(bus);
    cpu.alu_op(OP, value);
    true
}

/// ADD HL,rp
pub(in crate::cpu) fn add_hl_rp<const RP: u8>(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    let value = cpu.read_rp(RP);
    cpu.alu_add16_hl(value);
    true
}

/// ADD SP,i8
pub(in crate::cpu) fn add_sp_i8(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let imm = cpu.fetch8(bus);
    cpu.regs.sp = cpu.alu_add16_signed(cpu.regs.sp, imm);
    true
}

pub(in crate::cpu) fn daa(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    cpu.alu_daa();
    true
}

/// CPL: invert A, set N and H, leave Z and C.
pub(in crate::cpu) fn cpl(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    cpu.regs.set_a(!cpu.regs.a());
    cpu.set_flag(Flag::N, true);
    cpu.set_flag(Flag::H, true);
    true
}

/// SCF: set C, clear N and H, leave Z.
pub(in crate::cpu) fn scf(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    cpu.set_flag(Flag::C, true);
    cpu.set_flag(Flag::N, false);
    cpu.set_flag(Flag::H, false);
    true
}

/// CCF: complement C, clear N and H, leave Z.
pub(in crate::cpu) fn ccf(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    let carry = cpu.get_flag(Flag::C);
    cpu.set_flag(Flag::C, !carry);
    cpu.set_flag(Flag::N, false);
    cpu.set_flag(Flag::H, false);
    true
}

/// RLCA/RRCA/RLA/RRA: the CB rotate `OP` (0..=3) applied to A, except Z
/// is always cleared.
pub(in crate::cpu) fn rotate_a<const OP: u8>(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    let result = cpu.alu_rotate(OP, cpu.regs.a());
    cpu.regs.set_a(result);
    cpu.set_flag(Flag::Z, false);
    true
}
