use crate::cpu::{Bus, Cpu};

/// LD rp,u16
pub(in crate::cpu) fn ld_rp_u16<const RP: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.fetch16(bus);
    cpu.write_rp(RP, value);
    true
}

/// Address for the indirect A loads: 0=(BC) 1=(DE) 2=(HL+) 3=(HL-).
/// The HL forms post-increment/decrement HL.
fn indirect_addr<const MODE: u8>(cpu: &mut Cpu) -> u16 {
    match MODE {
        0 => cpu.regs.bc(),
        1 => cpu.regs.de(),
        2 => {
            let hl = cpu.regs.hl();
            cpu.regs.set_hl(hl.wrapping_add(1));
            hl
        }
        _ => {
            let hl = cpu.regs.hl();
            cpu.regs.set_hl(hl.wrapping_sub(1));
            hl
        }
    }
}

/// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A
pub(in crate::cpu) fn ld_ind_a<const MODE: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let addr = indirect_addr::<MODE>(cpu);
    bus.write8(addr, cpu.regs.a());
    true
}

/// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-)
pub(in crate::cpu) fn ld_a_ind<const MODE: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let addr = indirect_addr::<MODE>(cpu);
    let value = bus.read8(addr);
    cpu.regs.set_a(value);
    true
}

/// LD r,u8 (and LD (HL),u8)
pub(in crate::cpu) fn ld_r_u8<const R: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = cpu.fetch8(bus);
    cpu.write_reg8(bus, R, value);
    true
}

/// LD r,r' (0x40–0x7F except HALT)
pub(in crate::cpu) fn ld_r_r<const DST: u8, const SRC: u8>(
    cpu: &mut Cpu,
    bus: &mut dyn Bus,
) -> bool {
    let value = cpu.read_reg8(bus, SRC);
    cpu.write_reg8(bus, DST, value);
    true
}

/// LD (u16),SP: low byte first.
pub(in crate::cpu) fn ld_u16_sp(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let addr = cpu.fetch16(bus);
    let [lo, hi] = cpu.regs.sp.to_le_bytes();
    bus.write8(addr, lo);
    bus.write8(addr.wrapping_add(1), hi);
    true
}

/// LD (FF00+u8),A
pub(in crate::cpu) fn ldh_u8_a(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let offset = cpu.fetch8(bus);
    bus.write8(0xFF00 | offset as u16, cpu.regs.a());
    true
}

/// LD A,(FF00+u8)
pub(in crate::cpu) fn ldh_a_u8(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let offset = cpu.fetch8(bus);
    let value = bus.read8(0xFF00 | offset as u16);
    cpu.regs.set_a(value);
    true
}

/// LD (FF00+C),A
pub(in crate::cpu) fn ldh_c_a(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    bus.write8(0xFF00 | cpu.regs.c() as u16, cpu.regs.a());
    true
}

/// LD A,(FF00+C)
pub(in crate::cpu) fn ldh_a_c(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let value = bus.read8(0xFF00 | cpu.regs.c() as u16);
    cpu.regs.set_a(value);
    true
}

/// LD (u16),A
pub(in crate::cpu) fn ld_u16_a(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let addr = cpu.fetch16(bus);
    bus.write8(addr, cpu.regs.a());
    true
}

/// LD A,(u16)
pub(in crate::cpu) fn ld_a_u16(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let addr = cpu.fetch16(bus);
    let value = bus.read8(addr);
    cpu.regs.set_a(value);
    true
}

/// LD HL,SP+i8: flags as for ADD SP,i8.
pub(in crate::cpu) fn ld_hl_sp_i8(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let imm = cpu.fetch8(bus);
    let result = cpu.alu_add16_signed(cpu.regs.sp, imm);
    cpu.regs.set_hl(result);
    true
}

/// LD SP,HL
pub(in crate::cpu) fn ld_sp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    cpu.regs.sp = cpu.regs.hl();
    true
}
