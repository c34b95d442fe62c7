use crate::cpu::{Bus, Cpu};

/// Relative jump helper used by JR/JR cc.
///
/// The displacement is a signed 8-bit offset relative to the address
/// following the operand. The operand is always consumed.
fn jr_if(cpu: &mut Cpu, bus: &mut dyn Bus, cond: bool) -> bool {
    let offset = cpu.fetch8(bus) as i8;
    if cond {
        cpu.regs.pc = cpu.regs.pc.wrapping_add_signed(offset as i16);
    }
    cond
}

fn jp_if(cpu: &mut Cpu, bus: &mut dyn Bus, cond: bool) -> bool {
    let addr = cpu.fetch16(bus);
    if cond {
        cpu.regs.pc = addr;
    }
    cond
}

fn call_if(cpu: &mut Cpu, bus: &mut dyn Bus, cond: bool) -> bool {
    let addr = cpu.fetch16(bus);
    if cond {
        let ret = cpu.regs.pc;
        cpu.push_u16(bus, ret);
        cpu.regs.pc = addr;
    }
    cond
}

fn ret_if(cpu: &mut Cpu, bus: &mut dyn Bus, cond: bool) -> bool {
    if cond {
        cpu.regs.pc = cpu.pop_u16(bus);
    }
    cond
}

/// JR i8
pub(in crate::cpu) fn jr(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    jr_if(cpu, bus, true)
}

/// JR cc,i8
pub(in crate::cpu) fn jr_cc<const CC: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let cond = cpu.condition(CC);
    jr_if(cpu, bus, cond)
}

/// JP u16
pub(in crate::cpu) fn jp(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    jp_if(cpu, bus, true)
}

/// JP cc,u16
pub(in crate::cpu) fn jp_cc<const CC: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let cond = cpu.condition(CC);
    jp_if(cpu, bus, cond)
}

/// JP HL
pub(in crate::cpu) fn jp_hl(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    cpu.regs.pc = cpu.regs.hl();
    true
}

/// CALL u16
pub(in crate::cpu) fn call(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    call_if(cpu, bus, true)
}

/// CALL cc,u16
pub(in crate::cpu) fn call_cc<const CC: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let cond = cpu.condition(CC);
    call_if(cpu, bus, cond)
}

/// RET
pub(in crate::cpu) fn ret(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    ret_if(cpu, bus, true)
}

/// RET cc
pub(in crate::cpu) fn ret_cc<const CC: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let cond = cpu.condition(CC);
    ret_if(cpu, bus, cond)
}

/// RETI: return and set IME immediately (no EI-style delay).
pub(in crate::cpu) fn reti(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    cpu.regs.pc = cpu.pop_u16(bus);
    cpu.ime = true;
    cpu.ime_enable_pending = false;
    cpu.ime_enable_delay = false;
    true
}

/// RST n: call the fixed vector `VEC` (0x00, 0x08, ..., 0x38).
pub(in crate::cpu) fn rst<const VEC: u8>(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let ret = cpu.regs.pc;
    cpu.push_u16(bus, ret);
    cpu.regs.pc = VEC as u16;
    true
}
