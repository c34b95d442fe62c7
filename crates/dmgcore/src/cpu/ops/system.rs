use crate::cpu::{Bus, Cpu, DIV_ADDR};

pub(in crate::cpu) fn nop(_cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    true
}

/// HALT
///
/// With IME clear and an interrupt already pending (IE & IF != 0) the CPU
/// does not halt. Instead the next opcode fetch fails to increment PC, so
/// the byte after HALT runs twice. This is the documented hardware HALT
/// bug and is reproduced on purpose; do not "fix" it.
pub(in crate::cpu) fn halt(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    if !cpu.ime && !Cpu::pending_interrupts(bus).is_empty() {
        cpu.halt_bug = true;
    } else {
        cpu.halted = true;
    }
    true
}

/// STOP
///
/// Two bytes long; the padding byte is fetched and discarded. Low-power
/// mode is not modelled, but DIV is reset as on hardware.
pub(in crate::cpu) fn stop(cpu: &mut Cpu, bus: &mut dyn Bus) -> bool {
    let _padding = cpu.fetch8(bus);
    bus.write8(DIV_ADDR, 0);
    true
}

pub(in crate::cpu) fn di(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    cpu.ime = false;
    cpu.ime_enable_pending = false;
    cpu.ime_enable_delay = false;
    true
}

/// EI: IME becomes 1 after the *next* instruction completes.
pub(in crate::cpu) fn ei(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    if !cpu.ime {
        cpu.ime_enable_pending = true;
    }
    true
}

/// Slot body for 0xCB. The step loop intercepts the prefix before
/// dispatch, so this only runs if a caller executes the entry directly.
pub(in crate::cpu) fn prefix_cb(_cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    true
}

/// Body of the eleven undefined base opcodes. Never reached through the
/// step loop, which faults on `!is_defined()` before executing.
pub(in crate::cpu) fn unused(cpu: &mut Cpu, _bus: &mut dyn Bus) -> bool {
    cpu.locked = true;
    true
}
