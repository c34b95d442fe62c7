use super::*;

struct TestBus {
    memory: [u8; 0x10000],
    ticked: u32,
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
            ticked: 0,
        }
    }
}

impl TestBus {
    fn load(&mut self, addr: u16, bytes: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + bytes.len()].copy_from_slice(bytes);
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }

    fn tick(&mut self, cycles: u8) {
        self.ticked += cycles as u32;
    }
}

const IF: usize = 0xFF0F;
const IE: usize = 0xFFFF;

fn cpu_at(pc: u16) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.regs.pc = pc;
    cpu
}

#[derive(Default)]
struct RecordingTracer {
    records: Vec<TraceRecord>,
}

impl Tracer for RecordingTracer {
    fn trace(&mut self, record: &TraceRecord) {
        self.records.push(*record);
    }
}

#[test]
fn power_on_registers_match_dmg_boot_handoff() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert!(!cpu.ime);
    assert!(!cpu.halted);
}

#[test]
fn register_pairs_alias_their_halves() {
    let mut regs = Registers::default();
    for v in (0..=0xFFFFu32).step_by(7).map(|v| v as u16) {
        regs.set_bc(v);
        assert_eq!(regs.b(), (v >> 8) as u8);
        assert_eq!(regs.c(), (v & 0xFF) as u8);

        regs.set_d((v >> 8) as u8);
        regs.set_e(v as u8);
        assert_eq!(regs.de(), v);

        regs.set_hl(v);
        assert_eq!(regs.h(), (v >> 8) as u8);
        assert_eq!(regs.l(), v as u8);
    }
}

#[test]
fn f_register_drops_low_nibble() {
    let mut regs = Registers::default();
    regs.set_af(0x12FF);
    assert_eq!(regs.af(), 0x12F0);
    regs.set_f(0x0F);
    assert_eq!(regs.f(), 0x00);
}

#[test]
fn nop_advances_pc_and_nothing_else() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.memory[0x0000] = 0x00;
    let before = cpu.regs;

    let cycles = cpu.step(&mut bus);

    assert_eq!(cycles, 4);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(cpu.regs.af(), before.af());
    assert_eq!(cpu.regs.bc(), before.bc());
    assert_eq!(cpu.regs.de(), before.de());
    assert_eq!(cpu.regs.hl(), before.hl());
    assert_eq!(cpu.regs.sp, before.sp);
    assert_eq!(bus.ticked, 4);
}

#[test]
fn ld_16bit_and_basic_ld_indirect_work() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // LD BC,0x1234 ; LD (BC),A ; LD A,(BC)
    bus.load(0x0000, &[0x01, 0x34, 0x12, 0x02, 0x0A]);
    cpu.regs.set_a(0xAB);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.bc(), 0x1234);
    assert_eq!(cpu.regs.pc, 0x0003);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(bus.memory[0x1234], 0xAB);

    cpu.regs.set_a(0x00);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a(), 0xAB);
}

#[test]
fn ld_r_r_and_hl_inc_dec_forms_work() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // LD HL,0xC000 ; LD B,0x12 ; LD (HL),B ; LD A,(HL+) ; LD (HL-),A ; LD C,A
    bus.load(0x0000, &[0x21, 0x00, 0xC0, 0x06, 0x12, 0x70, 0x2A, 0x32, 0x4F]);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xC000);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.b(), 0x12);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(bus.memory[0xC000], 0x12);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a(), 0x12);
    assert_eq!(cpu.regs.hl(), 0xC001);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(bus.memory[0xC001], 0x12);
    assert_eq!(cpu.regs.hl(), 0xC000);

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.c(), 0x12);
}

#[test]
fn ld_hl_immediate_and_high_page_loads() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // LD (HL),0x5A ; LDH (0x80),A ; LD C,0x81 ; LD (C),A ; LD A,(0xC000)
    bus.load(
        0x0000,
        &[0x36, 0x5A, 0xE0, 0x80, 0x0E, 0x81, 0xE2, 0xFA, 0x00, 0xC0],
    );
    cpu.regs.set_hl(0xC000);
    cpu.regs.set_a(0x77);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x5A);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xFF80], 0x77);

    cpu.step(&mut bus);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(bus.memory[0xFF81], 0x77);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.a(), 0x5A);
}

#[test]
fn ld_u16_sp_stores_low_byte_first() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.load(0x0000, &[0x08, 0x00, 0xC1]);
    cpu.regs.sp = 0xBEEF;

    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(bus.memory[0xC100], 0xEF);
    assert_eq!(bus.memory[0xC101], 0xBE);
}

#[test]
fn inc_dec_8bit_update_flags_and_preserve_c() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // INC B ; DEC B ; DEC B
    bus.load(0x0000, &[0x04, 0x05, 0x05]);
    cpu.regs.set_b(0x0F);
    cpu.set_flag(Flag::C, true);

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.b(), 0x10);
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::N));
    assert!(!cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b(), 0x0F);
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::C));

    cpu.regs.set_b(0x01);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b(), 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn inc_dec_on_hl_memory() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // INC (HL) ; DEC (HL)
    bus.load(0x0000, &[0x34, 0x35]);
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0xFF;

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(bus.memory[0xC000], 0xFF);
    assert!(cpu.get_flag(Flag::N));
}

#[test]
fn inc_dec_16bit_and_add_hl_rr_behaviour() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // INC BC ; DEC DE ; ADD HL,BC
    bus.load(0x0000, &[0x03, 0x1B, 0x09]);
    cpu.regs.set_f(0x00);
    cpu.regs.set_bc(0xFFFF);
    cpu.regs.set_de(0x0000);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.bc(), 0x0000);
    assert_eq!(cpu.regs.f(), 0x00);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.de(), 0xFFFF);

    cpu.regs.set_hl(0x0FFF);
    cpu.regs.set_bc(0x0001);
    cpu.set_flag(Flag::Z, true);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.hl(), 0x1000);
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::Z));
}

#[test]
fn add_sp_i8_and_ld_hl_sp_i8_use_low_byte_carries() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // ADD SP,+8 ; LD HL,SP-1 ; LD SP,HL
    bus.load(0x0000, &[0xE8, 0x08, 0xF8, 0xFF, 0xF9]);
    cpu.regs.sp = 0xFFF8;

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert!(!cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.hl(), 0xFFFF);
    assert!(!cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.sp, 0xFFFF);
}

#[test]
fn add_sets_half_carry_and_carry() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // ADD A,0xC6
    bus.load(0x0000, &[0xC6, 0xC6]);
    cpu.regs.set_a(0x3A);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.a(), 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::N));
}

#[test]
fn adc_and_sbc_include_carry_in() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // ADC A,B ; SBC A,B
    bus.load(0x0000, &[0x88, 0x98]);
    cpu.regs.set_a(0x0E);
    cpu.regs.set_b(0x01);
    cpu.set_flag(Flag::C, true);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x10);
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));

    cpu.set_flag(Flag::C, true);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x0E);
    assert!(cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn cp_sets_flags_without_touching_a() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // CP 0x40 ; CP 0x3E
    bus.load(0x0000, &[0xFE, 0x40, 0xFE, 0x3E]);
    cpu.regs.set_a(0x3E);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x3E);
    assert!(!cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::N));
    assert!(!cpu.get_flag(Flag::H));
    assert!(cpu.get_flag(Flag::C));

    cpu.step(&mut bus);
    assert!(cpu.get_flag(Flag::Z));
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn logic_ops_set_documented_half_carry() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // AND B ; OR C ; XOR A
    bus.load(0x0000, &[0xA0, 0xB1, 0xAF]);
    cpu.regs.set_a(0xF0);
    cpu.regs.set_b(0x0F);
    cpu.regs.set_c(0x00);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x00);
    assert_eq!(cpu.regs.f(), 0xA0);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.f(), 0x80);

    cpu.regs.set_a(0x55);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x00);
    assert_eq!(cpu.regs.f(), 0x80);
}

#[test]
fn alu_block_never_sets_low_flag_bits() {
    let samples = [0x00, 0x01, 0x0F, 0x10, 0x7F, 0x80, 0xFF, 0x3A];
    for opcode in 0x80..=0xBFu8 {
        for &a in &samples {
            for &b in &samples {
                let mut cpu = cpu_at(0x0000);
                let mut bus = TestBus::default();
                bus.memory[0x0000] = opcode;
                bus.memory[0xC000] = b;
                cpu.regs.set_a(a);
                cpu.regs.set_bc(u16::from_le_bytes([b, b]));
                cpu.regs.set_de(u16::from_le_bytes([b, b]));
                cpu.regs.set_hl(0xC000);
                cpu.regs.set_f(if b & 1 == 0 { 0x00 } else { 0xF0 });

                cpu.step(&mut bus);
                assert_eq!(cpu.regs.af() & 0x000F, 0, "opcode {opcode:#04X}");
            }
        }
    }
}

#[test]
fn daa_corrects_bcd_addition() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // ADD A,B ; DAA
    bus.load(0x0000, &[0x80, 0x27]);
    cpu.regs.set_a(0x45);
    cpu.regs.set_b(0x38);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x7D);
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.a(), 0x83);
    assert!(!cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::Z));
}

#[test]
fn daa_corrects_bcd_subtraction_and_carry() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // SUB A,B ; DAA ; ADD A,C ; DAA
    bus.load(0x0000, &[0x90, 0x27, 0x81, 0x27]);
    cpu.regs.set_a(0x83);
    cpu.regs.set_b(0x38);
    cpu.regs.set_c(0x55);

    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x45);
    assert!(cpu.get_flag(Flag::N));

    // 45 + 55 = 100 in BCD
    cpu.step(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));
}

#[test]
fn cpl_scf_ccf_flags() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // CPL ; SCF ; CCF
    bus.load(0x0000, &[0x2F, 0x37, 0x3F]);
    cpu.regs.set_a(0x35);
    cpu.regs.set_f(0x80);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0xCA);
    assert_eq!(cpu.regs.f(), 0xE0);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.f(), 0x90);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.f(), 0x80);
}

#[test]
fn accumulator_rotates_never_set_zero() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // RLCA ; RLC A
    bus.load(0x0000, &[0x07, 0xCB, 0x07]);
    cpu.regs.set_a(0x00);
    cpu.regs.set_f(0x00);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x00);
    assert!(!cpu.get_flag(Flag::Z));

    assert_eq!(cpu.step(&mut bus), 8);
    assert!(cpu.get_flag(Flag::Z));
}

#[test]
fn rla_and_rra_rotate_through_carry() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // RLA ; RRA
    bus.load(0x0000, &[0x17, 0x1F]);
    cpu.regs.set_a(0x80);
    cpu.regs.set_f(0x00);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x00);
    assert!(cpu.get_flag(Flag::C));
    assert!(!cpu.get_flag(Flag::Z));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x80);
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn cb_rotates_shifts_and_swap() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // RL C ; SRA B ; SRL D ; SWAP A ; SLA E
    bus.load(
        0x0000,
        &[0xCB, 0x11, 0xCB, 0x28, 0xCB, 0x3A, 0xCB, 0x37, 0xCB, 0x23],
    );
    cpu.regs.set_c(0x80);
    cpu.regs.set_b(0x81);
    cpu.regs.set_d(0x01);
    cpu.regs.set_a(0xF1);
    cpu.regs.set_e(0x40);
    cpu.regs.set_f(0x00);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.c(), 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b(), 0xC0);
    assert!(cpu.get_flag(Flag::C));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.d(), 0x00);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::C));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x1F);
    assert_eq!(cpu.regs.f(), 0x00);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.e(), 0x80);
    assert!(!cpu.get_flag(Flag::C));
}

#[test]
fn cb_bit_res_set_and_hl_timings() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // BIT 5,H ; BIT 0,(HL) ; RES 0,(HL) ; SET 7,(HL) ; SET 3,B
    bus.load(
        0x0000,
        &[0xCB, 0x6C, 0xCB, 0x46, 0xCB, 0x86, 0xCB, 0xFE, 0xCB, 0xD8],
    );
    cpu.regs.set_hl(0xC001);
    cpu.regs.set_f(0x10);
    bus.memory[0xC001] = 0x01;

    assert_eq!(cpu.step(&mut bus), 8);
    assert!(cpu.get_flag(Flag::Z));
    assert!(cpu.get_flag(Flag::H));
    assert!(!cpu.get_flag(Flag::N));
    assert!(cpu.get_flag(Flag::C));

    assert_eq!(cpu.step(&mut bus), 12);
    assert!(!cpu.get_flag(Flag::Z));

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.memory[0xC001], 0x00);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(bus.memory[0xC001], 0x80);

    cpu.regs.set_b(0x00);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.b(), 0x08);
    assert_eq!(cpu.regs.pc, 0x000A);
}

#[test]
fn jp_nz_costs_differ_by_outcome() {
    let mut bus = TestBus::default();
    bus.load(0x0000, &[0xC2, 0x00, 0x20]);

    let mut cpu = cpu_at(0x0000);
    cpu.set_flag(Flag::Z, false);
    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x2000);

    let mut cpu = cpu_at(0x0000);
    cpu.set_flag(Flag::Z, true);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0003);
}

#[test]
fn jr_uses_signed_offset_from_next_instruction() {
    let mut cpu = cpu_at(0x0100);
    let mut bus = TestBus::default();

    // JR -2 loops on itself
    bus.load(0x0100, &[0x18, 0xFE]);
    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0100);

    // JR C,+5 not taken
    bus.load(0x0100, &[0x38, 0x05]);
    cpu.set_flag(Flag::C, false);
    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn jp_hl_jumps_without_reading_memory() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.memory[0x0000] = 0xE9;
    cpu.regs.set_hl(0x4321);

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x4321);
}

#[test]
fn call_and_ret_use_the_stack() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // CALL 0x1234 ; (at 0x1234) RET
    bus.load(0x0000, &[0xCD, 0x34, 0x12]);
    bus.memory[0x1234] = 0xC9;
    cpu.regs.sp = 0xFFFE;

    assert_eq!(cpu.step(&mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFD], 0x00);
    assert_eq!(bus.memory[0xFFFC], 0x03);

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn conditional_call_and_ret_cycle_costs() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // CALL C,0x0010 (not taken) ; CALL NC,0x0010 (taken) ; (0x0010) RET Z (not taken) ; RET NZ
    bus.load(0x0000, &[0xDC, 0x10, 0x00, 0xD4, 0x10, 0x00]);
    bus.load(0x0010, &[0xC8, 0xC0]);
    cpu.regs.sp = 0xDFFE;
    cpu.regs.set_f(0x00);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.pc, 0x0003);
    assert_eq!(cpu.regs.sp, 0xDFFE);

    assert_eq!(cpu.step(&mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x0010);

    assert_eq!(cpu.step(&mut bus), 8);
    assert_eq!(cpu.regs.pc, 0x0011);

    assert_eq!(cpu.step(&mut bus), 20);
    assert_eq!(cpu.regs.pc, 0x0006);
}

#[test]
fn rst_pushes_return_address() {
    let mut cpu = cpu_at(0x0200);
    let mut bus = TestBus::default();
    bus.memory[0x0200] = 0xEF; // RST 28h
    cpu.regs.sp = 0xD000;

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.memory[0xCFFF], 0x02);
    assert_eq!(bus.memory[0xCFFE], 0x01);
}

#[test]
fn push_bc_pop_de_copies_through_the_stack() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // PUSH BC ; POP DE
    bus.load(0x0000, &[0xC5, 0xD1]);
    cpu.regs.set_bc(0x1234);
    cpu.regs.sp = 0xFFFE;

    assert_eq!(cpu.step(&mut bus), 16);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFD], 0x12);
    assert_eq!(bus.memory[0xFFFC], 0x34);

    assert_eq!(cpu.step(&mut bus), 12);
    assert_eq!(cpu.regs.de(), 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn pop_af_masks_low_flag_bits() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.memory[0x0000] = 0xF1;
    bus.load(0xC000, &[0xFF, 0x12]);
    cpu.regs.sp = 0xC000;

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.af(), 0x12F0);
}

#[test]
fn stop_skips_padding_byte_and_resets_div() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.load(0x0000, &[0x10, 0x00, 0x00]);
    bus.memory[0xFF04] = 0x55;

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0002);
    assert_eq!(bus.memory[0xFF04], 0x00);
    assert!(!cpu.halted);
}

#[test]
fn pending_interrupt_waits_for_ime() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.memory[IF] = 0x01;
    bus.memory[IE] = 0x01;

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(bus.memory[IF], 0x01);
}

#[test]
fn interrupt_priority_prefers_vblank_and_clears_only_its_bit() {
    let mut cpu = cpu_at(0x1000);
    let mut bus = TestBus::default();
    bus.memory[IF] = 0b0000_0101;
    bus.memory[IE] = 0b0000_0101;
    cpu.ime = true;
    cpu.regs.sp = 0xFFFE;

    let cycles = cpu.step(&mut bus);

    assert_eq!(cycles, 4 + 20);
    assert_eq!(bus.ticked, 24);
    assert_eq!(cpu.regs.pc, 0x0040);
    assert_eq!(bus.memory[IF], 0b0000_0100);
    assert!(!cpu.ime);
    // Return address 0x1001 pushed high byte first.
    assert_eq!(bus.memory[0xFFFD], 0x10);
    assert_eq!(bus.memory[0xFFFC], 0x01);
}

#[test]
fn ei_takes_effect_after_the_next_instruction() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // EI ; NOP ; NOP
    bus.load(0x0000, &[0xFB, 0x00, 0x00]);
    bus.memory[IF] = 0x04;
    bus.memory[IE] = 0x04;
    cpu.regs.sp = 0xD000;

    assert_eq!(cpu.step(&mut bus), 4);
    assert!(!cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0001);

    assert_eq!(cpu.step(&mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert_eq!(bus.memory[0xCFFE], 0x02);
    assert_eq!(bus.memory[IF], 0x00);
}

#[test]
fn di_cancels_a_pending_ei() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // EI ; DI ; NOP ; NOP
    bus.load(0x0000, &[0xFB, 0xF3, 0x00, 0x00]);
    bus.memory[IF] = 0x01;
    bus.memory[IE] = 0x01;

    for _ in 0..4 {
        assert_eq!(cpu.step(&mut bus), 4);
    }
    assert!(!cpu.ime);
    assert_eq!(cpu.regs.pc, 0x0004);
}

#[test]
fn reti_enables_ime_immediately() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.memory[0x0000] = 0xD9;
    bus.load(0xC000, &[0x34, 0x12]);
    cpu.regs.sp = 0xC000;

    assert_eq!(cpu.step(&mut bus), 16);
    assert!(cpu.ime);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.sp, 0xC002);
}

#[test]
fn halt_idles_until_interrupt_then_dispatches() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.memory[0x0000] = 0x76;
    bus.memory[IE] = 0x04;
    cpu.ime = true;
    cpu.regs.sp = 0xD000;

    assert_eq!(cpu.step(&mut bus), 4);
    assert!(cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0001);

    assert_eq!(cpu.step(&mut bus), HALT_IDLE_CYCLES);
    assert_eq!(cpu.regs.pc, 0x0001);

    bus.memory[IF] = 0x04;
    assert_eq!(cpu.step(&mut bus), 24);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert_eq!(bus.memory[0xCFFE], 0x01);
}

#[test]
fn halt_with_ime_clear_wakes_without_dispatch() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.load(0x0000, &[0x76, 0x00]);
    bus.memory[IE] = 0x04;

    cpu.step(&mut bus);
    assert!(cpu.halted);

    bus.memory[IF] = 0x04;
    assert_eq!(cpu.step(&mut bus), 4);
    assert!(!cpu.halted);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert_eq!(bus.memory[IF], 0x04);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn halt_bug_fetches_next_byte_twice() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // HALT ; INC A ; NOP
    bus.load(0x0000, &[0x76, 0x3C, 0x00]);
    bus.memory[IF] = 0x04;
    bus.memory[IE] = 0x04;
    cpu.regs.set_a(0x00);

    cpu.step(&mut bus);
    assert!(!cpu.halted);
    assert!(cpu.halt_bug_pending());
    assert_eq!(cpu.regs.pc, 0x0001);

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x01);
    assert_eq!(cpu.regs.pc, 0x0001);
    assert!(!cpu.halt_bug_pending());

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a(), 0x02);
    assert_eq!(cpu.regs.pc, 0x0002);
}

#[test]
fn ei_then_halt_with_pending_interrupt_returns_to_halt() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();

    // EI ; HALT
    bus.load(0x0000, &[0xFB, 0x76]);
    bus.memory[IF] = 0x04;
    bus.memory[IE] = 0x04;
    cpu.regs.sp = 0xD000;

    cpu.step(&mut bus);
    assert_eq!(cpu.step(&mut bus), 24);
    assert_eq!(cpu.regs.pc, 0x0050);
    assert!(!cpu.halt_bug_pending());
    assert_eq!(bus.memory[0xCFFF], 0x00);
    assert_eq!(bus.memory[0xCFFE], 0x01);
}

#[test]
fn raise_interrupt_sets_if_and_wakes() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    cpu.halted = true;

    cpu.raise_interrupt(&mut bus, crate::Interrupt::Serial);

    assert_eq!(bus.memory[IF], 0x08);
    assert!(!cpu.halted);
}

#[test]
#[should_panic(expected = "undefined opcode 0xD3")]
fn undefined_opcode_is_fatal() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    bus.memory[0x0000] = 0xD3;
    cpu.step(&mut bus);
}

#[test]
fn try_step_reports_fault_then_stays_locked() {
    let mut cpu = cpu_at(0x0150);
    let mut bus = TestBus::default();
    bus.memory[0x0150] = 0xFD;

    match cpu.try_step(&mut bus) {
        Err(CpuFault::UndefinedOpcode { opcode, pc, .. }) => {
            assert_eq!(opcode, 0xFD);
            assert_eq!(pc, 0x0150);
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(cpu.is_locked());
    assert!(matches!(
        cpu.try_step(&mut bus),
        Err(CpuFault::Locked { .. })
    ));

    cpu.reset();
    assert!(!cpu.is_locked());
}

#[test]
fn base_table_has_exactly_the_eleven_holes() {
    let unused: Vec<usize> = BASE_TABLE
        .iter()
        .enumerate()
        .filter(|(_, instruction)| !instruction.is_defined())
        .map(|(opcode, _)| opcode)
        .collect();
    assert_eq!(
        unused,
        vec![0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD]
    );
    assert!(CB_TABLE.iter().all(Instruction::is_defined));
}

fn placeholder_bytes(mnemonic: &str) -> u8 {
    if mnemonic.contains("u16") {
        2
    } else if mnemonic.contains("u8") || mnemonic.contains("i8") {
        1
    } else {
        0
    }
}

#[test]
fn table_lengths_match_operand_placeholders() {
    for (opcode, instruction) in BASE_TABLE.iter().enumerate() {
        assert!(!instruction.is_prefixed());
        if !instruction.is_defined() || opcode == 0x10 {
            continue;
        }
        assert_eq!(
            instruction.operand_len(),
            placeholder_bytes(instruction.mnemonic),
            "{:#04X} {}",
            opcode,
            instruction.mnemonic
        );
    }
    assert_eq!(BASE_TABLE[0x10].length, 2);
    assert_eq!(BASE_TABLE[0x10].operand_len(), 1);
    for instruction in CB_TABLE.iter() {
        assert!(instruction.is_prefixed());
        assert_eq!(instruction.length, 2);
        assert_eq!(instruction.operand_len(), 0);
    }
}

#[test]
fn only_conditional_control_flow_has_two_costs() {
    let conditional: Vec<&str> = BASE_TABLE
        .iter()
        .filter(|instruction| instruction.is_conditional())
        .map(|instruction| instruction.mnemonic)
        .collect();
    assert_eq!(conditional.len(), 16);
    assert!(conditional
        .iter()
        .all(|m| ["JR ", "JP ", "CALL ", "RET "]
            .iter()
            .any(|prefix| m.starts_with(prefix))));
    assert!(CB_TABLE.iter().all(|instruction| !instruction.is_conditional()));
}

#[test]
fn disassembles_operands_and_cb_forms() {
    let mut bus = TestBus::default();
    bus.load(0x0000, &[0xC3, 0x50, 0x01, 0xCB, 0x7C, 0x18, 0xFE, 0xE0, 0x44]);

    assert_eq!(disassemble(&mut bus, 0x0000), ("JP 0150h".to_string(), 3));
    assert_eq!(disassemble(&mut bus, 0x0003), ("BIT 7,H".to_string(), 2));
    assert_eq!(disassemble(&mut bus, 0x0005), ("JR -2".to_string(), 2));
    assert_eq!(
        disassemble(&mut bus, 0x0007),
        ("LD (FF00+44h),A".to_string(), 2)
    );
}

#[test]
fn tracer_sees_each_step_with_operands() {
    let mut cpu = cpu_at(0x0000);
    let mut bus = TestBus::default();
    let mut tracer = RecordingTracer::default();

    // LD A,0x42 ; SWAP A
    bus.load(0x0000, &[0x3E, 0x42, 0xCB, 0x37]);

    cpu.step_traced(&mut bus, &mut tracer);
    cpu.step_traced(&mut bus, &mut tracer);

    assert_eq!(tracer.records.len(), 2);
    let first = &tracer.records[0];
    assert_eq!(first.pc, 0x0000);
    assert_eq!(first.operands(), &[0x42]);
    assert_eq!(first.text(), "LD A,42h");
    assert_eq!(first.cycles, 8);

    let second = &tracer.records[1];
    assert!(second.prefixed);
    assert_eq!(second.opcode, 0x37);
    assert_eq!(second.text(), "SWAP A");
    assert_eq!(second.registers.a(), 0x24);
}
