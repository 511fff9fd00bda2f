use super::*;
use crate::{CoreError, ENTRY_POINT};

struct TestBus {
    memory: [u8; 0x10000],
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl Bus for TestBus {
    fn read8(&self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

/// Power-on CPU with `program` placed at the entry point, where PC starts.
fn setup(program: &[u8]) -> (Cpu, TestBus) {
    let cpu = Cpu::new();
    let mut bus = TestBus::default();
    let start = ENTRY_POINT as usize;
    bus.memory[start..start + program.len()].copy_from_slice(program);
    (cpu, bus)
}

fn step_ok(cpu: &mut Cpu, bus: &mut TestBus) -> u32 {
    match cpu.step(bus) {
        Ok(cycles) => cycles,
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn power_on_registers_match_dmg_handoff() {
    let cpu = Cpu::new();
    assert_eq!(cpu.regs.af(), 0x01B0);
    assert_eq!(cpu.regs.bc(), 0x0013);
    assert_eq!(cpu.regs.de(), 0x00D8);
    assert_eq!(cpu.regs.hl(), 0x014D);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.pc, 0x0100);
    assert!(!cpu.ime);
    assert_eq!(cpu.state(), CpuState::Ready);
}

#[test]
fn register_pairs_round_trip_and_f_is_masked() {
    let mut regs = Registers::power_on();

    regs.set_bc(0x1234);
    regs.set_de(0xBEEF);
    regs.set_hl(0xC0DE);
    assert_eq!((regs.b, regs.c), (0x12, 0x34));
    assert_eq!((regs.d, regs.e), (0xBE, 0xEF));
    assert_eq!((regs.h, regs.l), (0xC0, 0xDE));
    assert_eq!(regs.bc(), 0x1234);
    assert_eq!(regs.de(), 0xBEEF);
    assert_eq!(regs.hl(), 0xC0DE);

    regs.set_af(0x12FF);
    assert_eq!(regs.a, 0x12);
    assert_eq!(regs.f(), 0xF0);
    assert_eq!(regs.af(), 0x12F0);

    regs.set_f(0x0F);
    assert_eq!(regs.f(), 0x00);
    assert!(regs.flags().is_empty());
}

#[test]
fn nop_advances_pc() {
    let (mut cpu, mut bus) = setup(&[0x00]);

    let cycles = step_ok(&mut cpu, &mut bus);

    assert_eq!(cpu.regs.pc, 0x0101);
    assert_eq!(cycles, 1);
}

#[test]
fn ld_16bit_and_basic_ld_indirect_work() {
    // LD BC,0x1234 ; LD (BC),A ; LD A,(BC)
    let (mut cpu, mut bus) = setup(&[0x01, 0x34, 0x12, 0x02, 0x0A]);
    cpu.regs.a = 0xAB;

    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.bc(), 0x1234);
    assert_eq!(cpu.regs.pc, 0x0103);

    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(bus.memory[0x1234], 0xAB);
    assert_eq!(cpu.regs.pc, 0x0104);

    cpu.regs.a = 0x00;
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.a, 0xAB);
    assert_eq!(cpu.regs.pc, 0x0105);
}

#[test]
fn ld_r_r_and_hl_inc_dec_forms_work() {
    // LD HL,0xC000 ; LD B,0x12 ; LD (HL),B ; LD A,(HL+) ; LD (HL-),A ; LD C,A
    let (mut cpu, mut bus) = setup(&[0x21, 0x00, 0xC0, 0x06, 0x12, 0x70, 0x2A, 0x32, 0x4F]);

    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.hl(), 0xC000);

    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.b, 0x12);

    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(bus.memory[0xC000], 0x12);

    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.hl(), 0xC001);

    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(bus.memory[0xC001], 0x12);
    assert_eq!(cpu.regs.hl(), 0xC000);

    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.c, 0x12);
    assert_eq!(cpu.regs.pc, 0x0109);
}

#[test]
fn ld_hl_immediate_writes_through_bus() {
    // LD HL,0xC123 ; LD (HL),0x77 ; LD E,(HL)
    let (mut cpu, mut bus) = setup(&[0x21, 0x23, 0xC1, 0x36, 0x77, 0x5E]);

    step_ok(&mut cpu, &mut bus);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(bus.memory[0xC123], 0x77);

    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.e, 0x77);
}

#[test]
fn absolute_and_high_page_loads() {
    // LD (0xC100),A ; LDH (0x80),A ; LD (C),A
    let (mut cpu, mut bus) = setup(&[0xEA, 0x00, 0xC1, 0xE0, 0x80, 0xE2]);
    cpu.regs.a = 0x5A;
    cpu.regs.c = 0x81;

    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(bus.memory[0xC100], 0x5A);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(bus.memory[0xFF80], 0x5A);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(bus.memory[0xFF81], 0x5A);
    assert_eq!(cpu.regs.pc, 0x0106);

    // LD A,(0xC100) ; LDH A,(0x80) ; LD A,(C)
    bus.memory[0x0106..0x010C].copy_from_slice(&[0xFA, 0x00, 0xC1, 0xF0, 0x80, 0xF2]);
    bus.memory[0xC100] = 0x11;
    bus.memory[0xFF80] = 0x22;
    bus.memory[0xFF81] = 0x33;

    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.a, 0x11);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.a, 0x22);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.a, 0x33);
}

#[test]
fn ld_a16_sp_stores_little_endian() {
    let (mut cpu, mut bus) = setup(&[0x08, 0x00, 0xC0]);
    cpu.regs.sp = 0xFFF8;

    assert_eq!(step_ok(&mut cpu, &mut bus), 5);
    assert_eq!(bus.memory[0xC000], 0xF8);
    assert_eq!(bus.memory[0xC001], 0xFF);
    assert_eq!(cpu.regs.pc, 0x0103);
}

#[test]
fn ld_sp_hl_copies_pair() {
    let (mut cpu, mut bus) = setup(&[0xF9]);
    cpu.regs.set_hl(0xD000);

    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.sp, 0xD000);
}

#[test]
fn alu_register_ops_set_flags() {
    // ADD A,B
    let (mut cpu, mut bus) = setup(&[0x80]);
    cpu.regs.a = 0x3A;
    cpu.regs.b = 0xC6;
    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.flags(), Flags::Z | Flags::H | Flags::C);

    // SUB A,E
    let (mut cpu, mut bus) = setup(&[0x93]);
    cpu.regs.a = 0x3E;
    cpu.regs.e = 0x3E;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.flags(), Flags::Z | Flags::N);

    // XOR A,A
    let (mut cpu, mut bus) = setup(&[0xAF]);
    cpu.regs.a = 0x9C;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.flags(), Flags::Z);

    // OR A,(HL)
    let (mut cpu, mut bus) = setup(&[0xB6]);
    cpu.regs.a = 0x50;
    cpu.regs.set_hl(0xC000);
    bus.memory[0xC000] = 0x05;
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.a, 0x55);
    assert!(cpu.flags().is_empty());
}

#[test]
fn alu_immediate_ops_set_flags() {
    // CP A,0x40 leaves A alone.
    let (mut cpu, mut bus) = setup(&[0xFE, 0x40]);
    cpu.regs.a = 0x3C;
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.a, 0x3C);
    assert_eq!(cpu.flags(), Flags::N | Flags::C);
    assert_eq!(cpu.regs.pc, 0x0102);

    // AND A,0x3F
    let (mut cpu, mut bus) = setup(&[0xE6, 0x3F]);
    cpu.regs.a = 0x5A;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x1A);
    assert_eq!(cpu.flags(), Flags::H);

    // ADC A,0x0F with carry in.
    let (mut cpu, mut bus) = setup(&[0xCE, 0x0F]);
    cpu.regs.a = 0xE1;
    cpu.regs.set_flags(Flags::C);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xF1);
    assert_eq!(cpu.flags(), Flags::H);

    // SBC A,0x01 with carry in borrows through zero.
    let (mut cpu, mut bus) = setup(&[0xDE, 0x01]);
    cpu.regs.a = 0x01;
    cpu.regs.set_flags(Flags::C);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert_eq!(cpu.flags(), Flags::N | Flags::H | Flags::C);
}

#[test]
fn inc_dec_hl_read_modify_write() {
    // INC (HL) ; DEC (HL)
    let (mut cpu, mut bus) = setup(&[0x34, 0x35]);
    cpu.regs.set_hl(0xC000);
    cpu.regs.set_flags(Flags::C);
    bus.memory[0xC000] = 0x0F;

    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(bus.memory[0xC000], 0x10);
    assert_eq!(cpu.flags(), Flags::H | Flags::C);

    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(bus.memory[0xC000], 0x0F);
    assert_eq!(cpu.flags(), Flags::N | Flags::H | Flags::C);
}

#[test]
fn dec_to_zero_keeps_carry() {
    let (mut cpu, mut bus) = setup(&[0x05]);
    cpu.regs.b = 0x01;
    cpu.regs.set_flags(Flags::empty());

    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.b, 0x00);
    assert_eq!(cpu.flags(), Flags::Z | Flags::N);
}

#[test]
fn inc_dec_16bit_leave_flags_alone() {
    // INC SP ; DEC BC
    let (mut cpu, mut bus) = setup(&[0x33, 0x0B]);
    cpu.regs.sp = 0xFFFF;
    cpu.regs.set_bc(0x0000);
    let before = cpu.flags();

    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.sp, 0x0000);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.bc(), 0xFFFF);
    assert_eq!(cpu.flags(), before);
}

#[test]
fn add_hl_sets_half_and_carry_keeps_zero() {
    // ADD HL,BC ; ADD HL,HL
    let (mut cpu, mut bus) = setup(&[0x09, 0x29]);
    cpu.regs.set_flags(Flags::Z | Flags::N);
    cpu.regs.set_hl(0x8A23);
    cpu.regs.set_bc(0x0605);

    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.hl(), 0x9028);
    assert_eq!(cpu.flags(), Flags::Z | Flags::H);

    cpu.regs.set_hl(0x8A23);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.hl(), 0x1446);
    assert_eq!(cpu.flags(), Flags::Z | Flags::H | Flags::C);
}

#[test]
fn sp_relative_arithmetic() {
    // ADD SP,+2
    let (mut cpu, mut bus) = setup(&[0xE8, 0x02]);
    cpu.regs.sp = 0xFFF8;
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.sp, 0xFFFA);
    assert!(cpu.flags().is_empty());

    // LD HL,SP-2
    let (mut cpu, mut bus) = setup(&[0xF8, 0xFE]);
    cpu.regs.sp = 0x0005;
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.hl(), 0x0003);
    assert_eq!(cpu.regs.sp, 0x0005);
    assert_eq!(cpu.flags(), Flags::H | Flags::C);
}

#[test]
fn push_pop_round_trip_and_af_masks_low_nibble() {
    // PUSH BC ; POP AF
    let (mut cpu, mut bus) = setup(&[0xC5, 0xF1]);
    cpu.regs.set_bc(0x12FF);

    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0xFF);
    assert_eq!(bus.memory[0xFFFD], 0x12);

    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.sp, 0xFFFE);
    assert_eq!(cpu.regs.a, 0x12);
    assert_eq!(cpu.regs.f(), 0xF0);
}

#[test]
fn push_af_pop_de() {
    // PUSH AF ; POP DE
    let (mut cpu, mut bus) = setup(&[0xF5, 0xD1]);

    step_ok(&mut cpu, &mut bus);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.de(), 0x01B0);
}

#[test]
fn call_and_ret() {
    let (mut cpu, mut bus) = setup(&[0xCD, 0x00, 0x02]);
    bus.memory[0x0200] = 0xC9;

    assert_eq!(step_ok(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x03);
    assert_eq!(bus.memory[0xFFFD], 0x01);

    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn rst_pushes_next_pc_and_jumps_to_vector() {
    let (mut cpu, mut bus) = setup(&[0xEF]);

    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0028);
    assert_eq!(bus.memory[0xFFFC], 0x01);
    assert_eq!(bus.memory[0xFFFD], 0x01);
}

#[test]
fn reti_returns_and_enables_interrupts() {
    let (mut cpu, mut bus) = setup(&[0xD9]);
    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0x34;
    bus.memory[0xFFFD] = 0x12;

    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert!(cpu.ime);
}

#[test]
fn di_and_ei_toggle_ime() {
    let (mut cpu, mut bus) = setup(&[0xFB, 0xF3]);

    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert!(cpu.ime);
    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert!(!cpu.ime);
}

#[test]
fn jr_forward_is_relative_to_next_instruction() {
    let (mut cpu, mut bus) = setup(&[0x18, 0x05]);

    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0107);
}

#[test]
fn jr_z_minus_two_loops_on_itself_when_taken() {
    let mut cpu = Cpu::new();
    let mut bus = TestBus::default();
    bus.memory[0x0150] = 0x28;
    bus.memory[0x0151] = 0xFE;
    cpu.regs.pc = 0x0150;

    cpu.set_flag(Flags::Z, true);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0150);

    cpu.set_flag(Flags::Z, false);
    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.pc, 0x0152);
}

#[test]
fn jp_cc_costs_depend_on_condition() {
    // JP NZ,0x0200 with Z set: not taken.
    let (mut cpu, mut bus) = setup(&[0xC2, 0x00, 0x02]);
    cpu.regs.set_flags(Flags::Z);
    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0103);

    // JP Z,0x0200 with Z set: taken.
    let (mut cpu, mut bus) = setup(&[0xCA, 0x00, 0x02]);
    cpu.regs.set_flags(Flags::Z);
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0200);

    // JP 0x4000
    let (mut cpu, mut bus) = setup(&[0xC3, 0x00, 0x40]);
    assert_eq!(step_ok(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x4000);
}

#[test]
fn jp_hl_takes_one_cycle() {
    let (mut cpu, mut bus) = setup(&[0xE9]);
    cpu.regs.set_hl(0x4000);

    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x4000);
}

#[test]
fn call_cc_not_taken_leaves_stack_alone() {
    // CALL NZ,0x0200 with Z set ; CALL C,0x0200 with C set
    let (mut cpu, mut bus) = setup(&[0xC4, 0x00, 0x02, 0xDC, 0x00, 0x02]);
    cpu.regs.set_flags(Flags::Z | Flags::C);

    assert_eq!(step_ok(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0103);
    assert_eq!(cpu.regs.sp, 0xFFFE);

    assert_eq!(step_ok(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.regs.sp, 0xFFFC);
    assert_eq!(bus.memory[0xFFFC], 0x06);
    assert_eq!(bus.memory[0xFFFD], 0x01);
}

#[test]
fn ret_cc_costs_depend_on_condition() {
    // RET NC ; RET C
    let (mut cpu, mut bus) = setup(&[0xD0, 0xD8]);
    cpu.regs.set_flags(Flags::C);
    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0x34;
    bus.memory[0xFFFD] = 0x12;

    assert_eq!(step_ok(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.pc, 0x0101);
    assert_eq!(cpu.regs.sp, 0xFFFC);

    assert_eq!(step_ok(&mut cpu, &mut bus), 5);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn daa_corrects_bcd_addition_and_subtraction() {
    // ADD A,0x27 ; DAA
    let (mut cpu, mut bus) = setup(&[0xC6, 0x27, 0x27]);
    cpu.regs.a = 0x15;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x3C);
    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.a, 0x42);
    assert!(cpu.flags().is_empty());

    // SUB A,0x15 ; DAA
    let (mut cpu, mut bus) = setup(&[0xD6, 0x15, 0x27]);
    cpu.regs.a = 0x42;
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x2D);
    assert_eq!(cpu.flags(), Flags::N | Flags::H);
    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x27);
    assert_eq!(cpu.flags(), Flags::N);
}

#[test]
fn accumulator_rotates_clear_zero() {
    // RLCA ; RRA
    let (mut cpu, mut bus) = setup(&[0x07, 0x1F]);
    cpu.regs.a = 0x85;
    cpu.regs.set_flags(Flags::Z);

    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.a, 0x0B);
    assert_eq!(cpu.flags(), Flags::C);

    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x85);
    assert_eq!(cpu.flags(), Flags::C);
}

#[test]
fn cpl_scf_ccf() {
    let (mut cpu, mut bus) = setup(&[0x2F, 0x37, 0x3F]);
    cpu.regs.a = 0x35;
    cpu.regs.set_flags(Flags::Z);

    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xCA);
    assert_eq!(cpu.flags(), Flags::Z | Flags::N | Flags::H);

    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.flags(), Flags::Z | Flags::C);

    step_ok(&mut cpu, &mut bus);
    assert_eq!(cpu.flags(), Flags::Z);
}

#[test]
fn halt_idles_until_resumed() {
    let (mut cpu, mut bus) = setup(&[0x76, 0x00]);

    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert!(cpu.is_halted());
    assert_eq!(cpu.regs.pc, 0x0101);

    for _ in 0..3 {
        assert_eq!(step_ok(&mut cpu, &mut bus), HALTED_STEP_CYCLES);
        assert_eq!(cpu.regs.pc, 0x0101);
    }

    cpu.resume();
    assert_eq!(cpu.state(), CpuState::Ready);
    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn stop_consumes_padding_byte() {
    let (mut cpu, mut bus) = setup(&[0x10, 0x00]);

    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x0102);
    assert!(cpu.is_halted());
}

#[test]
fn cb_prefix_reports_unimplemented_at_prefix_pc() {
    let (mut cpu, mut bus) = setup(&[0xCB, 0x37]);

    let err = cpu.step(&mut bus).unwrap_err();
    assert_eq!(
        err,
        CoreError::UnimplementedOpcode {
            opcode: 0x37,
            pc: 0x0100,
            prefixed: true,
        }
    );
    assert_eq!(cpu.regs.pc, 0x0102);
    assert_eq!(cpu.state(), CpuState::Ready);
}

#[test]
fn illegal_opcode_is_reported_then_skipped() {
    let (mut cpu, mut bus) = setup(&[0xD3, 0x00]);

    let err = cpu.step(&mut bus).unwrap_err();
    assert_eq!(
        err,
        CoreError::IllegalOpcode {
            opcode: 0xD3,
            pc: 0x0100,
        }
    );
    assert_eq!(cpu.regs.pc, 0x0101);

    assert_eq!(step_ok(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn error_message_names_opcode_and_pc() {
    let err = CoreError::UnimplementedOpcode {
        opcode: 0x37,
        pc: 0x0150,
        prefixed: true,
    };
    let message = err.to_string();
    assert!(message.contains("0x37"), "{message}");
    assert!(message.contains("0x0150"), "{message}");
}

#[test]
fn base_table_covers_every_opcode() {
    const HOLES: [u8; 11] = [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ];

    let mut conditional = 0;
    for opcode in 0..=0xFFu8 {
        match base_slot(opcode) {
            Slot::Op(ins) => {
                assert_eq!(ins.opcode, opcode);
                assert!(ins.operand_len <= 2, "{ins:?}");
                assert!(ins.cycles >= 1, "{ins:?}");
                assert!(ins.cycles_not_taken <= ins.cycles, "{ins:?}");
                if ins.is_conditional() {
                    conditional += 1;
                }
            }
            Slot::Prefix => assert_eq!(opcode, 0xCB),
            Slot::Illegal => assert!(HOLES.contains(&opcode), "0x{opcode:02X}"),
            Slot::Unimplemented => panic!("opcode 0x{opcode:02X} has no entry"),
        }
    }
    // JR, JP, CALL and RET, four conditions each.
    assert_eq!(conditional, 16);

    for hole in HOLES {
        assert!(matches!(base_slot(hole), Slot::Illegal));
    }
}

#[test]
fn prefixed_table_is_reserved() {
    for opcode in 0..=0xFFu8 {
        assert!(matches!(prefixed_slot(opcode), Slot::Unimplemented));
    }
}

#[test]
fn ld_r_r_matrix_copies_every_register() {
    for dst in 0..8u8 {
        for src in 0..8u8 {
            let opcode = 0x40 | (dst << 3) | src;
            if opcode == 0x76 {
                continue;
            }
            let (mut cpu, mut bus) = setup(&[opcode]);
            cpu.regs.b = 0x10;
            cpu.regs.c = 0x11;
            cpu.regs.d = 0x12;
            cpu.regs.e = 0x13;
            cpu.regs.set_hl(0xC0C0);
            cpu.regs.a = 0x17;
            bus.memory[0xC0C0] = 0x16;

            let expected = cpu.read_reg8(&bus, src);
            let cycles = step_ok(&mut cpu, &mut bus);

            assert_eq!(cpu.read_reg8(&bus, dst), expected, "opcode 0x{opcode:02X}");
            let touches_memory = src == 6 || dst == 6;
            assert_eq!(cycles, if touches_memory { 2 } else { 1 });
        }
    }
}
