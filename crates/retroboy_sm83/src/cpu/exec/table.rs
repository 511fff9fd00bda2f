use lazy_static::lazy_static;

use crate::cpu::decode::{Instruction, Slot};
use crate::cpu::Cpu;

lazy_static! {
    static ref BASE: [Slot; 256] = build_base_table();
    /// CB-prefixed (bit/rotate/shift) table. Present so the prefix
    /// dispatches somewhere, but none of its entries are implemented yet.
    static ref PREFIXED: [Slot; 256] = [Slot::Unimplemented; 256];
}

/// Slot for an unprefixed opcode.
#[inline]
pub fn base_slot(opcode: u8) -> Slot {
    BASE[opcode as usize]
}

/// Slot for the byte following a 0xCB prefix.
#[inline]
pub fn prefixed_slot(opcode: u8) -> Slot {
    PREFIXED[opcode as usize]
}

/// Unprefixed opcode table.
///
/// Costs are in machine cycles (4 clock ticks each). Conditional branches
/// list the taken cost first, then the not-taken cost.
fn build_base_table() -> [Slot; 256] {
    let mut table = [Slot::Unimplemented; 256];

    macro_rules! branch {
        ($opcode:literal, $mnemonic:literal, $len:literal, $taken:literal, $not_taken:literal, $handler:expr) => {
            table[$opcode] = Slot::Op(Instruction {
                opcode: $opcode,
                mnemonic: $mnemonic,
                operand_len: $len,
                cycles: $taken,
                cycles_not_taken: $not_taken,
                handler: $handler,
            });
        };
    }

    macro_rules! op {
        ($opcode:literal, $mnemonic:literal, $len:literal, $cycles:literal, $handler:expr) => {
            branch!($opcode, $mnemonic, $len, $cycles, $cycles, $handler)
        };
    }

    // 0x00
    op!(0x00, "NOP", 0, 1, Cpu::nop);
    op!(0x01, "LD BC,d16", 2, 3, Cpu::ld_rr_d16);
    op!(0x02, "LD (BC),A", 0, 2, Cpu::ld_indirect_a);
    op!(0x03, "INC BC", 0, 2, Cpu::inc16);
    op!(0x04, "INC B", 0, 1, Cpu::inc8);
    op!(0x05, "DEC B", 0, 1, Cpu::dec8);
    op!(0x06, "LD B,d8", 1, 2, Cpu::ld_r_d8);
    op!(0x07, "RLCA", 0, 1, Cpu::rotate_a);
    op!(0x08, "LD (a16),SP", 2, 5, Cpu::ld_a16_sp);
    op!(0x09, "ADD HL,BC", 0, 2, Cpu::add_hl_rr);
    op!(0x0A, "LD A,(BC)", 0, 2, Cpu::ld_a_indirect);
    op!(0x0B, "DEC BC", 0, 2, Cpu::dec16);
    op!(0x0C, "INC C", 0, 1, Cpu::inc8);
    op!(0x0D, "DEC C", 0, 1, Cpu::dec8);
    op!(0x0E, "LD C,d8", 1, 2, Cpu::ld_r_d8);
    op!(0x0F, "RRCA", 0, 1, Cpu::rotate_a);
    // 0x10
    op!(0x10, "STOP", 1, 1, Cpu::stop);
    op!(0x11, "LD DE,d16", 2, 3, Cpu::ld_rr_d16);
    op!(0x12, "LD (DE),A", 0, 2, Cpu::ld_indirect_a);
    op!(0x13, "INC DE", 0, 2, Cpu::inc16);
    op!(0x14, "INC D", 0, 1, Cpu::inc8);
    op!(0x15, "DEC D", 0, 1, Cpu::dec8);
    op!(0x16, "LD D,d8", 1, 2, Cpu::ld_r_d8);
    op!(0x17, "RLA", 0, 1, Cpu::rotate_a);
    op!(0x18, "JR e8", 1, 3, Cpu::jr);
    op!(0x19, "ADD HL,DE", 0, 2, Cpu::add_hl_rr);
    op!(0x1A, "LD A,(DE)", 0, 2, Cpu::ld_a_indirect);
    op!(0x1B, "DEC DE", 0, 2, Cpu::dec16);
    op!(0x1C, "INC E", 0, 1, Cpu::inc8);
    op!(0x1D, "DEC E", 0, 1, Cpu::dec8);
    op!(0x1E, "LD E,d8", 1, 2, Cpu::ld_r_d8);
    op!(0x1F, "RRA", 0, 1, Cpu::rotate_a);
    // 0x20
    branch!(0x20, "JR NZ,e8", 1, 3, 2, Cpu::jr_cc);
    op!(0x21, "LD HL,d16", 2, 3, Cpu::ld_rr_d16);
    op!(0x22, "LD (HL+),A", 0, 2, Cpu::ld_indirect_a);
    op!(0x23, "INC HL", 0, 2, Cpu::inc16);
    op!(0x24, "INC H", 0, 1, Cpu::inc8);
    op!(0x25, "DEC H", 0, 1, Cpu::dec8);
    op!(0x26, "LD H,d8", 1, 2, Cpu::ld_r_d8);
    op!(0x27, "DAA", 0, 1, Cpu::daa);
    branch!(0x28, "JR Z,e8", 1, 3, 2, Cpu::jr_cc);
    op!(0x29, "ADD HL,HL", 0, 2, Cpu::add_hl_rr);
    op!(0x2A, "LD A,(HL+)", 0, 2, Cpu::ld_a_indirect);
    op!(0x2B, "DEC HL", 0, 2, Cpu::dec16);
    op!(0x2C, "INC L", 0, 1, Cpu::inc8);
    op!(0x2D, "DEC L", 0, 1, Cpu::dec8);
    op!(0x2E, "LD L,d8", 1, 2, Cpu::ld_r_d8);
    op!(0x2F, "CPL", 0, 1, Cpu::cpl);
    // 0x30
    branch!(0x30, "JR NC,e8", 1, 3, 2, Cpu::jr_cc);
    op!(0x31, "LD SP,d16", 2, 3, Cpu::ld_rr_d16);
    op!(0x32, "LD (HL-),A", 0, 2, Cpu::ld_indirect_a);
    op!(0x33, "INC SP", 0, 2, Cpu::inc16);
    op!(0x34, "INC (HL)", 0, 3, Cpu::inc8);
    op!(0x35, "DEC (HL)", 0, 3, Cpu::dec8);
    op!(0x36, "LD (HL),d8", 1, 3, Cpu::ld_r_d8);
    op!(0x37, "SCF", 0, 1, Cpu::scf);
    branch!(0x38, "JR C,e8", 1, 3, 2, Cpu::jr_cc);
    op!(0x39, "ADD HL,SP", 0, 2, Cpu::add_hl_rr);
    op!(0x3A, "LD A,(HL-)", 0, 2, Cpu::ld_a_indirect);
    op!(0x3B, "DEC SP", 0, 2, Cpu::dec16);
    op!(0x3C, "INC A", 0, 1, Cpu::inc8);
    op!(0x3D, "DEC A", 0, 1, Cpu::dec8);
    op!(0x3E, "LD A,d8", 1, 2, Cpu::ld_r_d8);
    op!(0x3F, "CCF", 0, 1, Cpu::ccf);
    // 0x40
    op!(0x40, "LD B,B", 0, 1, Cpu::ld_r_r);
    op!(0x41, "LD B,C", 0, 1, Cpu::ld_r_r);
    op!(0x42, "LD B,D", 0, 1, Cpu::ld_r_r);
    op!(0x43, "LD B,E", 0, 1, Cpu::ld_r_r);
    op!(0x44, "LD B,H", 0, 1, Cpu::ld_r_r);
    op!(0x45, "LD B,L", 0, 1, Cpu::ld_r_r);
    op!(0x46, "LD B,(HL)", 0, 2, Cpu::ld_r_r);
    op!(0x47, "LD B,A", 0, 1, Cpu::ld_r_r);
    op!(0x48, "LD C,B", 0, 1, Cpu::ld_r_r);
    op!(0x49, "LD C,C", 0, 1, Cpu::ld_r_r);
    op!(0x4A, "LD C,D", 0, 1, Cpu::ld_r_r);
    op!(0x4B, "LD C,E", 0, 1, Cpu::ld_r_r);
    op!(0x4C, "LD C,H", 0, 1, Cpu::ld_r_r);
    op!(0x4D, "LD C,L", 0, 1, Cpu::ld_r_r);
    op!(0x4E, "LD C,(HL)", 0, 2, Cpu::ld_r_r);
    op!(0x4F, "LD C,A", 0, 1, Cpu::ld_r_r);
    // 0x50
    op!(0x50, "LD D,B", 0, 1, Cpu::ld_r_r);
    op!(0x51, "LD D,C", 0, 1, Cpu::ld_r_r);
    op!(0x52, "LD D,D", 0, 1, Cpu::ld_r_r);
    op!(0x53, "LD D,E", 0, 1, Cpu::ld_r_r);
    op!(0x54, "LD D,H", 0, 1, Cpu::ld_r_r);
    op!(0x55, "LD D,L", 0, 1, Cpu::ld_r_r);
    op!(0x56, "LD D,(HL)", 0, 2, Cpu::ld_r_r);
    op!(0x57, "LD D,A", 0, 1, Cpu::ld_r_r);
    op!(0x58, "LD E,B", 0, 1, Cpu::ld_r_r);
    op!(0x59, "LD E,C", 0, 1, Cpu::ld_r_r);
    op!(0x5A, "LD E,D", 0, 1, Cpu::ld_r_r);
    op!(0x5B, "LD E,E", 0, 1, Cpu::ld_r_r);
    op!(0x5C, "LD E,H", 0, 1, Cpu::ld_r_r);
    op!(0x5D, "LD E,L", 0, 1, Cpu::ld_r_r);
    op!(0x5E, "LD E,(HL)", 0, 2, Cpu::ld_r_r);
    op!(0x5F, "LD E,A", 0, 1, Cpu::ld_r_r);
    // 0x60
    op!(0x60, "LD H,B", 0, 1, Cpu::ld_r_r);
    op!(0x61, "LD H,C", 0, 1, Cpu::ld_r_r);
    op!(0x62, "LD H,D", 0, 1, Cpu::ld_r_r);
    op!(0x63, "LD H,E", 0, 1, Cpu::ld_r_r);
    op!(0x64, "LD H,H", 0, 1, Cpu::ld_r_r);
    op!(0x65, "LD H,L", 0, 1, Cpu::ld_r_r);
    op!(0x66, "LD H,(HL)", 0, 2, Cpu::ld_r_r);
    op!(0x67, "LD H,A", 0, 1, Cpu::ld_r_r);
    op!(0x68, "LD L,B", 0, 1, Cpu::ld_r_r);
    op!(0x69, "LD L,C", 0, 1, Cpu::ld_r_r);
    op!(0x6A, "LD L,D", 0, 1, Cpu::ld_r_r);
    op!(0x6B, "LD L,E", 0, 1, Cpu::ld_r_r);
    op!(0x6C, "LD L,H", 0, 1, Cpu::ld_r_r);
    op!(0x6D, "LD L,L", 0, 1, Cpu::ld_r_r);
    op!(0x6E, "LD L,(HL)", 0, 2, Cpu::ld_r_r);
    op!(0x6F, "LD L,A", 0, 1, Cpu::ld_r_r);
    // 0x70
    op!(0x70, "LD (HL),B", 0, 2, Cpu::ld_r_r);
    op!(0x71, "LD (HL),C", 0, 2, Cpu::ld_r_r);
    op!(0x72, "LD (HL),D", 0, 2, Cpu::ld_r_r);
    op!(0x73, "LD (HL),E", 0, 2, Cpu::ld_r_r);
    op!(0x74, "LD (HL),H", 0, 2, Cpu::ld_r_r);
    op!(0x75, "LD (HL),L", 0, 2, Cpu::ld_r_r);
    op!(0x76, "HALT", 0, 1, Cpu::halt);
    op!(0x77, "LD (HL),A", 0, 2, Cpu::ld_r_r);
    op!(0x78, "LD A,B", 0, 1, Cpu::ld_r_r);
    op!(0x79, "LD A,C", 0, 1, Cpu::ld_r_r);
    op!(0x7A, "LD A,D", 0, 1, Cpu::ld_r_r);
    op!(0x7B, "LD A,E", 0, 1, Cpu::ld_r_r);
    op!(0x7C, "LD A,H", 0, 1, Cpu::ld_r_r);
    op!(0x7D, "LD A,L", 0, 1, Cpu::ld_r_r);
    op!(0x7E, "LD A,(HL)", 0, 2, Cpu::ld_r_r);
    op!(0x7F, "LD A,A", 0, 1, Cpu::ld_r_r);
    // 0x80
    op!(0x80, "ADD A,B", 0, 1, Cpu::alu_r);
    op!(0x81, "ADD A,C", 0, 1, Cpu::alu_r);
    op!(0x82, "ADD A,D", 0, 1, Cpu::alu_r);
    op!(0x83, "ADD A,E", 0, 1, Cpu::alu_r);
    op!(0x84, "ADD A,H", 0, 1, Cpu::alu_r);
    op!(0x85, "ADD A,L", 0, 1, Cpu::alu_r);
    op!(0x86, "ADD A,(HL)", 0, 2, Cpu::alu_r);
    op!(0x87, "ADD A,A", 0, 1, Cpu::alu_r);
    op!(0x88, "ADC A,B", 0, 1, Cpu::alu_r);
    op!(0x89, "ADC A,C", 0, 1, Cpu::alu_r);
    op!(0x8A, "ADC A,D", 0, 1, Cpu::alu_r);
    op!(0x8B, "ADC A,E", 0, 1, Cpu::alu_r);
    op!(0x8C, "ADC A,H", 0, 1, Cpu::alu_r);
    op!(0x8D, "ADC A,L", 0, 1, Cpu::alu_r);
    op!(0x8E, "ADC A,(HL)", 0, 2, Cpu::alu_r);
    op!(0x8F, "ADC A,A", 0, 1, Cpu::alu_r);
    // 0x90
    op!(0x90, "SUB A,B", 0, 1, Cpu::alu_r);
    op!(0x91, "SUB A,C", 0, 1, Cpu::alu_r);
    op!(0x92, "SUB A,D", 0, 1, Cpu::alu_r);
    op!(0x93, "SUB A,E", 0, 1, Cpu::alu_r);
    op!(0x94, "SUB A,H", 0, 1, Cpu::alu_r);
    op!(0x95, "SUB A,L", 0, 1, Cpu::alu_r);
    op!(0x96, "SUB A,(HL)", 0, 2, Cpu::alu_r);
    op!(0x97, "SUB A,A", 0, 1, Cpu::alu_r);
    op!(0x98, "SBC A,B", 0, 1, Cpu::alu_r);
    op!(0x99, "SBC A,C", 0, 1, Cpu::alu_r);
    op!(0x9A, "SBC A,D", 0, 1, Cpu::alu_r);
    op!(0x9B, "SBC A,E", 0, 1, Cpu::alu_r);
    op!(0x9C, "SBC A,H", 0, 1, Cpu::alu_r);
    op!(0x9D, "SBC A,L", 0, 1, Cpu::alu_r);
    op!(0x9E, "SBC A,(HL)", 0, 2, Cpu::alu_r);
    op!(0x9F, "SBC A,A", 0, 1, Cpu::alu_r);
    // 0xA0
    op!(0xA0, "AND A,B", 0, 1, Cpu::alu_r);
    op!(0xA1, "AND A,C", 0, 1, Cpu::alu_r);
    op!(0xA2, "AND A,D", 0, 1, Cpu::alu_r);
    op!(0xA3, "AND A,E", 0, 1, Cpu::alu_r);
    op!(0xA4, "AND A,H", 0, 1, Cpu::alu_r);
    op!(0xA5, "AND A,L", 0, 1, Cpu::alu_r);
    op!(0xA6, "AND A,(HL)", 0, 2, Cpu::alu_r);
    op!(0xA7, "AND A,A", 0, 1, Cpu::alu_r);
    op!(0xA8, "XOR A,B", 0, 1, Cpu::alu_r);
    op!(0xA9, "XOR A,C", 0, 1, Cpu::alu_r);
    op!(0xAA, "XOR A,D", 0, 1, Cpu::alu_r);
    op!(0xAB, "XOR A,E", 0, 1, Cpu::alu_r);
    op!(0xAC, "XOR A,H", 0, 1, Cpu::alu_r);
    op!(0xAD, "XOR A,L", 0, 1, Cpu::alu_r);
    op!(0xAE, "XOR A,(HL)", 0, 2, Cpu::alu_r);
    op!(0xAF, "XOR A,A", 0, 1, Cpu::alu_r);
    // 0xB0
    op!(0xB0, "OR A,B", 0, 1, Cpu::alu_r);
    op!(0xB1, "OR A,C", 0, 1, Cpu::alu_r);
    op!(0xB2, "OR A,D", 0, 1, Cpu::alu_r);
    op!(0xB3, "OR A,E", 0, 1, Cpu::alu_r);
    op!(0xB4, "OR A,H", 0, 1, Cpu::alu_r);
    op!(0xB5, "OR A,L", 0, 1, Cpu::alu_r);
    op!(0xB6, "OR A,(HL)", 0, 2, Cpu::alu_r);
    op!(0xB7, "OR A,A", 0, 1, Cpu::alu_r);
    op!(0xB8, "CP A,B", 0, 1, Cpu::alu_r);
    op!(0xB9, "CP A,C", 0, 1, Cpu::alu_r);
    op!(0xBA, "CP A,D", 0, 1, Cpu::alu_r);
    op!(0xBB, "CP A,E", 0, 1, Cpu::alu_r);
    op!(0xBC, "CP A,H", 0, 1, Cpu::alu_r);
    op!(0xBD, "CP A,L", 0, 1, Cpu::alu_r);
    op!(0xBE, "CP A,(HL)", 0, 2, Cpu::alu_r);
    op!(0xBF, "CP A,A", 0, 1, Cpu::alu_r);
    // 0xC0
    branch!(0xC0, "RET NZ", 0, 5, 2, Cpu::ret_cc);
    op!(0xC1, "POP BC", 0, 3, Cpu::pop);
    branch!(0xC2, "JP NZ,a16", 2, 4, 3, Cpu::jp_cc);
    op!(0xC3, "JP a16", 2, 4, Cpu::jp);
    branch!(0xC4, "CALL NZ,a16", 2, 6, 3, Cpu::call_cc);
    op!(0xC5, "PUSH BC", 0, 4, Cpu::push);
    op!(0xC6, "ADD A,d8", 1, 2, Cpu::alu_d8);
    op!(0xC7, "RST 00H", 0, 4, Cpu::rst);
    branch!(0xC8, "RET Z", 0, 5, 2, Cpu::ret_cc);
    op!(0xC9, "RET", 0, 4, Cpu::ret);
    branch!(0xCA, "JP Z,a16", 2, 4, 3, Cpu::jp_cc);
    table[0xCB] = Slot::Prefix;
    branch!(0xCC, "CALL Z,a16", 2, 6, 3, Cpu::call_cc);
    op!(0xCD, "CALL a16", 2, 6, Cpu::call);
    op!(0xCE, "ADC A,d8", 1, 2, Cpu::alu_d8);
    op!(0xCF, "RST 08H", 0, 4, Cpu::rst);
    // 0xD0
    branch!(0xD0, "RET NC", 0, 5, 2, Cpu::ret_cc);
    op!(0xD1, "POP DE", 0, 3, Cpu::pop);
    branch!(0xD2, "JP NC,a16", 2, 4, 3, Cpu::jp_cc);
    table[0xD3] = Slot::Illegal;
    branch!(0xD4, "CALL NC,a16", 2, 6, 3, Cpu::call_cc);
    op!(0xD5, "PUSH DE", 0, 4, Cpu::push);
    op!(0xD6, "SUB A,d8", 1, 2, Cpu::alu_d8);
    op!(0xD7, "RST 10H", 0, 4, Cpu::rst);
    branch!(0xD8, "RET C", 0, 5, 2, Cpu::ret_cc);
    op!(0xD9, "RETI", 0, 4, Cpu::reti);
    branch!(0xDA, "JP C,a16", 2, 4, 3, Cpu::jp_cc);
    table[0xDB] = Slot::Illegal;
    branch!(0xDC, "CALL C,a16", 2, 6, 3, Cpu::call_cc);
    table[0xDD] = Slot::Illegal;
    op!(0xDE, "SBC A,d8", 1, 2, Cpu::alu_d8);
    op!(0xDF, "RST 18H", 0, 4, Cpu::rst);
    // 0xE0
    op!(0xE0, "LDH (a8),A", 1, 3, Cpu::ldh_a8);
    op!(0xE1, "POP HL", 0, 3, Cpu::pop);
    op!(0xE2, "LD (C),A", 0, 2, Cpu::ldh_c);
    table[0xE3] = Slot::Illegal;
    table[0xE4] = Slot::Illegal;
    op!(0xE5, "PUSH HL", 0, 4, Cpu::push);
    op!(0xE6, "AND A,d8", 1, 2, Cpu::alu_d8);
    op!(0xE7, "RST 20H", 0, 4, Cpu::rst);
    op!(0xE8, "ADD SP,e8", 1, 4, Cpu::add_sp_e8);
    op!(0xE9, "JP HL", 0, 1, Cpu::jp_hl);
    op!(0xEA, "LD (a16),A", 2, 4, Cpu::ld_a16_a);
    table[0xEB] = Slot::Illegal;
    table[0xEC] = Slot::Illegal;
    table[0xED] = Slot::Illegal;
    op!(0xEE, "XOR A,d8", 1, 2, Cpu::alu_d8);
    op!(0xEF, "RST 28H", 0, 4, Cpu::rst);
    // 0xF0
    op!(0xF0, "LDH A,(a8)", 1, 3, Cpu::ldh_a8);
    op!(0xF1, "POP AF", 0, 3, Cpu::pop);
    op!(0xF2, "LD A,(C)", 0, 2, Cpu::ldh_c);
    op!(0xF3, "DI", 0, 1, Cpu::di);
    table[0xF4] = Slot::Illegal;
    op!(0xF5, "PUSH AF", 0, 4, Cpu::push);
    op!(0xF6, "OR A,d8", 1, 2, Cpu::alu_d8);
    op!(0xF7, "RST 30H", 0, 4, Cpu::rst);
    op!(0xF8, "LD HL,SP+e8", 1, 3, Cpu::ld_hl_sp_e8);
    op!(0xF9, "LD SP,HL", 0, 2, Cpu::ld_sp_hl);
    op!(0xFA, "LD A,(a16)", 2, 4, Cpu::ld_a16_a);
    op!(0xFB, "EI", 0, 1, Cpu::ei);
    table[0xFC] = Slot::Illegal;
    table[0xFD] = Slot::Illegal;
    op!(0xFE, "CP A,d8", 1, 2, Cpu::alu_d8);
    op!(0xFF, "RST 38H", 0, 4, Cpu::rst);

    table
}
