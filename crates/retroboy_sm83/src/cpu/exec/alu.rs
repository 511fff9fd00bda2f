use crate::cpu::alu::{self, Rotate};
use crate::cpu::{Bus, Cpu, Decoded, Flags, Flow};

impl Cpu {
    /// Apply one of the eight accumulator operations selected by bits 3–5
    /// of the opcode: ADD, ADC, SUB, SBC, AND, XOR, OR, CP.
    fn alu_a(&mut self, operation: u8, value: u8) {
        let a = self.regs.a;
        let carry = self.flag(Flags::C);
        let (result, flags) = match (operation >> 3) & 0x07 {
            0 => alu::add8(a, value, false),
            1 => alu::add8(a, value, carry),
            2 => alu::sub8(a, value, false),
            3 => alu::sub8(a, value, carry),
            4 => alu::and8(a, value),
            5 => alu::xor8(a, value),
            6 => alu::or8(a, value),
            _ => (a, alu::cp8(a, value)),
        };
        self.regs.a = result;
        self.regs.set_flags(flags);
    }

    /// ALU A,r and ALU A,(HL) (0x80–0xBF).
    pub(super) fn alu_r(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!((0x80..=0xBF).contains(&ins.opcode));
        let value = self.read_reg8(bus, ins.opcode);
        self.alu_a(ins.opcode, value);
        Flow::Continue
    }

    /// ALU A,d8.
    pub(super) fn alu_d8(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        self.alu_a(ins.opcode, ins.operand.byte());
        Flow::Continue
    }

    /// RLCA / RRCA / RLA / RRA.
    pub(super) fn rotate_a(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let op = match ins.opcode {
            0x07 => Rotate::LeftCircular,
            0x0F => Rotate::RightCircular,
            0x17 => Rotate::Left,
            _ => Rotate::Right,
        };
        let (result, flags) = alu::rotate_a(self.regs.a, op, self.flags());
        self.regs.a = result;
        self.regs.set_flags(flags);
        Flow::Continue
    }

    /// ADD HL,rr.
    pub(super) fn add_hl_rr(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let value = self.read_rr(ins.opcode >> 4);
        let (result, flags) = alu::add16(self.regs.hl(), value, self.flags());
        self.regs.set_hl(result);
        self.regs.set_flags(flags);
        Flow::Continue
    }

    /// ADD SP,e8.
    pub(super) fn add_sp_e8(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let (result, flags) = alu::add16_signed(self.regs.sp, ins.operand.byte());
        self.regs.sp = result;
        self.regs.set_flags(flags);
        Flow::Continue
    }

    /// LD HL,SP+e8.
    pub(super) fn ld_hl_sp_e8(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let (result, flags) = alu::add16_signed(self.regs.sp, ins.operand.byte());
        self.regs.set_hl(result);
        self.regs.set_flags(flags);
        Flow::Continue
    }

    pub(super) fn daa(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        let (result, flags) = alu::daa(self.regs.a, self.flags());
        self.regs.a = result;
        self.regs.set_flags(flags);
        Flow::Continue
    }

    pub(super) fn cpl(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.regs.a = !self.regs.a;
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, true);
        Flow::Continue
    }

    pub(super) fn scf(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::C, true);
        Flow::Continue
    }

    pub(super) fn ccf(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        let carry = self.flag(Flags::C);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::C, !carry);
        Flow::Continue
    }
}
