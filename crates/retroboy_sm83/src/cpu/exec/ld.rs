use crate::cpu::{Bus, Cpu, Decoded, Flow};

/// Base of the high page addressed by LDH and LD (C).
const HIGH_PAGE: u16 = 0xFF00;

impl Cpu {
    /// LD rr,d16.
    pub(super) fn ld_rr_d16(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        self.write_rr(ins.opcode >> 4, ins.operand.word());
        Flow::Continue
    }

    /// LD r,d8 and LD (HL),d8.
    pub(super) fn ld_r_d8(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        self.write_reg8(bus, ins.opcode >> 3, ins.operand.byte());
        Flow::Continue
    }

    /// LD r,r' covering 0x40–0x7F except HALT (0x76).
    pub(super) fn ld_r_r(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        debug_assert!((0x40..=0x7F).contains(&ins.opcode) && ins.opcode != 0x76);

        let value = self.read_reg8(bus, ins.opcode);
        self.write_reg8(bus, ins.opcode >> 3, value);
        Flow::Continue
    }

    /// Address for the (BC)/(DE)/(HL+)/(HL-) forms, applying the HL
    /// post-increment or post-decrement.
    fn indirect_address(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    /// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A.
    pub(super) fn ld_indirect_a(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let addr = self.indirect_address(ins.opcode);
        bus.write8(addr, self.regs.a);
        Flow::Continue
    }

    /// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-).
    pub(super) fn ld_a_indirect(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let addr = self.indirect_address(ins.opcode);
        self.regs.a = bus.read8(addr);
        Flow::Continue
    }

    /// LD (a16),SP.
    pub(super) fn ld_a16_sp(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        bus.write16(ins.operand.word(), self.regs.sp);
        Flow::Continue
    }

    /// LD (a16),A and LD A,(a16).
    pub(super) fn ld_a16_a(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let addr = ins.operand.word();
        match ins.opcode {
            0xEA => bus.write8(addr, self.regs.a),
            _ => self.regs.a = bus.read8(addr),
        }
        Flow::Continue
    }

    /// LDH (a8),A and LDH A,(a8).
    pub(super) fn ldh_a8(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let addr = HIGH_PAGE | ins.operand.byte() as u16;
        match ins.opcode {
            0xE0 => bus.write8(addr, self.regs.a),
            _ => self.regs.a = bus.read8(addr),
        }
        Flow::Continue
    }

    /// LD (C),A and LD A,(C).
    pub(super) fn ldh_c(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let addr = HIGH_PAGE | self.regs.c as u16;
        match ins.opcode {
            0xE2 => bus.write8(addr, self.regs.a),
            _ => self.regs.a = bus.read8(addr),
        }
        Flow::Continue
    }

    pub(super) fn ld_sp_hl(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.regs.sp = self.regs.hl();
        Flow::Continue
    }
}
