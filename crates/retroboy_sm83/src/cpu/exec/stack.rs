use crate::cpu::{Bus, Cpu, Decoded, Flow};

impl Cpu {
    /// PUSH rr, with AF instead of SP in slot 3.
    pub(super) fn push(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let value = match (ins.opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.af(),
        };
        self.push_u16(bus, value);
        Flow::Continue
    }

    /// POP rr. POP AF drops the low nibble of F.
    pub(super) fn pop(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let value = self.pop_u16(bus);
        match (ins.opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.set_af(value),
        }
        Flow::Continue
    }

    /// RST n: call to the fixed vector encoded in bits 3–5.
    pub(super) fn rst(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = (ins.opcode & 0x38) as u16;
        Flow::Continue
    }

    /// CALL a16. The return address is the PC after the operand.
    pub(super) fn call(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = ins.operand.word();
        Flow::Continue
    }

    pub(super) fn ret(&mut self, bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.regs.pc = self.pop_u16(bus);
        Flow::Continue
    }

    /// RETI: RET and set IME immediately.
    pub(super) fn reti(&mut self, bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        Flow::Continue
    }
}
