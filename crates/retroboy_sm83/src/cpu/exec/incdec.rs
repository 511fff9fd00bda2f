use crate::cpu::alu;
use crate::cpu::{Bus, Cpu, Decoded, Flow};

impl Cpu {
    /// INC r and INC (HL). The (HL) form is a read followed by a write
    /// through the bus.
    pub(super) fn inc8(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let reg = ins.opcode >> 3;
        let value = self.read_reg8(bus, reg);
        let (result, flags) = alu::inc8(value, self.flags());
        self.write_reg8(bus, reg, result);
        self.regs.set_flags(flags);
        Flow::Continue
    }

    /// DEC r and DEC (HL).
    pub(super) fn dec8(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let reg = ins.opcode >> 3;
        let value = self.read_reg8(bus, reg);
        let (result, flags) = alu::dec8(value, self.flags());
        self.write_reg8(bus, reg, result);
        self.regs.set_flags(flags);
        Flow::Continue
    }

    /// INC rr. No flags are affected.
    pub(super) fn inc16(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let index = ins.opcode >> 4;
        let value = self.read_rr(index).wrapping_add(1);
        self.write_rr(index, value);
        Flow::Continue
    }

    /// DEC rr. No flags are affected.
    pub(super) fn dec16(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let index = ins.opcode >> 4;
        let value = self.read_rr(index).wrapping_sub(1);
        self.write_rr(index, value);
        Flow::Continue
    }
}
