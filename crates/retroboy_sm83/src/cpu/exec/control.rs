use super::condition;
use crate::cpu::{Bus, Cpu, Decoded, Flags, Flow};

impl Cpu {
    #[inline]
    fn cc_condition(&self, cc: u8) -> bool {
        match cc {
            0 => !self.flag(Flags::Z), // NZ
            1 => self.flag(Flags::Z),  // Z
            2 => !self.flag(Flags::C), // NC
            _ => self.flag(Flags::C),  // C
        }
    }

    /// JR e8. The displacement is relative to the address following the
    /// operand, which is where PC already points.
    pub(super) fn jr(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        let offset = ins.operand.offset() as i16 as u16;
        self.regs.pc = self.regs.pc.wrapping_add(offset);
        Flow::Continue
    }

    pub(super) fn jr_cc(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        if self.cc_condition(condition(ins.opcode)) {
            self.jr(bus, ins)
        } else {
            Flow::NotTaken
        }
    }

    pub(super) fn jp(&mut self, _bus: &mut dyn Bus, ins: Decoded) -> Flow {
        self.regs.pc = ins.operand.word();
        Flow::Continue
    }

    pub(super) fn jp_cc(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        if self.cc_condition(condition(ins.opcode)) {
            self.jp(bus, ins)
        } else {
            Flow::NotTaken
        }
    }

    /// JP HL (often written JP (HL)); no memory access.
    pub(super) fn jp_hl(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.regs.pc = self.regs.hl();
        Flow::Continue
    }

    pub(super) fn call_cc(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        if self.cc_condition(condition(ins.opcode)) {
            self.call(bus, ins)
        } else {
            Flow::NotTaken
        }
    }

    pub(super) fn ret_cc(&mut self, bus: &mut dyn Bus, ins: Decoded) -> Flow {
        if self.cc_condition(condition(ins.opcode)) {
            self.ret(bus, ins)
        } else {
            Flow::NotTaken
        }
    }
}
