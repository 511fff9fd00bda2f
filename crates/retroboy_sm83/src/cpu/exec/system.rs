use crate::cpu::{Bus, Cpu, Decoded, Flow};

impl Cpu {
    pub(super) fn nop(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        Flow::Continue
    }

    /// HALT: stop fetching until a collaborator delivers the resume signal.
    pub(super) fn halt(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        log::debug!("SM83 halted at PC=0x{:04X}", self.regs.pc);
        self.enter_halt();
        Flow::Continue
    }

    /// STOP. The padding byte is fetched as the operand, so PC ends up past
    /// it. Without a joypad or speed-switch model this behaves like HALT.
    pub(super) fn stop(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        log::debug!("SM83 stopped at PC=0x{:04X}", self.regs.pc);
        self.enter_halt();
        Flow::Continue
    }

    pub(super) fn di(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.ime = false;
        Flow::Continue
    }

    // Real hardware enables IME one instruction late; without interrupt
    // dispatch in this core the delay is unobservable.
    pub(super) fn ei(&mut self, _bus: &mut dyn Bus, _ins: Decoded) -> Flow {
        self.ime = true;
        Flow::Continue
    }
}
