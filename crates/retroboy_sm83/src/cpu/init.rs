use super::{Cpu, CpuState, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// CPU in the state the DMG boot ROM hands over at the cartridge entry
    /// point: documented register values, IME clear, running.
    pub fn new() -> Self {
        Self {
            regs: Registers::power_on(),
            ime: false,
            state: CpuState::Ready,
        }
    }

    /// Reset the CPU to its power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
