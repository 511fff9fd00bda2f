use super::{Bus, Cpu, CpuState};
use crate::Result;

/// Machine cycles consumed by one step while halted.
pub const HALTED_STEP_CYCLES: u32 = 1;

impl Cpu {
    /// Execute a single instruction and return the machine cycles taken.
    ///
    /// While halted no opcode is fetched; the CPU idles for
    /// [`HALTED_STEP_CYCLES`] and PC stays where HALT left it.
    ///
    /// An unimplemented or illegal opcode is returned as an error and no
    /// cycles are charged. The opcode (and operand bytes, for the prefix)
    /// have already been consumed, so stepping again continues as if it had
    /// been a NOP.
    pub fn step(&mut self, bus: &mut dyn Bus) -> Result<u32> {
        match self.state {
            CpuState::Halted => Ok(HALTED_STEP_CYCLES),
            CpuState::Ready => self.execute_next(bus),
        }
    }
}
