//! SM83 CPU core.
//!
//! The CPU owns only its register file and control state. Memory lives
//! behind the [`Bus`] trait and the cycle counter lives in the session
//! ([`crate::GameBoy`]), so a `Cpu` can be driven against any bus in tests.

pub mod alu;
mod bus;
pub mod decode;
mod exec;
mod helpers;
mod init;
mod regs;
mod step;

pub use bus::Bus;
pub use decode::{Decoded, Flow, Instruction, Operand, Slot};
pub use exec::{base_slot, prefixed_slot};
pub use regs::{Flags, Registers};
pub use step::HALTED_STEP_CYCLES;

/// Execution state of the fetch/decode/execute loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CpuState {
    /// About to fetch the next opcode.
    #[default]
    Ready,
    /// HALT or STOP was executed. Each step idles for one machine cycle
    /// until [`Cpu::resume`] is called.
    Halted,
}

/// SM83 CPU: register file plus the control state the instruction set can
/// change directly.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable. Only stored here; interrupt dispatch is the
    /// job of an external interrupt controller.
    pub ime: bool,
    state: CpuState,
}

impl Cpu {
    #[inline]
    pub fn flags(&self) -> Flags {
        self.regs.flags()
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.regs.flags().contains(flag)
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flags, value: bool) {
        let mut flags = self.regs.flags();
        flags.set(flag, value);
        self.regs.set_flags(flags);
    }

    #[inline]
    pub fn state(&self) -> CpuState {
        self.state
    }

    #[inline]
    pub fn is_halted(&self) -> bool {
        self.state == CpuState::Halted
    }

    /// External resume signal (interrupt or joypad wake-up, as delivered by
    /// a collaborator). Has no effect when the CPU is already running.
    pub fn resume(&mut self) {
        if self.state == CpuState::Halted {
            log::debug!("SM83 resumed at PC=0x{:04X}", self.regs.pc);
        }
        self.state = CpuState::Ready;
    }

    pub(crate) fn enter_halt(&mut self) {
        self.state = CpuState::Halted;
    }
}

#[cfg(test)]
mod tests;
