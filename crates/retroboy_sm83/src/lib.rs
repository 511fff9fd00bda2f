pub mod cpu;
mod error;
pub mod machine;

pub use cpu::{Bus, Cpu, CpuState, Flags, Registers};
pub use error::{CoreError, Result};
pub use machine::{AddressSpace, GameBoy, IoInit, MachineConfig, RomWritePolicy};

/// Entry point address the DMG boot ROM hands control to.
pub const ENTRY_POINT: u16 = 0x0100;
/// Combined size of the two cartridge ROM regions (0x0000–0x7FFF).
pub const ROM_CAPACITY: usize = 0x8000;
