use anyhow::{Context, Result};
use retroboy_sm83::{CpuState, GameBoy};

/// Default instruction budget when none is given on the command line.
pub const DEFAULT_INSTRUCTIONS: usize = 1_000_000;

/// Where a headless run ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub instructions: usize,
    pub cycles: u64,
    pub pc: u16,
    pub state: CpuState,
}

/// Load `rom_data` and execute up to `instructions` instructions.
///
/// Nothing outside the core can wake a halted CPU here, so a HALT or STOP
/// ends the run early. Opcode errors are returned with the PC they occurred
/// at.
pub fn run(rom_data: &[u8], instructions: usize) -> Result<RunSummary> {
    let mut gb = GameBoy::new();
    gb.load(rom_data).context("failed to load ROM image")?;

    let mut executed = 0;
    while executed < instructions {
        gb.step()
            .with_context(|| format!("execution stopped after {executed} instructions"))?;
        executed += 1;
        if gb.state() == CpuState::Halted {
            log::info!("CPU halted at PC=0x{:04X}", gb.pc());
            break;
        }
    }

    Ok(RunSummary {
        instructions: executed,
        cycles: gb.cycles(),
        pc: gb.pc(),
        state: gb.state(),
    })
}
