use crate::cpu::{Cpu, CpuState, Flags, Registers};
use crate::Result;

use super::bus::{AddressSpace, IO_SIZE};
use super::cartridge::RomImage;
use super::config::MachineConfig;

/// One emulation session.
///
/// Bundles the CPU, the address space it executes against, and the running
/// machine-cycle counter. Sessions share nothing, so several can run side by
/// side; a host that drives one session from several threads must put the
/// whole `GameBoy` behind a single lock.
pub struct GameBoy {
    cpu: Cpu,
    bus: AddressSpace,
    cycles: u64,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            cpu: Cpu::new(),
            bus: AddressSpace::new(config),
            cycles: 0,
        }
    }

    /// Load a ROM image into the cartridge ROM area (0x0000–0x7FFF).
    ///
    /// Empty and oversized images are rejected before anything is copied.
    /// PC is not touched; it already points at the 0x0100 entry point after
    /// power-on or [`GameBoy::reset`].
    pub fn load(&mut self, image: &[u8]) -> Result<()> {
        let image = RomImage::new(image)?;
        log::debug!(
            "loading {} byte ROM (title {:?}, cartridge type {:?})",
            image.bytes().len(),
            image.title(),
            image.cartridge_type(),
        );
        self.bus.load_rom(&image);
        Ok(())
    }

    /// Execute one instruction (or one idle cycle while halted) and return
    /// the machine cycles it took.
    pub fn step(&mut self) -> Result<u32> {
        let taken = self.cpu.step(&mut self.bus)?;
        self.cycles = self.cycles.saturating_add(taken as u64);
        Ok(taken)
    }

    /// Step up to `instructions` times, stopping at the first error.
    ///
    /// Returns the machine cycles consumed by this call.
    pub fn run(&mut self, instructions: usize) -> Result<u64> {
        let start = self.cycles;
        for _ in 0..instructions {
            self.step()?;
        }
        Ok(self.cycles - start)
    }

    /// Deliver the external wake-up signal to a halted CPU.
    pub fn resume(&mut self) {
        self.cpu.resume();
    }

    /// Put the CPU back into its power-on state. Memory contents and the
    /// cycle counter are kept.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Elapsed machine cycles since the session started or the last
    /// [`GameBoy::reset_cycles`].
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn reset_cycles(&mut self) {
        self.cycles = 0;
    }

    #[inline]
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    #[inline]
    pub fn registers(&self) -> &Registers {
        &self.cpu.regs
    }

    /// Direct register access for debuggers and test harnesses.
    #[inline]
    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.cpu.regs
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.cpu.regs.pc
    }

    #[inline]
    pub fn sp(&self) -> u16 {
        self.cpu.regs.sp
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.cpu.flags()
    }

    #[inline]
    pub fn flag(&self, flag: Flags) -> bool {
        self.cpu.flag(flag)
    }

    #[inline]
    pub fn state(&self) -> CpuState {
        self.cpu.state()
    }

    /// Read memory through the same resolution the CPU uses. Never has side
    /// effects.
    #[inline]
    pub fn peek(&self, addr: u16) -> u8 {
        self.bus.read(addr)
    }

    /// Write memory through the same resolution the CPU uses.
    #[inline]
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.bus.write(addr, value);
    }

    #[inline]
    pub fn address_space(&self) -> &AddressSpace {
        &self.bus
    }

    /// Mutable bus access for device collaborators (timer, joypad,
    /// interrupt controller) that update the I/O window.
    #[inline]
    pub fn address_space_mut(&mut self) -> &mut AddressSpace {
        &mut self.bus
    }

    #[inline]
    pub fn io_registers(&self) -> &[u8; IO_SIZE] {
        self.bus.io_registers()
    }

    #[inline]
    pub fn interrupt_enable(&self) -> u8 {
        self.bus.interrupt_enable()
    }
}
