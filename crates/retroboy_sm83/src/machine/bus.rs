use super::cartridge::RomImage;
use super::config::{IoInit, MachineConfig, RomWritePolicy};

mod init;
mod map;
mod traits;

pub use map::Region;
use map::Cell;

const ROM_BANK_SIZE: usize = 0x4000;
const VRAM_SIZE: usize = 0x2000;
const EXTERNAL_RAM_SIZE: usize = 0x2000;
const WRAM_BANK_SIZE: usize = 0x1000;
const OAM_SIZE: usize = 0xA0;
pub(crate) const IO_SIZE: usize = 0x80;
const HRAM_SIZE: usize = 0x7F;

/// The DMG's 64 KiB address space.
///
/// Each region has its own backing array. Echo RAM has none: its addresses
/// are translated onto work RAM, so both views always agree.
#[derive(Clone)]
pub struct AddressSpace {
    rom0: [u8; ROM_BANK_SIZE],
    romx: [u8; ROM_BANK_SIZE],
    vram: [u8; VRAM_SIZE],
    external_ram: [u8; EXTERNAL_RAM_SIZE],
    wram0: [u8; WRAM_BANK_SIZE],
    wram1: [u8; WRAM_BANK_SIZE],
    oam: [u8; OAM_SIZE],
    io: [u8; IO_SIZE],
    hram: [u8; HRAM_SIZE],
    ie: u8,
    rom_writes: RomWritePolicy,
    unusable_read: u8,
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new(MachineConfig::default())
    }
}

impl AddressSpace {
    pub fn new(config: MachineConfig) -> Self {
        let mut space = Self {
            rom0: [0; ROM_BANK_SIZE],
            romx: [0; ROM_BANK_SIZE],
            vram: [0; VRAM_SIZE],
            external_ram: [0; EXTERNAL_RAM_SIZE],
            wram0: [0; WRAM_BANK_SIZE],
            wram1: [0; WRAM_BANK_SIZE],
            oam: [0; OAM_SIZE],
            io: [0; IO_SIZE],
            hram: [0; HRAM_SIZE],
            ie: 0,
            rom_writes: config.rom_writes,
            unusable_read: config.unusable_read,
        };
        if config.io_init == IoInit::PostBoot {
            space.apply_dmg_post_boot_io_state();
        }
        space
    }

    /// Read the byte at `addr`. Total over the whole 16-bit range.
    pub fn read(&self, addr: u16) -> u8 {
        match Cell::resolve(addr) {
            Cell::Rom0(i) => self.rom0[i],
            Cell::RomX(i) => self.romx[i],
            Cell::VideoRam(i) => self.vram[i],
            Cell::ExternalRam(i) => self.external_ram[i],
            Cell::WorkRam0(i) => self.wram0[i],
            Cell::WorkRam1(i) => self.wram1[i],
            Cell::Oam(i) => self.oam[i],
            Cell::Unusable => self.unusable_read,
            Cell::Io(i) => self.io[i],
            Cell::HighRam(i) => self.hram[i],
            Cell::InterruptEnable => self.ie,
        }
    }

    /// Write `value` to `addr`. Writes to ROM follow the configured
    /// [`RomWritePolicy`]; writes to the unusable range are dropped.
    pub fn write(&mut self, addr: u16, value: u8) {
        match Cell::resolve(addr) {
            Cell::Rom0(i) => self.write_rom(addr, i, value),
            Cell::RomX(i) => self.write_rom(addr, ROM_BANK_SIZE + i, value),
            Cell::VideoRam(i) => self.vram[i] = value,
            Cell::ExternalRam(i) => self.external_ram[i] = value,
            Cell::WorkRam0(i) => self.wram0[i] = value,
            Cell::WorkRam1(i) => self.wram1[i] = value,
            Cell::Oam(i) => self.oam[i] = value,
            Cell::Unusable => {}
            Cell::Io(i) => self.io[i] = value,
            Cell::HighRam(i) => self.hram[i] = value,
            Cell::InterruptEnable => self.ie = value,
        }
    }

    fn write_rom(&mut self, addr: u16, index: usize, value: u8) {
        match self.rom_writes {
            RomWritePolicy::Ignore => {
                log::trace!("ignored ROM write 0x{value:02X} to 0x{addr:04X}");
            }
            RomWritePolicy::Store => {
                if index < ROM_BANK_SIZE {
                    self.rom0[index] = value;
                } else {
                    self.romx[index - ROM_BANK_SIZE] = value;
                }
            }
        }
    }

    /// Copy a cartridge image into the ROM regions starting at 0x0000.
    ///
    /// Any bytes left over from a previous image are cleared.
    pub fn load_rom(&mut self, image: &RomImage<'_>) {
        let bytes = image.bytes();
        let (bank0, bankx) = bytes.split_at(bytes.len().min(ROM_BANK_SIZE));

        self.rom0.fill(0);
        self.romx.fill(0);
        self.rom0[..bank0.len()].copy_from_slice(bank0);
        self.romx[..bankx.len()].copy_from_slice(bankx);
    }

    /// The I/O register window 0xFF00–0xFF7F, for device collaborators that
    /// poll register state.
    #[inline]
    pub fn io_registers(&self) -> &[u8; IO_SIZE] {
        &self.io
    }

    /// IE register (0xFFFF).
    #[inline]
    pub fn interrupt_enable(&self) -> u8 {
        self.ie
    }
}
