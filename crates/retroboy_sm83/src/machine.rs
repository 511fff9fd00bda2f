mod bus;
mod cartridge;
mod config;
mod gameboy;

pub use bus::{AddressSpace, Region};
pub use cartridge::RomImage;
pub use config::{IoInit, MachineConfig, RomWritePolicy};
pub use gameboy::GameBoy;
