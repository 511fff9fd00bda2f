use typed_builder::TypedBuilder;

/// What happens to CPU writes into the cartridge ROM window (0x0000–0x7FFF).
///
/// Without a memory bank controller there is nothing to latch those writes,
/// so real hardware drops them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RomWritePolicy {
    #[default]
    Ignore,
    /// Store the byte, for harnesses that patch code in place.
    Store,
}

/// Initial contents of the I/O register window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IoInit {
    /// Register values the DMG boot ROM leaves behind.
    #[default]
    PostBoot,
    Zeroed,
}

/// Construction-time settings for a [`crate::GameBoy`] session.
///
/// ```
/// use retroboy_sm83::{GameBoy, MachineConfig, RomWritePolicy};
///
/// let config = MachineConfig::builder()
///     .rom_writes(RomWritePolicy::Store)
///     .build();
/// let gb = GameBoy::with_config(config);
/// assert_eq!(gb.peek(0xFEA0), 0xFF);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, TypedBuilder)]
pub struct MachineConfig {
    #[builder(default)]
    pub rom_writes: RomWritePolicy,
    /// Value read back from the unusable range 0xFEA0–0xFEFF.
    #[builder(default = 0xFF)]
    pub unusable_read: u8,
    #[builder(default)]
    pub io_init: IoInit,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
