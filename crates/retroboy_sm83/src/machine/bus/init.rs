use super::AddressSpace;

impl AddressSpace {
    /// Initialize I/O registers to match the DMG power-on state the boot
    /// ROM leaves behind at 0x0100 (Pan Docs, "Power Up Sequence").
    ///
    /// These are plain bytes here; device collaborators give them meaning.
    pub(super) fn apply_dmg_post_boot_io_state(&mut self) {
        const POST_BOOT: &[(u16, u8)] = &[
            // Joypad.
            (0xFF00, 0xCF),
            // Serial.
            (0xFF01, 0x00),
            (0xFF02, 0x7E),
            // Divider / timer.
            (0xFF04, 0xAB),
            (0xFF05, 0x00),
            (0xFF06, 0x00),
            (0xFF07, 0xF8),
            // IF: upper 3 bits read as 1, VBlank requested.
            (0xFF0F, 0xE1),
            // Sound.
            (0xFF10, 0x80),
            (0xFF11, 0xBF),
            (0xFF12, 0xF3),
            (0xFF13, 0xFF),
            (0xFF14, 0xBF),
            (0xFF16, 0x3F),
            (0xFF17, 0x00),
            (0xFF18, 0xFF),
            (0xFF19, 0xBF),
            (0xFF1A, 0x7F),
            (0xFF1B, 0xFF),
            (0xFF1C, 0x9F),
            (0xFF1D, 0xFF),
            (0xFF1E, 0xBF),
            (0xFF20, 0xFF),
            (0xFF21, 0x00),
            (0xFF22, 0x00),
            (0xFF23, 0xBF),
            (0xFF24, 0x77),
            (0xFF25, 0xF3),
            (0xFF26, 0xF1),
            // PPU.
            (0xFF40, 0x91), // LCDC
            (0xFF41, 0x85), // STAT
            (0xFF42, 0x00), // SCY
            (0xFF43, 0x00), // SCX
            (0xFF44, 0x00), // LY
            (0xFF45, 0x00), // LYC
            (0xFF46, 0xFF), // DMA
            (0xFF47, 0xFC), // BGP
            // OBP0/OBP1 are officially uninitialized; they stay at 0.
            (0xFF4A, 0x00), // WY
            (0xFF4B, 0x00), // WX
        ];

        for &(addr, value) in POST_BOOT {
            self.write(addr, value);
        }
        self.ie = 0x00;
    }
}
