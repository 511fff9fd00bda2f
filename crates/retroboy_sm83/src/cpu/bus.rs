/// Abstraction over the memory bus the CPU talks to.
///
/// Reads and writes are total: every 16-bit address yields a byte and every
/// write is accepted (possibly ignored by the backing region). Reads take
/// `&self` because the DMG address space has no read side effects in this
/// core; device collaborators that need to react to accesses poll the I/O
/// window instead.
pub trait Bus {
    fn read8(&self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Little-endian 16-bit read, as used by POP and the stack helpers.
    fn read16(&self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Little-endian 16-bit write, as used by `LD (a16),SP`.
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}
