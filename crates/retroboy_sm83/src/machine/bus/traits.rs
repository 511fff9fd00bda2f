use crate::cpu::Bus;

use super::AddressSpace;

impl Bus for AddressSpace {
    #[inline]
    fn read8(&self, addr: u16) -> u8 {
        self.read(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value)
    }
}
