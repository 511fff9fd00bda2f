//! DMG memory map.
//!
//! Both enums are derived from a `match` over the full `u16` range, so the
//! compiler rejects any gap in coverage.

/// Logical region an address belongs to, as seen by software.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    RomBank0,
    RomBankN,
    VideoRam,
    ExternalRam,
    WorkRam0,
    WorkRam1,
    EchoRam,
    Oam,
    Unusable,
    Io,
    HighRam,
    InterruptEnable,
}

impl Region {
    pub fn of(addr: u16) -> Self {
        match addr {
            0x0000..=0x3FFF => Region::RomBank0,
            0x4000..=0x7FFF => Region::RomBankN,
            0x8000..=0x9FFF => Region::VideoRam,
            0xA000..=0xBFFF => Region::ExternalRam,
            0xC000..=0xCFFF => Region::WorkRam0,
            0xD000..=0xDFFF => Region::WorkRam1,
            0xE000..=0xFDFF => Region::EchoRam,
            0xFE00..=0xFE9F => Region::Oam,
            0xFEA0..=0xFEFF => Region::Unusable,
            0xFF00..=0xFF7F => Region::Io,
            0xFF80..=0xFFFE => Region::HighRam,
            0xFFFF => Region::InterruptEnable,
        }
    }
}

/// Storage cell an address resolves to: backing array plus index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Cell {
    Rom0(usize),
    RomX(usize),
    VideoRam(usize),
    ExternalRam(usize),
    WorkRam0(usize),
    WorkRam1(usize),
    Oam(usize),
    Unusable,
    Io(usize),
    HighRam(usize),
    InterruptEnable,
}

impl Cell {
    pub(super) fn resolve(addr: u16) -> Self {
        let base = |start: u16| (addr - start) as usize;
        match Region::of(addr) {
            Region::RomBank0 => Cell::Rom0(base(0x0000)),
            Region::RomBankN => Cell::RomX(base(0x4000)),
            Region::VideoRam => Cell::VideoRam(base(0x8000)),
            Region::ExternalRam => Cell::ExternalRam(base(0xA000)),
            Region::WorkRam0 => Cell::WorkRam0(base(0xC000)),
            Region::WorkRam1 => Cell::WorkRam1(base(0xD000)),
            // 0xE000–0xFDFF mirrors 0xC000–0xDDFF.
            Region::EchoRam => Cell::resolve(addr - 0x2000),
            Region::Oam => Cell::Oam(base(0xFE00)),
            Region::Unusable => Cell::Unusable,
            Region::Io => Cell::Io(base(0xFF00)),
            Region::HighRam => Cell::HighRam(base(0xFF80)),
            Region::InterruptEnable => Cell::InterruptEnable,
        }
    }
}
