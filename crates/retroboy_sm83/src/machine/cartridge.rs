use crate::{CoreError, Result, ROM_CAPACITY};

const TITLE_START: usize = 0x0134;
const TITLE_END: usize = 0x0144;
const CARTRIDGE_TYPE: usize = 0x0147;

/// A validated cartridge image, borrowed from the loader.
///
/// Validation happens up front so that a bad image is reported by `load`
/// rather than surfacing later as strange execution.
#[derive(Clone, Copy, Debug)]
pub struct RomImage<'a> {
    bytes: &'a [u8],
}

impl<'a> RomImage<'a> {
    pub fn new(bytes: &'a [u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(CoreError::EmptyRom);
        }
        if bytes.len() > ROM_CAPACITY {
            return Err(CoreError::RomTooLarge {
                len: bytes.len(),
                capacity: ROM_CAPACITY,
            });
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Game title from the cartridge header, if the image is long enough to
    /// have one. Padding NULs are stripped.
    pub fn title(&self) -> Option<String> {
        let raw = self.bytes.get(TITLE_START..TITLE_END)?;
        let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
        let title = String::from_utf8_lossy(&raw[..end]).trim().to_string();
        (!title.is_empty()).then_some(title)
    }

    /// Cartridge type byte (0x0147). Only informational: bank switching is
    /// not modelled.
    pub fn cartridge_type(&self) -> Option<u8> {
        self.bytes.get(CARTRIDGE_TYPE).copied()
    }
}
