use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors surfaced by the SM83 core.
///
/// None of these are fatal to the host: after an opcode error the session
/// can be reset, inspected, or stepped again (the offending bytes have
/// already been consumed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unimplemented opcode 0x{opcode:02X} at PC=0x{pc:04X} (CB-prefixed: {prefixed})")]
    UnimplementedOpcode { opcode: u8, pc: u16, prefixed: bool },

    /// One of the SM83 opcode holes, which hard-lock real hardware.
    #[error("illegal opcode 0x{opcode:02X} at PC=0x{pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    #[error("ROM image is empty")]
    EmptyRom,

    #[error("ROM image is {len} bytes but only {capacity} bytes of ROM are mapped")]
    RomTooLarge { len: usize, capacity: usize },
}
