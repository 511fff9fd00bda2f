//! Instruction descriptors for the dispatch tables.

use std::fmt;

use super::{Bus, Cpu};

/// Immediate operand fetched by the dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    None,
    Byte(u8),
    Word(u16),
}

impl Operand {
    #[inline]
    pub fn byte(self) -> u8 {
        match self {
            Operand::Byte(value) => value,
            Operand::Word(value) => value as u8,
            Operand::None => 0,
        }
    }

    #[inline]
    pub fn word(self) -> u16 {
        match self {
            Operand::Word(value) => value,
            Operand::Byte(value) => value as u16,
            Operand::None => 0,
        }
    }

    /// Two's-complement displacement for JR and the SP-relative forms.
    #[inline]
    pub fn offset(self) -> i8 {
        self.byte() as i8
    }
}

/// What a handler sees: the opcode it was dispatched for and its operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    pub opcode: u8,
    pub operand: Operand,
}

/// Control-flow outcome of a handler, selecting which cycle cost applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// A conditional JR/JP/CALL/RET whose condition was false.
    NotTaken,
}

pub type Handler = fn(&mut Cpu, &mut dyn Bus, Decoded) -> Flow;

/// One entry of an opcode table.
#[derive(Clone, Copy)]
pub struct Instruction {
    pub opcode: u8,
    pub mnemonic: &'static str,
    /// Immediate bytes following the opcode (0, 1 or 2). The dispatcher
    /// fetches exactly this many, which is what advances PC.
    pub operand_len: u8,
    /// Machine cycles when the instruction completes normally (or the
    /// branch is taken).
    pub cycles: u32,
    /// Machine cycles when a conditional branch is not taken. Equal to
    /// `cycles` for everything else.
    pub cycles_not_taken: u32,
    pub handler: Handler,
}

impl Instruction {
    #[inline]
    pub fn is_conditional(&self) -> bool {
        self.cycles != self.cycles_not_taken
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("opcode", &format_args!("0x{:02X}", self.opcode))
            .field("mnemonic", &self.mnemonic)
            .field("operand_len", &self.operand_len)
            .field("cycles", &self.cycles)
            .field("cycles_not_taken", &self.cycles_not_taken)
            .finish_non_exhaustive()
    }
}

/// Table slot. Every one of the 256 entries of both tables is one of these.
#[derive(Clone, Copy, Debug)]
pub enum Slot {
    Op(Instruction),
    /// 0xCB: the next byte indexes the extended table.
    Prefix,
    /// Opcode hole that locks up real hardware.
    Illegal,
    Unimplemented,
}
