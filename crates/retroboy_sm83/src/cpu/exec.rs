mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
mod table;

use super::decode::{Decoded, Flow, Operand, Slot};
use super::{Bus, Cpu};
use crate::{CoreError, Result};

pub use table::{base_slot, prefixed_slot};

impl Cpu {
    /// Fetch, decode and execute the instruction at PC.
    ///
    /// Returns the machine cycles the instruction consumed. PC only moves
    /// through `fetch8`, once for the opcode (twice with the 0xCB prefix)
    /// and once per operand byte the table entry asks for.
    pub(super) fn execute_next(&mut self, bus: &mut dyn Bus) -> Result<u32> {
        let pc = self.regs.pc;
        let opcode = self.fetch8(bus);

        let instruction = match base_slot(opcode) {
            Slot::Op(instruction) => instruction,
            Slot::Prefix => {
                let extended = self.fetch8(bus);
                match prefixed_slot(extended) {
                    Slot::Op(instruction) => instruction,
                    _ => return Err(self.opcode_error(extended, pc, true)),
                }
            }
            Slot::Illegal | Slot::Unimplemented => {
                return Err(self.opcode_error(opcode, pc, false));
            }
        };

        let operand = match instruction.operand_len {
            0 => Operand::None,
            1 => Operand::Byte(self.fetch8(bus)),
            _ => Operand::Word(self.fetch16(bus)),
        };

        log::trace!(
            "PC=0x{pc:04X} {opcode:02X} {mnemonic} {operand:?}",
            opcode = instruction.opcode,
            mnemonic = instruction.mnemonic,
        );

        let decoded = Decoded {
            opcode: instruction.opcode,
            operand,
        };
        let cycles = match (instruction.handler)(self, bus, decoded) {
            Flow::Continue => instruction.cycles,
            Flow::NotTaken => instruction.cycles_not_taken,
        };
        Ok(cycles)
    }

    fn opcode_error(&self, opcode: u8, pc: u16, prefixed: bool) -> CoreError {
        let error = match base_slot(opcode) {
            Slot::Illegal if !prefixed => CoreError::IllegalOpcode { opcode, pc },
            _ => CoreError::UnimplementedOpcode {
                opcode,
                pc,
                prefixed,
            },
        };
        log::error!(
            "SM83 stopped: {error} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        error
    }
}

/// Condition code encoded in bits 3–4 of JR/JP/CALL/RET cc opcodes.
#[inline]
fn condition(opcode: u8) -> u8 {
    (opcode >> 3) & 0x03
}
