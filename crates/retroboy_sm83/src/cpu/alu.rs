//! Pure arithmetic/logic helpers.
//!
//! Every function takes operand values (and the current flags where some of
//! them survive the operation) and returns the result together with the new
//! flag set. Nothing here touches the register file directly.

use super::Flags;

/// Operand width for the carry/half-carry computations.
///
/// All arithmetic is done on operands widened to `u32`, so carries out of the
/// top bit are visible instead of being lost to wraparound.
pub trait Width: Copy {
    /// All bits of the operand.
    const MASK: u32;
    /// Bits below the half-carry boundary (bit 3 for bytes, bit 11 for words).
    const HALF_MASK: u32;

    fn widen(self) -> u32;
    fn narrow(value: u32) -> Self;
}

impl Width for u8 {
    const MASK: u32 = 0xFF;
    const HALF_MASK: u32 = 0x0F;

    #[inline]
    fn widen(self) -> u32 {
        self as u32
    }

    #[inline]
    fn narrow(value: u32) -> Self {
        value as u8
    }
}

impl Width for u16 {
    const MASK: u32 = 0xFFFF;
    const HALF_MASK: u32 = 0x0FFF;

    #[inline]
    fn widen(self) -> u32 {
        self as u32
    }

    #[inline]
    fn narrow(value: u32) -> Self {
        value as u16
    }
}

/// Result of an addition or subtraction before it is mapped onto flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carries<W> {
    pub value: W,
    pub half: bool,
    pub carry: bool,
}

/// `a + b + carry_in` with carries out of the half boundary and the top bit.
#[inline]
pub fn add<W: Width>(a: W, b: W, carry_in: bool) -> Carries<W> {
    let cin = carry_in as u32;
    let (a, b) = (a.widen(), b.widen());
    let full = a + b + cin;
    Carries {
        value: W::narrow(full & W::MASK),
        half: (a & W::HALF_MASK) + (b & W::HALF_MASK) + cin > W::HALF_MASK,
        carry: full > W::MASK,
    }
}

/// `a - b - carry_in` with borrows out of the half boundary and the top bit.
#[inline]
pub fn sub<W: Width>(a: W, b: W, carry_in: bool) -> Carries<W> {
    let cin = carry_in as u32;
    let (a, b) = (a.widen(), b.widen());
    let subtrahend = b + cin;
    Carries {
        value: W::narrow(a.wrapping_sub(subtrahend) & W::MASK),
        half: (a & W::HALF_MASK) < (b & W::HALF_MASK) + cin,
        carry: a < subtrahend,
    }
}

/// ADD/ADC A,x.
pub fn add8(a: u8, value: u8, carry_in: bool) -> (u8, Flags) {
    let r = add(a, value, carry_in);
    (r.value, Flags::from_zhnc(r.value == 0, false, r.half, r.carry))
}

/// SUB/SBC A,x.
pub fn sub8(a: u8, value: u8, carry_in: bool) -> (u8, Flags) {
    let r = sub(a, value, carry_in);
    (r.value, Flags::from_zhnc(r.value == 0, true, r.half, r.carry))
}

/// CP A,x: the flags of `A - x`; A itself is not modified.
pub fn cp8(a: u8, value: u8) -> Flags {
    sub8(a, value, false).1
}

pub fn and8(a: u8, value: u8) -> (u8, Flags) {
    let result = a & value;
    (result, Flags::from_zhnc(result == 0, false, true, false))
}

pub fn or8(a: u8, value: u8) -> (u8, Flags) {
    let result = a | value;
    (result, Flags::from_zhnc(result == 0, false, false, false))
}

pub fn xor8(a: u8, value: u8) -> (u8, Flags) {
    let result = a ^ value;
    (result, Flags::from_zhnc(result == 0, false, false, false))
}

/// 8-bit increment used by INC r and INC (HL). C is unaffected.
pub fn inc8(value: u8, flags: Flags) -> (u8, Flags) {
    let r = add(value, 1, false);
    let carry = flags.contains(Flags::C);
    (r.value, Flags::from_zhnc(r.value == 0, false, r.half, carry))
}

/// 8-bit decrement used by DEC r and DEC (HL). C is unaffected.
pub fn dec8(value: u8, flags: Flags) -> (u8, Flags) {
    let r = sub(value, 1, false);
    let carry = flags.contains(Flags::C);
    (r.value, Flags::from_zhnc(r.value == 0, true, r.half, carry))
}

/// ADD HL,rr. Z is unaffected; H is the carry out of bit 11.
pub fn add16(hl: u16, value: u16, flags: Flags) -> (u16, Flags) {
    let r = add(hl, value, false);
    let zero = flags.contains(Flags::Z);
    (r.value, Flags::from_zhnc(zero, false, r.half, r.carry))
}

/// Signed 8-bit immediate added to a 16-bit base (ADD SP,e8 and
/// LD HL,SP+e8).
///
/// Z and N are cleared; H and C come from the unsigned addition of the low
/// byte of `base` and the raw immediate.
pub fn add16_signed(base: u16, imm8: u8) -> (u16, Flags) {
    let low = add(base as u8, imm8, false);
    let offset = imm8 as i8 as i16 as u16;
    (
        base.wrapping_add(offset),
        Flags::from_zhnc(false, false, low.half, low.carry),
    )
}

/// Decimal adjust accumulator after BCD addition/subtraction.
///
/// - After an addition (N=0) the correction is added; a low nibble above 9
///   or H requests 0x06, a value above 0x99 or C requests 0x60.
/// - After a subtraction (N=1) only H and C request a correction, which is
///   subtracted.
///
/// Z follows the adjusted value, H is cleared, N is kept, and C reports
/// whether the 0x60 correction was applied.
pub fn daa(a: u8, flags: Flags) -> (u8, Flags) {
    let subtract = flags.contains(Flags::N);
    let mut adjust: u8 = if flags.contains(Flags::C) { 0x60 } else { 0x00 };
    if flags.contains(Flags::H) {
        adjust |= 0x06;
    }

    let result = if subtract {
        a.wrapping_sub(adjust)
    } else {
        if (a & 0x0F) > 0x09 {
            adjust |= 0x06;
        }
        if a > 0x99 {
            adjust |= 0x60;
        }
        a.wrapping_add(adjust)
    };

    (
        result,
        Flags::from_zhnc(result == 0, subtract, false, adjust >= 0x60),
    )
}

/// Which of the four accumulator rotates to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotate {
    /// RLCA: bit 7 to carry and bit 0.
    LeftCircular,
    /// RRCA: bit 0 to carry and bit 7.
    RightCircular,
    /// RLA: through carry.
    Left,
    /// RRA: through carry.
    Right,
}

/// Unprefixed accumulator rotates. Z, N and H are always cleared.
pub fn rotate_a(a: u8, op: Rotate, flags: Flags) -> (u8, Flags) {
    let carry_in = flags.contains(Flags::C);
    let (result, carry_out) = match op {
        Rotate::LeftCircular => (a.rotate_left(1), a & 0x80 != 0),
        Rotate::RightCircular => (a.rotate_right(1), a & 0x01 != 0),
        Rotate::Left => ((a << 1) | carry_in as u8, a & 0x80 != 0),
        Rotate::Right => ((a >> 1) | ((carry_in as u8) << 7), a & 0x01 != 0),
    };
    (result, Flags::from_zhnc(false, false, false, carry_out))
}
