//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for decoding LEGv8 instruction fields
//! from 32-bit instruction encodings. Field names follow the ARMv8 encoding
//! diagrams (`Rd`, `Rn`, `Rm`, `Rt`, `imm12`, `immr`, `imms`, ...).

/// Bit mask for a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit shift of the primary opcode field (bits 21-31).
pub const OPCODE_SHIFT: u32 = 21;
/// Bit mask of the 11-bit primary opcode after shifting.
pub const OPCODE_MASK: u32 = 0x7FF;
/// Bit shift of the high-byte discriminator (bits 24-31).
pub const HIGH_BYTE_SHIFT: u32 = 24;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every method returns the raw, unsigned field value; sign extension of
/// branch and memory offsets is the decoder's job.
pub trait InstructionBits {
    /// Extracts the 11-bit primary opcode (bits 21-31).
    fn opcode(&self) -> u32;

    /// Extracts the high-byte discriminator (bits 24-31).
    ///
    /// Conditional branches are recognised by this byte alone.
    fn high_byte(&self) -> u32;

    /// Extracts the destination / transfer register `Rd` / `Rt` (bits 0-4).
    fn rd(&self) -> usize;

    /// Extracts the first source / base register `Rn` (bits 5-9).
    fn rn(&self) -> usize;

    /// Extracts the second source register `Rm` (bits 16-20).
    fn rm(&self) -> usize;

    /// Extracts the 12-bit unsigned immediate of arithmetic-immediate forms (bits 10-21).
    fn imm12(&self) -> u32;

    /// Extracts the shift-control field (bits 22-23).
    fn shift(&self) -> u32;

    /// Extracts `immr` of the bitfield-move forms (bits 16-21).
    fn immr(&self) -> u32;

    /// Extracts `imms` of the bitfield-move forms (bits 10-15).
    fn imms(&self) -> u32;

    /// Extracts the 16-bit immediate of wide moves (bits 5-20).
    fn imm16(&self) -> u32;

    /// Extracts the half-word lane selector `hw` of wide moves (bits 21-22).
    fn hw(&self) -> u32;

    /// Extracts the 9-bit load/store offset (bits 12-20).
    fn imm9(&self) -> u32;

    /// Extracts the 19-bit conditional branch offset (bits 5-23).
    fn imm19(&self) -> u32;

    /// Extracts the 26-bit unconditional branch offset (bits 0-25).
    fn imm26(&self) -> u32;

    /// Extracts the condition code of `B.cond` (bits 0-3).
    fn cond(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn high_byte(&self) -> u32 {
        self >> HIGH_BYTE_SHIFT
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        (self & REG_MASK) as usize
    }

    #[inline(always)]
    fn rn(&self) -> usize {
        ((self >> 5) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rm(&self) -> usize {
        ((self >> 16) & REG_MASK) as usize
    }

    #[inline(always)]
    fn imm12(&self) -> u32 {
        (self >> 10) & 0xFFF
    }

    #[inline(always)]
    fn shift(&self) -> u32 {
        (self >> 22) & 0x3
    }

    #[inline(always)]
    fn immr(&self) -> u32 {
        (self >> 16) & 0x3F
    }

    #[inline(always)]
    fn imms(&self) -> u32 {
        (self >> 10) & 0x3F
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        (self >> 5) & 0xFFFF
    }

    #[inline(always)]
    fn hw(&self) -> u32 {
        (self >> 21) & 0x3
    }

    #[inline(always)]
    fn imm9(&self) -> u32 {
        (self >> 12) & 0x1FF
    }

    #[inline(always)]
    fn imm19(&self) -> u32 {
        (self >> 5) & 0x7_FFFF
    }

    #[inline(always)]
    fn imm26(&self) -> u32 {
        self & 0x03FF_FFFF
    }

    #[inline(always)]
    fn cond(&self) -> u32 {
        self & 0xF
    }
}

/// Sign extends the low `bits` bits of `val` to a 64-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend.
/// * `bits` - The number of valid bits in `val` (1-64).
#[inline]
pub const fn sign_extend(val: u64, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((val << shift) as i64) >> shift
}
