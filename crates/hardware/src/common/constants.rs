//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Register Constants:** Register file size and the hard-wired zero register index.
//! 2. **Instruction Constants:** Instruction width and the sequential PC increment.
//! 3. **Memory Constants:** Width of the word-granular memory primitive.

/// Number of architectural general-purpose registers (`X0`-`X31`).
pub const NUM_REGS: usize = 32;

/// Index of the zero register `XZR`.
///
/// Reads always return zero and writes are discarded.
pub const ZERO_REG: usize = 31;

/// Size of an instruction in bytes. Every instruction is one 32-bit word.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Width of the memory access primitive in bytes.
pub const WORD_BYTES: u64 = 4;

/// Number of bits in a memory word.
pub const WORD_BITS: u32 = 32;
