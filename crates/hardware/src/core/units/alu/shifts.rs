//! ALU shift operations.
//!
//! Implements logical shift left (LSL) and logical shift right (LSR).
//! Shift amounts are masked to 6 bits (0-63); LSR shifts in zeros
//! regardless of the sign of the operand.

use super::AluOp;

/// Bit mask for a 64-bit shift amount (6 bits: 0-63).
const SHAMT_MASK: i64 = 0x3F;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - `Lsl` or `Lsr`.
/// * `a`  - Value to shift.
/// * `b`  - Shift amount; only the low 6 bits are used.
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    let shamt = (b & SHAMT_MASK) as u32;
    match op {
        AluOp::Lsl => ((a as u64) << shamt) as i64,
        AluOp::Lsr => ((a as u64) >> shamt) as i64,
        _ => 0,
    }
}
