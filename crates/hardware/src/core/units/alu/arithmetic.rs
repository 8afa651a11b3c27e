//! ALU arithmetic operations.
//!
//! Implements 64-bit two's-complement addition and subtraction. Overflow
//! wraps silently: the machine keeps no carry or overflow flag.

use super::AluOp;

/// Executes an integer arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be `Add` or `Sub`).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The wrapped 64-bit result. Returns `0` for non-arithmetic opcodes.
pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}
