//! ALU logical operations.

use super::AluOp;

/// Executes a bitwise logical operation over the full 64 bits.
///
/// Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    match op {
        AluOp::And => a & b,
        AluOp::Eor => a ^ b,
        AluOp::Orr => a | b,
        _ => 0,
    }
}
