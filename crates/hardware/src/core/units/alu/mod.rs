//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the executor.
//! All operations work on signed 64-bit register values with
//! two's-complement wraparound.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Eor, Orr
//! - [`shifts`]:     Lsl, Lsr

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical operations (and, exclusive or, inclusive or).
pub mod logic;

/// Shift operations (lsl, lsr).
pub mod shifts;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise exclusive OR.
    Eor,
    /// Bitwise inclusive OR.
    Orr,
    /// Logical shift left; `b` is the shift amount.
    Lsl,
    /// Logical shift right; `b` is the shift amount.
    Lsr,
}

/// Condition flags produced by a flag-setting operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    /// Set when the result is zero.
    pub zero: bool,
    /// Set when the result is negative as a signed 64-bit value.
    pub negative: bool,
}

impl Flags {
    /// Derives the flags from a result: `Z = (r == 0)`, `N = (r < 0)`.
    #[inline]
    pub const fn from_result(result: i64) -> Self {
        Self {
            zero: result == 0,
            negative: result < 0,
        }
    }
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand (the shift amount for shifts)
    ///
    /// # Returns
    ///
    /// The 64-bit result of the operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use legv8_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 42, 8), 50);
    /// assert_eq!(Alu::execute(AluOp::Sub, 0, i64::MIN), i64::MIN);
    /// assert_eq!(Alu::execute(AluOp::Lsl, 1, 4), 0x10);
    /// assert_eq!(Alu::execute(AluOp::Lsr, -1, 60), 0xF);
    /// ```
    pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Eor | AluOp::Orr => logic::execute(op, a, b),
            AluOp::Lsl | AluOp::Lsr => shifts::execute(op, a, b),
        }
    }

    /// Executes an operation and derives the condition flags from its result.
    pub const fn execute_with_flags(op: AluOp, a: i64, b: i64) -> (i64, Flags) {
        let result = Self::execute(op, a, b);
        (result, Flags::from_result(result))
    }
}
