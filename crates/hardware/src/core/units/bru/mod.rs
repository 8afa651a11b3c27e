//! Branch Resolution Unit (BRU).
//!
//! Computes branch targets and resolves conditional branches against the
//! flags of the pre-cycle state. Branches never modify the flags themselves.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::isa::cond::Condition;

/// Result of resolving a `B.cond`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CondOutcome {
    /// The condition held; control moves to `target`.
    Taken {
        /// Branch target address.
        target: u64,
    },
    /// The condition did not hold; control falls through to `next`.
    NotTaken {
        /// Address of the following instruction.
        next: u64,
    },
    /// The condition code is not modeled; treated as not taken.
    Unrecognized {
        /// The raw 4-bit condition code.
        code: u32,
        /// Address of the following instruction.
        next: u64,
    },
}

impl CondOutcome {
    /// Returns the address the program counter moves to.
    pub const fn next_pc(self) -> u64 {
        match self {
            Self::Taken { target } => target,
            Self::NotTaken { next } | Self::Unrecognized { next, .. } => next,
        }
    }
}

/// Branch Resolution Unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Computes a PC-relative branch target.
    ///
    /// Wraps on overflow of the 64-bit address space.
    #[inline]
    pub const fn target(pc: u64, offset: i64) -> u64 {
        pc.wrapping_add_signed(offset)
    }

    /// Returns the address of the instruction after `pc`.
    #[inline]
    pub const fn fallthrough(pc: u64) -> u64 {
        pc.wrapping_add(INSTRUCTION_SIZE)
    }

    /// Resolves a conditional branch.
    ///
    /// # Arguments
    ///
    /// * `pc`       - Address of the branch instruction.
    /// * `code`     - Raw 4-bit condition field.
    /// * `offset`   - Sign-extended byte offset.
    /// * `zero`     - Current Zero flag.
    /// * `negative` - Current Negative flag.
    pub const fn resolve(pc: u64, code: u32, offset: i64, zero: bool, negative: bool) -> CondOutcome {
        let next = Self::fallthrough(pc);
        match Condition::from_code(code) {
            Some(cond) if cond.holds(zero, negative) => CondOutcome::Taken {
                target: Self::target(pc, offset),
            },
            Some(_) => CondOutcome::NotTaken { next },
            None => CondOutcome::Unrecognized { code, next },
        }
    }
}
