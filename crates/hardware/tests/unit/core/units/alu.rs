//! # ALU Tests
//!
//! Deterministic edge cases for every ALU operation plus property tests for
//! the flag rule shared by all flag-setting instructions.

use legv8_core::core::units::alu::{Alu, AluOp, Flags};
use proptest::prelude::*;

// ─── Constants ───────────────────────────────────────────────────────────────

const NEG1: i64 = -1;
const ALTERNATING_A: i64 = 0xAAAA_AAAA_AAAA_AAAA_u64 as i64;
const ALTERNATING_5: i64 = 0x5555_5555_5555_5555;

// ═════════════════════════════════════════════════════════════════════════════
//  ADD / SUB
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn add_identity_and_basic() {
    assert_eq!(Alu::execute(AluOp::Add, 42, 0), 42);
    assert_eq!(Alu::execute(AluOp::Add, 100, 200), 300);
    assert_eq!(Alu::execute(AluOp::Add, -5, -3), -8);
}

#[test]
fn add_wraps_at_signed_boundary() {
    assert_eq!(Alu::execute(AluOp::Add, i64::MAX, 1), i64::MIN);
    assert_eq!(Alu::execute(AluOp::Add, i64::MIN, NEG1), i64::MAX);
}

#[test]
fn sub_basic_and_wrapping() {
    assert_eq!(Alu::execute(AluOp::Sub, 5, 5), 0);
    assert_eq!(Alu::execute(AluOp::Sub, 0, 1), NEG1);
    assert_eq!(Alu::execute(AluOp::Sub, i64::MIN, 1), i64::MAX);
}

#[test]
fn zero_minus_min_is_min_and_negative() {
    let (result, flags) = Alu::execute_with_flags(AluOp::Sub, 0, i64::MIN);
    assert_eq!(result, i64::MIN);
    assert_eq!(
        flags,
        Flags {
            zero: false,
            negative: true
        }
    );
}

// ═════════════════════════════════════════════════════════════════════════════
//  AND / EOR / ORR
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn logic_on_alternating_patterns() {
    assert_eq!(Alu::execute(AluOp::And, ALTERNATING_A, ALTERNATING_5), 0);
    assert_eq!(Alu::execute(AluOp::Orr, ALTERNATING_A, ALTERNATING_5), NEG1);
    assert_eq!(Alu::execute(AluOp::Eor, ALTERNATING_A, ALTERNATING_5), NEG1);
    assert_eq!(Alu::execute(AluOp::Eor, ALTERNATING_A, ALTERNATING_A), 0);
}

#[test]
fn and_flags_follow_result() {
    let (_, flags) = Alu::execute_with_flags(AluOp::And, ALTERNATING_A, ALTERNATING_5);
    assert!(flags.zero);
    assert!(!flags.negative);
    let (_, flags) = Alu::execute_with_flags(AluOp::And, NEG1, i64::MIN);
    assert!(!flags.zero);
    assert!(flags.negative);
}

// ═════════════════════════════════════════════════════════════════════════════
//  LSL / LSR
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn lsl_moves_bits_into_sign_position() {
    assert_eq!(Alu::execute(AluOp::Lsl, 1, 63), i64::MIN);
    assert_eq!(Alu::execute(AluOp::Lsl, 0x3, 62), i64::MIN | (1 << 62));
}

#[test]
fn lsr_is_logical_not_arithmetic() {
    assert_eq!(Alu::execute(AluOp::Lsr, NEG1, 1), i64::MAX);
    assert_eq!(Alu::execute(AluOp::Lsr, i64::MIN, 63), 1);
}

#[test]
fn shift_amount_uses_low_six_bits() {
    assert_eq!(Alu::execute(AluOp::Lsl, 1, 64), 1);
    assert_eq!(Alu::execute(AluOp::Lsr, 8, 65), 4);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Flag rule
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn flags_follow_signed_result(op_idx in 0usize..7, a in any::<i64>(), b in any::<i64>()) {
        let op = [
            AluOp::Add,
            AluOp::Sub,
            AluOp::And,
            AluOp::Eor,
            AluOp::Orr,
            AluOp::Lsl,
            AluOp::Lsr,
        ][op_idx];
        let (result, flags) = Alu::execute_with_flags(op, a, b);
        prop_assert_eq!(result, Alu::execute(op, a, b));
        prop_assert_eq!(flags.zero, result == 0);
        prop_assert_eq!(flags.negative, result < 0);
    }

    #[test]
    fn add_and_sub_are_inverse(a in any::<i64>(), b in any::<i64>()) {
        let sum = Alu::execute(AluOp::Add, a, b);
        prop_assert_eq!(Alu::execute(AluOp::Sub, sum, b), a);
    }
}
