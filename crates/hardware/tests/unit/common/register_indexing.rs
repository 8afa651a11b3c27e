//! # Register File Tests
//!
//! Verifies general-purpose register storage and the zero register.

use legv8_core::common::{NUM_REGS, RegisterFile, ZERO_REG};
use proptest::prelude::*;

#[test]
fn new_register_file_is_zeroed() {
    let regs = RegisterFile::new();
    assert_eq!(regs.snapshot(), [0; NUM_REGS]);
}

#[test]
fn write_then_read_each_register() {
    let mut regs = RegisterFile::new();
    for i in 0..ZERO_REG {
        regs.write(i, (i as i64 + 1) * -3);
    }
    for i in 0..ZERO_REG {
        assert_eq!(regs.read(i), (i as i64 + 1) * -3);
    }
}

#[test]
fn zero_register_ignores_writes() {
    let mut regs = RegisterFile::new();
    regs.write(ZERO_REG, 0x1234);
    assert_eq!(regs.read(ZERO_REG), 0);
    assert_eq!(regs.snapshot()[ZERO_REG], 0);
}

#[test]
fn display_lists_every_register() {
    let mut regs = RegisterFile::new();
    regs.write(1, 5);
    regs.write(30, -1);
    let text = regs.to_string();
    assert_eq!(text.lines().count(), NUM_REGS / 2);
    assert!(text.contains("X1  = 0x0000000000000005"));
    assert!(text.contains("X30 = 0xffffffffffffffff"));
    assert!(text.contains("X31 = 0x0000000000000000"));
}

proptest! {
    #[test]
    fn zero_register_always_reads_zero(val in any::<i64>()) {
        let mut regs = RegisterFile::new();
        regs.write(ZERO_REG, val);
        prop_assert_eq!(regs.read(ZERO_REG), 0);
    }

    #[test]
    fn writes_do_not_disturb_other_registers(idx in 0usize..31, val in any::<i64>()) {
        let mut regs = RegisterFile::new();
        regs.write(idx, val);
        for other in (0..NUM_REGS).filter(|&o| o != idx) {
            prop_assert_eq!(regs.read(other), 0);
        }
        prop_assert_eq!(regs.read(idx), val);
    }
}
