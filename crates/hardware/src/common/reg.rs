//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct holding the 64-bit integer registers.
//! It provides:
//! 1. **Storage:** 32 signed 64-bit registers (`X0`-`X31`).
//! 2. **Invariant Enforcement:** `X31` is the zero register; reads yield 0 and writes are dropped.
//! 3. **Observability:** A register dump used by the CLI and by test diagnostics.

use std::fmt;

use super::constants::{NUM_REGS, ZERO_REG};

/// General-purpose register file.
///
/// Register `X31` is hard-wired to zero: the backing slot is never written,
/// so it reads as zero at every point of a cycle, including as an operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i64; NUM_REGS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Index 31 always returns 0.
    ///
    /// # Returns
    ///
    /// The signed 64-bit value stored in the register.
    #[inline]
    pub fn read(&self, idx: usize) -> i64 {
        if idx == ZERO_REG {
            0
        } else {
            self.regs[idx & (NUM_REGS - 1)]
        }
    }

    /// Writes a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to index 31 are ignored.
    /// * `val` - The signed 64-bit value to write.
    #[inline]
    pub fn write(&mut self, idx: usize, val: i64) {
        if idx != ZERO_REG {
            self.regs[idx & (NUM_REGS - 1)] = val;
        }
    }

    /// Returns a copy of all 32 registers, with `X31` reported as zero.
    pub fn snapshot(&self) -> [i64; NUM_REGS] {
        let mut out = self.regs;
        out[ZERO_REG] = 0;
        out
    }
}

impl fmt::Display for RegisterFile {
    /// Dumps the registers two per line in hexadecimal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            writeln!(
                f,
                "X{:<2} = {:#018x}   X{:<2} = {:#018x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
