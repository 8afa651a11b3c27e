//! Architectural Processor State.
//!
//! This module defines the record that a cycle reads from and writes to. It provides:
//! 1. **Storage:** Register file, program counter, and the Zero / Negative flags.
//! 2. **Flag Updates:** The single flag rule used by every flag-setting instruction.
//! 3. **Observability:** A `Display` dump of the whole record.

use std::fmt;

use crate::common::reg::RegisterFile;
use crate::core::units::alu::Flags;

/// Architectural state of the processor.
///
/// The CPU holds two copies: the *current* state, which is read-only for the
/// duration of a cycle, and the *next* state, which receives every effect of
/// the cycle and replaces the current state on commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArchState {
    /// General-purpose registers `X0`-`X31`.
    pub regs: RegisterFile,
    /// Address of the next instruction to fetch.
    pub pc: u64,
    /// Zero flag.
    pub flag_z: bool,
    /// Negative flag.
    pub flag_n: bool,
}

impl ArchState {
    /// Creates a zeroed state with the given initial program counter.
    pub const fn new(pc: u64) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc,
            flag_z: false,
            flag_n: false,
        }
    }

    /// Returns the flags as a [`Flags`] pair.
    pub const fn flags(&self) -> Flags {
        Flags {
            zero: self.flag_z,
            negative: self.flag_n,
        }
    }

    /// Overwrites both flags.
    pub const fn set_flags(&mut self, flags: Flags) {
        self.flag_z = flags.zero;
        self.flag_n = flags.negative;
    }
}

impl fmt::Display for ArchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PC       = {:#018x}", self.pc)?;
        writeln!(
            f,
            "FLAGS    = Z:{} N:{}",
            u8::from(self.flag_z),
            u8::from(self.flag_n)
        )?;
        write!(f, "{}", self.regs)
    }
}
