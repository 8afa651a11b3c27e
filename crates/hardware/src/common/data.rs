//! Memory Access Types.
//!
//! This module defines the classification of memory accesses used throughout the simulator.
//! These types are used for the following:
//! 1. **Fault Reporting:** Naming the kind of access that left the provisioned address range.
//! 2. **Width Selection:** Choosing how the load/store unit synthesizes sub-word transfers.

use std::fmt;

/// Type of memory access operation.
///
/// Used to distinguish between instruction fetches, data loads, and data stores
/// when a memory fault is reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Instruction fetch access.
    ///
    /// Occurs when reading the instruction word at the program counter.
    Fetch,

    /// Data read access.
    ///
    /// Occurs during load instructions and the read half of a read-modify-write store.
    Read,

    /// Data write access.
    ///
    /// Occurs during store instructions when writing data from registers to memory.
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetch => "fetch",
            Self::Read => "read",
            Self::Write => "write",
        };
        f.write_str(name)
    }
}

/// Transfer width of a load or store instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Width {
    /// 8-bit transfer (`LDURB` / `STURB`).
    Byte,
    /// 16-bit transfer (`LDURH` / `STURH`).
    Half,
    /// 64-bit transfer (`LDUR` / `STUR`).
    Double,
}

impl Width {
    /// Returns the number of significant bits moved by this width.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Byte => 8,
            Self::Half => 16,
            Self::Double => 64,
        }
    }

    /// Returns the mnemonic suffix used by the disassembler (`b`, `h`, or empty).
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Byte => "b",
            Self::Half => "h",
            Self::Double => "",
        }
    }
}
