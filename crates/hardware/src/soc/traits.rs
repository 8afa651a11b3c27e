//! Word memory trait.
//!
//! This module defines the only interface through which the core touches memory.
//! It provides:
//! 1. **Access:** Read and write of one 32-bit word at a 64-bit byte address.
//! 2. **Faults:** Out-of-range accesses return a [`MemoryError`] instead of panicking.
//!
//! The memory has no notion of access width; byte, halfword and doubleword
//! transfers are synthesized by the load/store unit on top of these two calls.
//! Words are little-endian and need not be aligned.

use crate::common::error::MemoryError;

/// Word-granular memory primitive consumed by the CPU.
pub trait WordMemory {
    /// Reads the 32-bit little-endian word whose first byte is at `addr`.
    ///
    /// Returns `MemoryError::OutOfRange` with `AccessType::Read` if any of the
    /// four bytes is outside the provisioned address range.
    fn read_word(&self, addr: u64) -> Result<u32, MemoryError>;

    /// Writes a 32-bit little-endian word whose first byte is at `addr`.
    ///
    /// Returns `MemoryError::OutOfRange` with `AccessType::Write` if any of the
    /// four bytes is outside the provisioned address range; nothing is written.
    fn write_word(&mut self, addr: u64, val: u32) -> Result<(), MemoryError>;
}
