//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and the word memory.
//! It performs the following:
//! 1. **Fetch:** Reads the instruction word at the current PC.
//! 2. **Loads:** Synthesizes byte, halfword and doubleword loads from word reads.
//! 3. **Store Staging:** Builds the word write of a store without performing it.
//! 4. **Store Commit:** Writes the staged word once the instruction has succeeded.

use super::Cpu;
use crate::common::data::{AccessType, Width};
use crate::common::error::MemoryError;
use crate::core::units::lsu::Lsu;
use crate::soc::traits::WordMemory;

/// The word write produced by one store instruction, not yet applied to memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagedStore {
    /// Target address.
    pub addr: u64,
    /// Word to write.
    pub val: u32,
}

impl StagedStore {
    /// Creates a staged write of `val` at `addr`.
    pub const fn new(addr: u64, val: u32) -> Self {
        Self { addr, val }
    }
}

impl Cpu {
    /// Fetches the instruction word at the current PC.
    ///
    /// # Returns
    ///
    /// The raw instruction, or a fault labelled as an instruction fetch.
    pub fn fetch<M: WordMemory + ?Sized>(&self, mem: &M) -> Result<u32, MemoryError> {
        mem.read_word(self.current.pc)
            .map_err(|e| e.with_access(AccessType::Fetch))
    }

    /// Performs a load of the given width.
    ///
    /// # Arguments
    ///
    /// * `mem` - The word memory.
    /// * `addr` - Effective address.
    /// * `width` - Transfer width.
    ///
    /// # Returns
    ///
    /// The 64-bit register value: sign-extended for byte and halfword loads,
    /// the concatenation of the words at `addr` and `addr + 4` for doublewords.
    pub fn load<M: WordMemory + ?Sized>(
        mem: &M,
        addr: u64,
        width: Width,
    ) -> Result<i64, MemoryError> {
        let lo = mem.read_word(addr)?;
        match width {
            Width::Byte | Width::Half => Ok(Lsu::extend(lo, width)),
            Width::Double => {
                let hi = mem.read_word(Lsu::high_word_address(addr))?;
                Ok(Lsu::join(lo, hi))
            }
        }
    }

    /// Builds the word write for a store without touching memory.
    ///
    /// Every store writes exactly one word at `addr`. Byte and halfword
    /// stores read the existing word so that the bytes outside the stored
    /// lane are preserved; doubleword stores write the low 32 bits of the
    /// register.
    ///
    /// # Arguments
    ///
    /// * `mem` - The word memory.
    /// * `addr` - Effective address.
    /// * `value` - Source register value.
    /// * `width` - Transfer width.
    pub fn stage_store<M: WordMemory + ?Sized>(
        mem: &M,
        addr: u64,
        value: i64,
        width: Width,
    ) -> Result<StagedStore, MemoryError> {
        match width {
            Width::Byte | Width::Half => {
                let word = mem
                    .read_word(addr)
                    .map_err(|e| e.with_access(AccessType::Write))?;
                Ok(StagedStore::new(addr, Lsu::splice(word, value, width)))
            }
            Width::Double => Ok(StagedStore::new(addr, value as u32)),
        }
    }

    /// Applies a staged store.
    pub fn apply_store<M: WordMemory + ?Sized>(
        mem: &mut M,
        store: StagedStore,
    ) -> Result<(), MemoryError> {
        mem.write_word(store.addr, store.val)
    }
}
