//! Simulated Main Memory.
//!
//! This module implements the memory seen by the core. It provides:
//! 1. **Buffer:** Backing storage (`RegionBuffer`) for each provisioned region.
//! 2. **Memory:** `Ram`, a set of non-overlapping regions behind the [`WordMemory`] primitive.
//! 3. **Tooling:** Raw image loading and word dumps for the shell.
//!
//! Every access is bounds-checked against the region list; an access that is
//! not entirely inside one region is an out-of-range fault.

/// Region buffer implementation for raw byte storage.
pub mod buffer;

use tracing::debug;

use self::buffer::RegionBuffer;
use crate::common::constants::WORD_BYTES;
use crate::common::data::AccessType;
use crate::common::error::MemoryError;
use crate::config::MemoryConfig;
use crate::soc::traits::WordMemory;

/// Size of one memory word in bytes, as a slice length.
const WORD_LEN: usize = 4;

/// Byte-addressable memory built from one or more regions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ram {
    regions: Vec<RegionBuffer>,
}

impl Ram {
    /// Creates memory from an explicit list of regions.
    pub const fn new(regions: Vec<RegionBuffer>) -> Self {
        Self { regions }
    }

    /// Builds zero-initialized memory for every region in the configuration.
    ///
    /// The configuration is expected to have been validated.
    pub fn from_config(config: &MemoryConfig) -> Self {
        let regions = config
            .regions
            .iter()
            .map(|r| {
                debug!(name = %r.name, base = r.base, size = r.size, "map region");
                RegionBuffer::new(&r.name, r.base, r.size)
            })
            .collect();
        Self::new(regions)
    }

    /// Returns the provisioned regions.
    pub fn regions(&self) -> &[RegionBuffer] {
        &self.regions
    }

    /// Returns the region holding all of `[addr, addr + len)`.
    fn region(&self, addr: u64, len: usize) -> Option<&RegionBuffer> {
        self.regions
            .iter()
            .find(|r| r.offset_of(addr, len).is_some())
    }

    /// Returns the mutable region holding all of `[addr, addr + len)`.
    fn region_mut(&mut self, addr: u64, len: usize) -> Option<&mut RegionBuffer> {
        self.regions
            .iter_mut()
            .find(|r| r.offset_of(addr, len).is_some())
    }

    /// Copies a raw byte image into memory.
    ///
    /// The whole image must fit inside a single region; otherwise nothing is
    /// written and a write fault at `addr` is returned.
    ///
    /// # Arguments
    ///
    /// * `addr` - Address of the first byte.
    /// * `bytes` - The image contents.
    pub fn load_bytes(&mut self, addr: u64, bytes: &[u8]) -> Result<(), MemoryError> {
        let written = self
            .region_mut(addr, bytes.len())
            .is_some_and(|r| r.write_slice(addr, bytes));
        if written {
            Ok(())
        } else {
            Err(MemoryError::OutOfRange {
                addr,
                access: AccessType::Write,
            })
        }
    }

    /// Reads consecutive words from `start` up to and including `end`.
    ///
    /// # Returns
    ///
    /// `(address, word)` pairs in ascending order, or the first fault hit.
    pub fn dump(&self, start: u64, end: u64) -> Result<Vec<(u64, u32)>, MemoryError> {
        let mut words = Vec::new();
        let mut addr = start;
        while addr <= end {
            words.push((addr, self.read_word(addr)?));
            match addr.checked_add(WORD_BYTES) {
                Some(next) => addr = next,
                None => break,
            }
        }
        Ok(words)
    }
}

impl From<&MemoryConfig> for Ram {
    fn from(config: &MemoryConfig) -> Self {
        Self::from_config(config)
    }
}

impl WordMemory for Ram {
    fn read_word(&self, addr: u64) -> Result<u32, MemoryError> {
        let bytes = self
            .region(addr, WORD_LEN)
            .and_then(|r| r.read_slice(addr, WORD_LEN))
            .and_then(|s| <[u8; WORD_LEN]>::try_from(s).ok())
            .ok_or(MemoryError::OutOfRange {
                addr,
                access: AccessType::Read,
            })?;
        Ok(u32::from_le_bytes(bytes))
    }

    fn write_word(&mut self, addr: u64, val: u32) -> Result<(), MemoryError> {
        let written = self
            .region_mut(addr, WORD_LEN)
            .is_some_and(|r| r.write_slice(addr, &val.to_le_bytes()));
        if written {
            Ok(())
        } else {
            Err(MemoryError::OutOfRange {
                addr,
                access: AccessType::Write,
            })
        }
    }
}
