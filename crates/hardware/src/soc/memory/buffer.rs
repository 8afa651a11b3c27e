//! Memory Region Buffer.
//!
//! This module provides the backing storage for a single provisioned memory
//! region: a named, zero-initialized byte buffer mapped at a base address.
//! All offset arithmetic is checked so that an access can never wrap or
//! index past the end of the buffer.

/// A contiguous, zero-initialized block of simulated memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionBuffer {
    name: String,
    base: u64,
    data: Vec<u8>,
}

impl RegionBuffer {
    /// Creates a new zero-filled region.
    ///
    /// # Arguments
    ///
    /// * `name` - Region name for dumps and diagnostics.
    /// * `base` - Address of the first byte.
    /// * `size` - Size of the region in bytes.
    pub fn new(name: &str, base: u64, size: usize) -> Self {
        Self {
            name: name.to_string(),
            base,
            data: vec![0; size],
        }
    }

    /// Returns the region name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base address.
    pub const fn base(&self) -> u64 {
        self.base
    }

    /// Returns the size of the region in bytes.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the region holds no bytes.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maps `[addr, addr + len)` to a buffer offset if it lies entirely inside the region.
    pub fn offset_of(&self, addr: u64, len: usize) -> Option<usize> {
        let offset = usize::try_from(addr.checked_sub(self.base)?).ok()?;
        let end = offset.checked_add(len)?;
        (end <= self.data.len()).then_some(offset)
    }

    /// Reads `len` bytes starting at `addr`, or `None` if out of range.
    pub fn read_slice(&self, addr: u64, len: usize) -> Option<&[u8]> {
        let offset = self.offset_of(addr, len)?;
        self.data.get(offset..offset + len)
    }

    /// Writes `bytes` starting at `addr`.
    ///
    /// Returns `false` and leaves the region untouched if out of range.
    pub fn write_slice(&mut self, addr: u64, bytes: &[u8]) -> bool {
        let Some(offset) = self.offset_of(addr, bytes.len()) else {
            return false;
        };
        match self.data.get_mut(offset..offset + bytes.len()) {
            Some(dest) => {
                dest.copy_from_slice(bytes);
                true
            }
            None => false,
        }
    }
}
