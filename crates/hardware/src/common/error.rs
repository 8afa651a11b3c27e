//! Error definitions.
//!
//! This module defines the error handling types for the simulator. It provides:
//! 1. **Memory Faults:** The only architectural condition that aborts a cycle.
//! 2. **Loader Errors:** Problems reading or parsing a program image.
//! 3. **Configuration Errors:** Invalid JSON or an inconsistent memory map.
//! 4. **Top-level Errors:** `SimError`, which wraps all of the above for callers.
//!
//! Unknown opcodes and unknown branch conditions are deliberately absent: they
//! are diagnosed through `tracing` and never escape the executor.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessType;

/// Fault raised by a memory primitive.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The access touched bytes outside every provisioned region.
    ///
    /// `addr` is the first byte of the attempted access.
    #[error("{access} out of range at {addr:#x}")]
    OutOfRange {
        /// Address of the first byte of the access.
        addr: u64,
        /// Kind of access that faulted.
        access: AccessType,
    },
}

impl MemoryError {
    /// Returns the faulting address.
    pub const fn addr(&self) -> u64 {
        match self {
            Self::OutOfRange { addr, .. } => *addr,
        }
    }

    /// Re-labels the fault with a different access kind.
    ///
    /// The word primitive only knows whether it was asked to read or write;
    /// the CPU uses this to report instruction fetches as such.
    #[must_use]
    pub const fn with_access(self, access: AccessType) -> Self {
        match self {
            Self::OutOfRange { addr, .. } => Self::OutOfRange { addr, access },
        }
    }
}

/// Errors produced while loading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The image file could not be read.
    #[error("could not read '{path}': {source}")]
    Io {
        /// Path of the image.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line of a hex image is not a 32-bit hexadecimal word.
    #[error("line {line}: '{text}' is not a 32-bit hex word")]
    InvalidWord {
        /// One-based line number.
        line: usize,
        /// Offending text, trimmed.
        text: String,
    },

    /// The image does not fit in the memory region it targets.
    #[error("program image does not fit in memory: {0}")]
    Memory(#[from] MemoryError),
}

/// Errors produced while reading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{path}': {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for [`crate::config::Config`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The memory map lists no regions.
    #[error("memory map has no regions")]
    NoRegions,

    /// A region has a size of zero.
    #[error("memory region '{0}' has zero size")]
    EmptyRegion(String),

    /// A region wraps past the end of the 64-bit address space.
    #[error("memory region '{0}' extends past the end of the address space")]
    RegionOverflow(String),

    /// Two regions share at least one address.
    #[error("memory regions '{first}' and '{second}' overlap")]
    Overlap {
        /// Name of the lower region.
        first: String,
        /// Name of the higher region.
        second: String,
    },

    /// The initial program counter is not a multiple of four.
    #[error("start PC {0:#x} is not word-aligned")]
    MisalignedStart(u64),

    /// The initial program counter is not inside any region.
    #[error("start PC {0:#x} is outside every memory region")]
    StartOutOfRange(u64),
}

/// Top-level simulator error.
#[derive(Debug, Error)]
pub enum SimError {
    /// A memory fault aborted the current cycle.
    #[error("memory fault: {0}")]
    Memory(#[from] MemoryError),

    /// A program image could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
