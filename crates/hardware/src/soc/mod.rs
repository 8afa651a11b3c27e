//! Memory subsystem.
//!
//! This module organizes the memory side of the simulated machine: the
//! word-granular access trait consumed by the core and the region-based
//! RAM that implements it.

/// Region-based main memory.
pub mod memory;

/// Word memory trait definition.
pub mod traits;

pub use memory::Ram;
pub use traits::WordMemory;
