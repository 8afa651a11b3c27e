//! Common utilities and types used throughout the LEGv8 simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Constants:** Register file size, zero register index, instruction and word widths.
//! 2. **Memory Access:** Access kinds and transfer widths for loads and stores.
//! 3. **Error Handling:** Memory faults, loader errors, configuration errors.
//! 4. **Register Management:** The general-purpose register file with `XZR` semantics.

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type and transfer width definitions.
pub mod data;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{INSTRUCTION_SIZE, NUM_REGS, ZERO_REG};
pub use data::{AccessType, Width};
pub use error::{ConfigError, LoadError, MemoryError, SimError};
pub use reg::RegisterFile;
