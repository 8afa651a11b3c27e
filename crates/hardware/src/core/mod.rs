//! Core processor implementation.
//!
//! This module contains the CPU implementation: the architectural state
//! record, the per-cycle execution engine, and the stateless functional
//! units it drives.

/// Architecture-specific components (state record).
pub mod arch;

/// CPU core implementation and execution orchestration.
pub mod cpu;

/// Execution units (ALU, branch resolution, load/store).
pub mod units;

pub use self::cpu::Cpu;
