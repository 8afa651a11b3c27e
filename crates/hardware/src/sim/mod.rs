//! Simulation session and program loading.
//!
//! Provides the session object that owns the CPU, its memory and its run
//! signal, plus utilities for loading program images into memory.

/// Hex and raw binary image loading.
pub mod loader;

/// The simulation session.
pub mod simulator;

pub use simulator::Simulator;
