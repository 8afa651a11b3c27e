//! LEGv8 architecture-specific components.
//!
//! This module contains the architectural state record shared by the
//! executor and the simulation session.

/// Processor state record (registers, PC, flags).
pub mod state;

pub use state::ArchState;
