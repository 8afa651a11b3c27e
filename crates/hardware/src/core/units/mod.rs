//! Execution units and functional components.
//!
//! This module contains the stateless functional units used by the executor:
//! the integer ALU, the branch resolution unit, and the load/store unit.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit: target computation and condition evaluation.
pub mod bru;

/// Load/Store Unit: address generation and sub-word synthesis.
pub mod lsu;
