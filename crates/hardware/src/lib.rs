//! LEGv8 instruction simulator library.
//!
//! This crate implements a single-cycle simulator for a LEGv8 subset of ARMv8-A with the following:
//! 1. **Core:** Double-buffered architectural state, the per-cycle execution engine, ALU/BRU/LSU units.
//! 2. **Memory:** Region-based RAM behind a word-granular access trait.
//! 3. **ISA:** Table-driven decoding, condition codes, and a disassembler.
//! 4. **Simulation:** Session object, program loader, and JSON configuration.
//!
//! # Examples
//!
//! ```
//! use legv8_core::{Config, Simulator};
//!
//! let mut sim = Simulator::new(&Config::default()).unwrap();
//! // adds x1, x0, #5 ; hlt #0
//! sim.load_words(&[0xB100_1401, 0xD440_0000]).unwrap();
//! let executed = sim.go().unwrap();
//!
//! assert_eq!(executed, 2);
//! assert!(!sim.is_running());
//! assert_eq!(sim.state().regs.read(1), 5);
//! ```

/// Common types and constants (registers, access types, errors).
pub mod common;
/// Simulator configuration (defaults, memory map, validation).
pub mod config;
/// CPU core (architectural state, execution, functional units).
pub mod core;
/// Instruction set (field extraction, opcodes, decode, conditions, disassembly).
pub mod isa;
/// Simulation session and program loader.
pub mod sim;
/// Memory subsystem (word access trait, RAM).
pub mod soc;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the current and next state and the run signal.
pub use crate::core::Cpu;
/// Simulation session; owns the CPU and its memory.
pub use crate::sim::Simulator;
/// Region-based main memory.
pub use crate::soc::Ram;
