//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode map, field extraction and decoding logic for the
//! modeled LEGv8 subset: flag-setting arithmetic and logic, shifts, `MOVZ`,
//! unscaled loads and stores, and the branch family.

/// Conditional branch condition codes.
pub mod cond;

/// Dispatch-table decoder producing [`decode::Instruction`].
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction field extraction utilities.
pub mod instruction;

/// Primary opcode constants.
pub mod opcodes;
