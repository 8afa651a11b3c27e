//! Builders for test inputs.

/// LEGv8 instruction encoders.
pub mod instruction;
