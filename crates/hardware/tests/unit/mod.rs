//! # Unit Components
//!
//! This module serves as the central hub for the unit tests. It mirrors the
//! library layout: shared types, configuration, the processor core, the ISA,
//! the memory subsystem and the simulation session.





/// Unit tests for the simulation session and program loader.
pub mod sim;
