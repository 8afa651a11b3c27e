//! Unit tests for the simulation session.


/// Session lifecycle, run control and state editing.
pub mod simulator;
