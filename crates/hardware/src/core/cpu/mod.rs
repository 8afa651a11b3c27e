//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire processor state. It coordinates the following:
//! 1. **State Management:** Holds the *current* and *next* architectural state records.
//! 2. **Run Signal:** Owns the running flag that the halt instruction clears.
//! 3. **Commit:** Copies the next state over the current state at the end of a cycle.
//!
//! The CPU holds no reference to memory; the memory is lent to it for the
//! duration of each call to [`Cpu::process_instruction`].

/// Per-cycle fetch, decode and execute.
pub mod execution;

/// Memory access helpers and store staging.
pub mod memory;

use crate::core::arch::ArchState;

/// Main CPU structure containing all processor state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    /// State observed by the instruction being executed; read-only during a cycle.
    pub current: ArchState,
    /// State produced by the instruction being executed.
    pub next: ArchState,
    /// Run signal; cleared by `HLT` and polled by the run loop.
    pub running: bool,
    /// Raise the per-instruction diagnostic from `debug` to `info`.
    pub trace: bool,
    /// Number of committed instructions.
    pub retired: u64,
}

impl Cpu {
    /// Creates a new CPU with zeroed registers and flags.
    ///
    /// # Arguments
    ///
    /// * `start_pc` - Address of the first instruction to fetch.
    ///
    /// # Returns
    ///
    /// A running `Cpu` whose current and next states are identical.
    pub const fn new(start_pc: u64) -> Self {
        let state = ArchState::new(start_pc);
        Self {
            current: state,
            next: state,
            running: true,
            trace: false,
            retired: 0,
        }
    }

    /// Commits the cycle by copying the next state over the current state.
    pub const fn commit(&mut self) {
        self.current = self.next;
        self.retired += 1;
    }

    /// Drops any uncommitted effects, resetting the next state to the current one.
    pub const fn discard(&mut self) {
        self.next = self.current;
    }

    /// Returns `true` until a halt instruction has executed.
    pub const fn is_running(&self) -> bool {
        self.running
    }
}
