//! Simulator: owns the CPU and the memory side-by-side.
//!
//! A session is the unit of isolation. Each `Simulator` has its own state
//! records, its own memory, and its own run signal, so any number of them can
//! coexist in one process.

use std::path::Path;

use tracing::warn;

use super::loader;
use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::arch::ArchState;
use crate::soc::memory::Ram;
use crate::soc::traits::WordMemory;

/// Top-level simulator: CPU architectural state + memory.
#[derive(Debug)]
pub struct Simulator<M = Ram> {
    /// CPU state records and run signal.
    pub cpu: Cpu,
    /// The memory the program runs against.
    pub memory: M,
    /// Address programs are loaded at.
    entry: u64,
    /// Upper bound for [`Simulator::go`].
    max_cycles: Option<u64>,
}

impl Simulator<Ram> {
    /// Creates a simulator from a configuration.
    ///
    /// Validates the configuration, provisions every memory region and
    /// points the PC at `general.start_pc`.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        let mut sim = Self::with_memory(Ram::from_config(&config.memory), config.general.start_pc);
        sim.cpu.trace = config.general.trace_instructions;
        sim.max_cycles = config.general.max_cycles;
        Ok(sim)
    }

    /// Loads a `.x` hex image at the start address.
    ///
    /// # Returns
    ///
    /// The number of instruction words loaded.
    pub fn load_program(&mut self, path: &Path) -> Result<usize, SimError> {
        Ok(loader::load_program(&mut self.memory, path, self.entry)?)
    }

    /// Loads a hex program held in memory at the start address.
    pub fn load_words(&mut self, words: &[u32]) -> Result<(), SimError> {
        Ok(loader::load_words(&mut self.memory, self.entry, words)?)
    }

    /// Loads a raw binary image at `addr`.
    ///
    /// # Returns
    ///
    /// The number of bytes loaded.
    pub fn load_binary(&mut self, path: &Path, addr: u64) -> Result<usize, SimError> {
        Ok(loader::load_binary(&mut self.memory, path, addr)?)
    }
}

impl<M: WordMemory> Simulator<M> {
    /// Creates a simulator around an existing memory.
    ///
    /// # Arguments
    ///
    /// * `memory` - Any [`WordMemory`] implementation.
    /// * `start_pc` - Address of the first instruction.
    pub const fn with_memory(memory: M, start_pc: u64) -> Self {
        Self {
            cpu: Cpu::new(start_pc),
            memory,
            entry: start_pc,
            max_cycles: None,
        }
    }

    /// Sets the bound used by [`Simulator::go`].
    #[must_use]
    pub const fn with_max_cycles(mut self, max_cycles: Option<u64>) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    /// Executes one instruction and commits it.
    ///
    /// On a memory fault the cycle is discarded: the current state, the
    /// memory and the run signal are exactly as before the call. Stepping a
    /// halted simulator does nothing.
    pub fn step(&mut self) -> Result<(), SimError> {
        if !self.cpu.running {
            warn!("simulator is halted; step ignored");
            return Ok(());
        }
        match self.cpu.process_instruction(&mut self.memory) {
            Ok(()) => {
                self.cpu.commit();
                Ok(())
            }
            Err(e) => {
                self.cpu.discard();
                Err(e.into())
            }
        }
    }

    /// Executes up to `cycles` instructions, stopping early on halt.
    ///
    /// # Returns
    ///
    /// The number of instructions executed.
    pub fn run(&mut self, cycles: u64) -> Result<u64, SimError> {
        let mut executed = 0;
        while executed < cycles && self.cpu.running {
            self.step()?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Runs until halted, or until the configured cycle bound is reached.
    ///
    /// # Returns
    ///
    /// The number of instructions executed.
    pub fn go(&mut self) -> Result<u64, SimError> {
        let executed = self.run(self.max_cycles.unwrap_or(u64::MAX))?;
        if self.cpu.running {
            warn!("stopped after {executed} cycles without halting");
        }
        Ok(executed)
    }

    /// Returns `true` until a halt instruction has executed.
    pub const fn is_running(&self) -> bool {
        self.cpu.running
    }

    /// Returns the committed architectural state.
    pub const fn state(&self) -> &ArchState {
        &self.cpu.current
    }

    /// Returns the number of committed instructions.
    pub const fn retired(&self) -> u64 {
        self.cpu.retired
    }

    /// Overwrites a register in the committed state.
    ///
    /// Writes to `X31` are ignored.
    pub fn set_register(&mut self, idx: usize, val: i64) {
        self.cpu.current.regs.write(idx, val);
        self.cpu.discard();
    }

    /// Overwrites the program counter in the committed state.
    pub const fn set_pc(&mut self, pc: u64) {
        self.cpu.current.pc = pc;
        self.cpu.discard();
    }

    /// Overwrites the Zero and Negative flags in the committed state.
    pub const fn set_flags(&mut self, zero: bool, negative: bool) {
        self.cpu.current.flag_z = zero;
        self.cpu.current.flag_n = negative;
        self.cpu.discard();
    }
}
