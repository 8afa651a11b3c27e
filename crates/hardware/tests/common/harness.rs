use legv8_core::Simulator;
use legv8_core::config::Config;
use legv8_core::core::arch::ArchState;
use legv8_core::core::Cpu;
use legv8_core::soc::Ram;

/// Default text base, where test programs are placed.
pub const TEXT_BASE: u64 = 0x0040_0000;

/// Default data base, used as scratch memory by load/store tests.
pub const DATA_BASE: u64 = 0x1000_0000;

pub struct TestContext {
    pub sim: Simulator<Ram>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a session over the default memory map with test logging installed.
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let config = Config::default();
        let mut sim = match Simulator::new(&config) {
            Ok(sim) => sim,
            Err(e) => panic!("default config rejected: {e}"),
        };
        sim.cpu.trace = true;
        Self { sim }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Loads a sequence of 32-bit instructions at the text base.
    pub fn load_program(mut self, instructions: &[u32]) -> Self {
        if let Err(e) = self.sim.load_words(instructions) {
            panic!("program did not load: {e}");
        }
        self
    }

    /// Sets a general-purpose register value in the committed state.
    pub fn set_reg(&mut self, reg: usize, val: i64) {
        self.sim.set_register(reg, val);
    }

    /// Reads a general-purpose register value from the committed state.
    pub fn get_reg(&self, reg: usize) -> i64 {
        self.sim.state().regs.read(reg)
    }

    /// Returns the committed state.
    pub fn state(&self) -> ArchState {
        *self.sim.state()
    }

    /// Executes exactly one instruction, panicking on a memory fault.
    pub fn step(&mut self) {
        if let Err(e) = self.sim.step() {
            panic!("unexpected fault: {e}");
        }
    }

    /// Runs for at most `cycles` instructions, panicking on a memory fault.
    pub fn run(&mut self, cycles: u64) -> u64 {
        match self.sim.run(cycles) {
            Ok(n) => n,
            Err(e) => panic!("unexpected fault: {e}"),
        }
    }
}
