//! LEGv8 instruction simulator CLI.
//!
//! This binary provides a single entry point for both simulation modes. It performs:
//! 1. **Batch run:** Load a program, run it until `HLT` (or a cycle bound), and dump the registers.
//! 2. **Interactive shell:** Load a program and step, run, and inspect it from a command prompt.
//!
//! Diagnostics go to stderr through `tracing`; `RUST_LOG` selects the level and
//! `--trace` forces the per-instruction diagnostics on.

mod shell;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use legv8_core::common::SimError;
use legv8_core::config::Config;
use legv8_core::sim::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "LEGv8 instruction simulator",
    long_about = "Run a LEGv8 program image to completion, or explore it interactively.\n\nPrograms are .x hex images (one 32-bit word per line) unless --binary is given.\n\nExamples:\n  sim run programs/addsubs.x\n  sim run --trace --max-cycles 1000 programs/loop.x\n  sim shell --config legv8.json programs/addsubs.x"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program until it halts and print the final state.
    Run {
        /// Program image to execute.
        program: PathBuf,

        /// JSON configuration file (memory map, start PC, limits).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop after this many instructions even if the program has not halted.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,

        /// Treat the program as a raw little-endian binary instead of a hex image.
        #[arg(long)]
        binary: bool,
    },

    /// Load a program and open an interactive command shell.
    Shell {
        /// Program image to load.
        program: PathBuf,

        /// JSON configuration file (memory map, start PC, limits).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log every executed instruction.
        #[arg(long)]
        trace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            program,
            config,
            max_cycles,
            trace,
            binary,
        } => {
            init_tracing(trace);
            cmd_run(&program, config.as_deref(), max_cycles, trace, binary)
        }
        Commands::Shell {
            program,
            config,
            trace,
        } => {
            init_tracing(trace);
            cmd_shell(&program, config.as_deref(), trace)
        }
    };

    if let Err(e) = result {
        error!("{e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Installs the global `tracing` subscriber writing to stderr.
///
/// `trace` forces the debug level; otherwise `RUST_LOG` is honoured, defaulting to `info`.
fn init_tracing(trace: bool) {
    let filter = if trace {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Reads the configuration file if one was given, otherwise returns the defaults.
fn load_config(path: Option<&Path>, trace: bool) -> Result<Config, SimError> {
    let mut config = match path {
        Some(p) => Config::from_json_file(p)?,
        None => Config::default(),
    };
    config.general.trace_instructions |= trace;
    Ok(config)
}

/// Loads a program, runs it until halt, and prints the final state.
///
/// On a memory fault the last committed state is printed before the error
/// is returned.
fn cmd_run(
    program: &Path,
    config_path: Option<&Path>,
    max_cycles: Option<u64>,
    trace: bool,
    binary: bool,
) -> Result<(), SimError> {
    let mut config = load_config(config_path, trace)?;
    if max_cycles.is_some() {
        config.general.max_cycles = max_cycles;
    }

    let mut sim = Simulator::new(&config)?;
    if binary {
        let _ = sim.load_binary(program, config.general.start_pc)?;
    } else {
        let _ = sim.load_program(program)?;
    }

    let outcome = sim.go();
    println!("{}", sim.state());
    let executed = outcome?;
    println!(
        "{executed} instructions executed, {}",
        if sim.is_running() { "still running" } else { "halted" }
    );
    Ok(())
}

/// Loads a program and hands the session to the interactive shell.
fn cmd_shell(program: &Path, config_path: Option<&Path>, trace: bool) -> Result<(), SimError> {
    let config = load_config(config_path, trace)?;
    let mut sim = Simulator::new(&config)?;
    let words = sim.load_program(program)?;
    println!("Loaded {words} words from {}", program.display());
    shell::run(&mut sim);
    Ok(())
}
