//! Interactive command shell.
//!
//! Reads one command per line from stdin and applies it to a single
//! simulation session. Errors raised by a command are reported and the
//! shell keeps going; only `quit` or end of input leave it.

use std::io::{self, BufRead, Write};

use legv8_core::common::{NUM_REGS, SimError};
use legv8_core::sim::Simulator;

/// Prompt printed before each command.
const PROMPT: &str = "LEGv8-SIM> ";

/// Usage text for `help` and `?`.
const HELP: &str = "\
go                  run until the program halts
run <n>             execute <n> instructions
rdump               print the PC, flags and registers
mdump <lo> <hi>     print memory words from <lo> to <hi> (hex)
input <reg> <val>   set register <reg> (0-30 or x0-x30) to <val>
help, ?             show this text
quit, q             leave the shell";

/// A parsed shell command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Go,
    Run(u64),
    RegDump,
    MemDump(u64, u64),
    Input(usize, i64),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line; `Ok(None)` for a blank line.
    fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();
        let cmd = match (name.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("go", []) => Self::Go,
            ("run", [n]) => Self::Run(n.parse().map_err(|_| format!("bad count '{n}'"))?),
            ("rdump", []) => Self::RegDump,
            ("mdump", [lo, hi]) => Self::MemDump(parse_addr(lo)?, parse_addr(hi)?),
            ("input", [reg, val]) => Self::Input(parse_reg(reg)?, parse_value(val)?),
            ("help" | "?", []) => Self::Help,
            ("quit" | "q", []) => Self::Quit,
            _ => return Err(format!("unrecognized command '{}'; try 'help'", line.trim())),
        };
        Ok(Some(cmd))
    }
}

/// Parses a hexadecimal address with an optional `0x` prefix.
fn parse_addr(text: &str) -> Result<u64, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u64::from_str_radix(digits, 16).map_err(|_| format!("bad address '{text}'"))
}

/// Parses a register name; `x31`/`xzr` is rejected since it cannot be written.
fn parse_reg(text: &str) -> Result<usize, String> {
    let digits = text
        .strip_prefix('x')
        .or_else(|| text.strip_prefix('X'))
        .unwrap_or(text);
    digits
        .parse::<usize>()
        .ok()
        .filter(|&idx| idx < NUM_REGS - 1)
        .ok_or_else(|| format!("bad register '{text}'"))
}

/// Parses a register value: decimal (optionally negative) or `0x` hexadecimal.
fn parse_value(text: &str) -> Result<i64, String> {
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).map(|v| v as i64).ok(),
        None => text.parse::<i64>().ok(),
    };
    parsed.ok_or_else(|| format!("bad value '{text}'"))
}

/// Runs the command loop until `quit` or end of input.
pub fn run(sim: &mut Simulator) {
    println!("LEGv8 simulator shell. Type 'help' for commands.");
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{PROMPT}");
        let _ = io::stdout().flush();
        let Some(Ok(line)) = lines.next() else {
            println!();
            break;
        };
        match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(cmd)) => execute(sim, cmd),
            Ok(None) => {}
            Err(msg) => println!("{msg}"),
        }
    }
}

/// Applies one command to the session and prints its result.
fn execute(sim: &mut Simulator, cmd: Command) {
    match cmd {
        Command::Go => report(sim, Simulator::go),
        Command::Run(n) => report(sim, |s| s.run(n)),
        Command::RegDump => println!("{}", sim.state()),
        Command::MemDump(lo, hi) => match sim.memory.dump(lo, hi) {
            Ok(words) => {
                for (addr, word) in words {
                    println!("{addr:#010x}: {word:#010x}");
                }
            }
            Err(e) => println!("error: {e}"),
        },
        Command::Input(reg, val) => sim.set_register(reg, val),
        Command::Help => println!("{HELP}"),
        Command::Quit => {}
    }
}

/// Runs `step_fn` and prints how many instructions it executed.
fn report<F>(sim: &mut Simulator, step_fn: F)
where
    F: FnOnce(&mut Simulator) -> Result<u64, SimError>,
{
    if !sim.is_running() {
        println!("program has halted");
        return;
    }
    match step_fn(sim) {
        Ok(n) if sim.is_running() => println!("executed {n} instructions"),
        Ok(n) => println!("executed {n} instructions; program halted"),
        Err(e) => println!("error: {e}"),
    }
}
