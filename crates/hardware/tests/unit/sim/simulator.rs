//! # Simulator Tests
//!
//! Session construction, run control, fault atomicity and the state-editing
//! entry points used by the shell.

use std::io::Write;

use legv8_core::common::{ConfigError, SimError};
use legv8_core::config::{Config, RegionConfig};
use legv8_core::core::arch::ArchState;
use legv8_core::soc::memory::buffer::RegionBuffer;
use legv8_core::soc::{Ram, WordMemory};
use legv8_core::Simulator;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

use crate::common::builder::instruction::*;
use crate::common::harness::{DATA_BASE, TEXT_BASE, TestContext};

fn bounded_config(max_cycles: u64) -> Config {
    let mut config = Config::default();
    config.general.max_cycles = Some(max_cycles);
    config
}

#[test]
fn new_session_starts_at_start_pc() {
    let sim = Simulator::new(&Config::default()).unwrap();
    assert_eq!(*sim.state(), ArchState::new(TEXT_BASE));
    assert!(sim.is_running());
    assert_eq!(sim.retired(), 0);
    assert!(!sim.cpu.trace);
}

#[test]
fn new_rejects_invalid_config() {
    let mut config = Config::default();
    config.memory.regions.clear();
    assert!(matches!(
        Simulator::new(&config),
        Err(SimError::Config(ConfigError::NoRegions))
    ));
}

#[test]
fn trace_flag_is_taken_from_config() {
    let mut config = Config::default();
    config.general.trace_instructions = true;
    assert!(Simulator::new(&config).unwrap().cpu.trace);
}

#[test]
fn go_runs_until_halt() {
    let mut ctx = TestContext::new().load_program(&[
        adds_imm(1, XZR, 3),
        subs_imm(1, 1, 1),
        b_cond(cond::NE, -4),
        hlt(0),
    ]);
    let executed = ctx.sim.go().unwrap();
    assert_eq!(executed, 1 + 3 * 2 + 1);
    assert_eq!(ctx.sim.retired(), executed);
    assert!(!ctx.sim.is_running());
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn go_stops_at_cycle_bound() {
    let mut sim = Simulator::new(&bounded_config(25)).unwrap();
    sim.load_words(&[b(0)]).unwrap();
    assert_eq!(sim.go().unwrap(), 25);
    assert!(sim.is_running());
    assert_eq!(sim.state().pc, TEXT_BASE);
}

#[test]
fn run_stops_early_on_halt() {
    let mut ctx = TestContext::new().load_program(&[adds_imm(1, XZR, 1), hlt(0), adds_imm(1, XZR, 9)]);
    assert_eq!(ctx.run(10), 2);
    assert_eq!(ctx.run(10), 0);
    assert_eq!(ctx.get_reg(1), 1);
}

#[test]
fn step_after_halt_changes_nothing() {
    let mut ctx = TestContext::new().load_program(&[hlt(0)]);
    ctx.step();
    let halted = ctx.state();
    ctx.step();
    assert_eq!(ctx.state(), halted);
    assert_eq!(ctx.sim.retired(), 1);
}

#[test]
fn faulting_step_leaves_committed_state_alone() {
    let mut ctx = TestContext::new().load_program(&[
        adds_imm(1, XZR, 7),
        ldur(2, 3, 0),
        hlt(0),
    ]);
    ctx.set_reg(3, 0x20);
    ctx.step();
    let before = ctx.state();

    assert!(matches!(ctx.sim.step(), Err(SimError::Memory(_))));
    assert_eq!(ctx.state(), before);
    assert_eq!(ctx.sim.retired(), 1);
    assert!(ctx.sim.is_running());

    // Fixing the base register lets the same instruction retire.
    ctx.set_reg(3, DATA_BASE as i64);
    ctx.step();
    assert_eq!(ctx.state().pc, TEXT_BASE + 8);
}

#[test]
fn run_propagates_fault_after_partial_progress() {
    let mut ctx = TestContext::new().load_program(&[adds_imm(1, XZR, 1), stur(1, XZR, 0)]);
    assert!(ctx.sim.run(5).is_err());
    assert_eq!(ctx.sim.retired(), 1);
    assert_eq!(ctx.state().pc, TEXT_BASE + 4);
}

#[test]
fn state_editing_updates_committed_state() {
    let mut ctx = TestContext::new();
    ctx.sim.set_pc(TEXT_BASE + 0x40);
    ctx.sim.set_flags(true, true);
    ctx.set_reg(5, -1);
    ctx.set_reg(31, 99);

    let state = ctx.state();
    assert_eq!(state.pc, TEXT_BASE + 0x40);
    assert!(state.flag_z && state.flag_n);
    assert_eq!(state.regs.read(5), -1);
    assert_eq!(state.regs.read(31), 0);
    assert_eq!(ctx.cpu().next, state);
}

#[test]
fn sessions_are_isolated() {
    let mut a = TestContext::new().load_program(&[adds_imm(1, XZR, 1), hlt(0)]);
    let mut b = TestContext::new().load_program(&[adds_imm(1, XZR, 2), b(0)]);

    let _ = a.sim.go().unwrap();
    assert_eq!(b.run(3), 3);

    assert_eq!(a.get_reg(1), 1);
    assert_eq!(b.get_reg(1), 2);
    assert!(!a.sim.is_running());
    assert!(b.sim.is_running());
}

#[test]
fn load_program_places_image_at_start_pc() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "b1001401\nd4400000").unwrap();
    let mut sim = Simulator::new(&Config::default()).unwrap();
    assert_eq!(sim.load_program(file.path()).unwrap(), 2);
    assert_eq!(sim.go().unwrap(), 2);
    assert_eq!(sim.state().regs.read(1), 5);
}

#[test]
fn custom_memory_map() {
    let mut config = Config::default();
    config.general.start_pc = 0x100;
    config.memory.regions = vec![RegionConfig::new("rom", 0x100, 0x20)];
    let mut sim = Simulator::new(&config).unwrap();
    sim.load_words(&[adds_imm(2, XZR, 4), hlt(0)]).unwrap();
    assert_eq!(sim.go().unwrap(), 2);
    assert_eq!(sim.state().pc, 0x108);
}

#[test]
fn with_memory_accepts_any_word_memory() {
    let mut ram = Ram::new(vec![RegionBuffer::new("text", 0x0, 16)]);
    ram.write_word(0x0, movz(4, 0xBEEF, 0)).unwrap();
    ram.write_word(0x4, hlt(0)).unwrap();

    let mut sim = Simulator::with_memory(ram, 0x0).with_max_cycles(Some(8));
    assert_eq!(sim.go().unwrap(), 2);
    assert_eq!(sim.state().regs.read(4), 0xBEEF);
}
