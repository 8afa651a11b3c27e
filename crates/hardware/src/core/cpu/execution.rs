//! Main Execution Cycle.
//!
//! This module implements the per-cycle transition of the CPU. It performs the following:
//! 1. **Fetch and Decode:** Reads the word at the current PC and classifies it.
//! 2. **Execute:** Computes results from the *current* state and writes them to the *next* state.
//! 3. **Sequencing:** Sets the next PC; branches own it, every other instruction advances by 4.
//! 4. **Observability:** Emits a `tracing` event for every cycle, plus warnings for unknown encodings.
//!
//! The memory write of a store is staged and applied last, so a faulting
//! instruction has no architectural effect at all.

use tracing::{debug, info, warn};

use super::Cpu;
use super::memory::StagedStore;
use crate::common::error::MemoryError;
use crate::core::units::alu::{Alu, AluOp};
use crate::core::units::bru::{Bru, CondOutcome};
use crate::core::units::lsu::Lsu;
use crate::isa::decode::{Instruction, decode};
use crate::soc::traits::WordMemory;

/// Everything an instruction does besides register and flag writes.
#[derive(Clone, Copy, Debug)]
struct Effect {
    /// Address of the next instruction.
    next_pc: u64,
    /// Memory write to perform once the instruction has succeeded.
    store: Option<StagedStore>,
    /// Clears the run signal.
    halt: bool,
}

impl Effect {
    /// Sequential instruction with no side effects beyond registers.
    const fn sequential(pc: u64) -> Self {
        Self {
            next_pc: Bru::fallthrough(pc),
            store: None,
            halt: false,
        }
    }

    /// Control transfer to `target`.
    const fn jump(target: u64) -> Self {
        Self {
            next_pc: target,
            store: None,
            halt: false,
        }
    }
}

impl Cpu {
    /// Executes one instruction.
    ///
    /// Reads only `self.current` and writes only `self.next`; the caller
    /// commits with [`Cpu::commit`]. On a memory fault the next state is
    /// left partially written, memory is left untouched and the run signal
    /// is unchanged; the caller should [`Cpu::discard`] it.
    ///
    /// # Arguments
    ///
    /// * `mem` - The word memory, borrowed for this cycle only.
    pub fn process_instruction<M: WordMemory + ?Sized>(
        &mut self,
        mem: &mut M,
    ) -> Result<(), MemoryError> {
        let pc = self.current.pc;
        let word = self.fetch(mem)?;
        let inst = decode(word);

        if self.trace {
            info!("{pc:#010x}: {word:#010x}  {inst}");
        } else {
            debug!("{pc:#010x}: {word:#010x}  {inst}");
        }

        self.next = self.current;
        let effect = self.execute(inst, pc, mem)?;

        if let Some(store) = effect.store {
            Self::apply_store(mem, store)?;
        }
        if effect.halt {
            info!("halted at {pc:#x}");
            self.running = false;
        }
        self.next.pc = effect.next_pc;
        Ok(())
    }

    /// Performs the architectural computation for one decoded instruction.
    fn execute<M: WordMemory + ?Sized>(
        &mut self,
        inst: Instruction,
        pc: u64,
        mem: &M,
    ) -> Result<Effect, MemoryError> {
        let cur = self.current;
        let x = |idx: usize| cur.regs.read(idx);

        let effect = match inst {
            Instruction::Adds { rd, rn, rm } => {
                self.alu_set_flags(AluOp::Add, rd, x(rn), x(rm));
                Effect::sequential(pc)
            }
            Instruction::Subs { rd, rn, rm } => {
                self.alu_set_flags(AluOp::Sub, rd, x(rn), x(rm));
                Effect::sequential(pc)
            }
            Instruction::AddsImm { rd, rn, imm } => {
                self.alu_set_flags(AluOp::Add, rd, x(rn), imm as i64);
                Effect::sequential(pc)
            }
            Instruction::SubsImm { rd, rn, imm } => {
                self.alu_set_flags(AluOp::Sub, rd, x(rn), imm as i64);
                Effect::sequential(pc)
            }
            Instruction::Ands { rd, rn, rm } => {
                self.alu_set_flags(AluOp::And, rd, x(rn), x(rm));
                Effect::sequential(pc)
            }
            Instruction::Eor { rd, rn, rm } => {
                self.alu(AluOp::Eor, rd, x(rn), x(rm));
                Effect::sequential(pc)
            }
            Instruction::Orr { rd, rn, rm } => {
                self.alu(AluOp::Orr, rd, x(rn), x(rm));
                Effect::sequential(pc)
            }
            Instruction::Lsl { rd, rn, amount } => {
                self.alu_set_flags(AluOp::Lsl, rd, x(rn), i64::from(amount));
                Effect::sequential(pc)
            }
            Instruction::Lsr { rd, rn, amount } => {
                self.alu(AluOp::Lsr, rd, x(rn), i64::from(amount));
                Effect::sequential(pc)
            }
            Instruction::Movz { rd, imm16, hw } => {
                if hw != 0 {
                    debug!("{pc:#x}: movz hw={hw} shift ignored");
                }
                self.next.regs.write(rd, i64::from(imm16));
                Effect::sequential(pc)
            }
            Instruction::Store {
                width,
                rt,
                rn,
                offset,
            } => {
                let addr = Lsu::effective_address(x(rn), offset);
                let store = Self::stage_store(mem, addr, x(rt), width)?;
                Effect {
                    store: Some(store),
                    ..Effect::sequential(pc)
                }
            }
            Instruction::Load {
                width,
                rt,
                rn,
                offset,
            } => {
                let addr = Lsu::effective_address(x(rn), offset);
                let value = Self::load(mem, addr, width)?;
                self.next.regs.write(rt, value);
                Effect::sequential(pc)
            }
            Instruction::B { offset } => Effect::jump(Bru::target(pc, offset)),
            Instruction::Br { rn } => Effect::jump(x(rn) as u64),
            Instruction::BCond { code, offset } => {
                let outcome = Bru::resolve(pc, code, offset, cur.flag_z, cur.flag_n);
                if let CondOutcome::Unrecognized { code, .. } = outcome {
                    warn!("{pc:#x}: unrecognized branch condition {code:#x}, not taken");
                }
                Effect::jump(outcome.next_pc())
            }
            Instruction::Hlt => Effect {
                halt: true,
                ..Effect::sequential(pc)
            },
            Instruction::Unknown { opcode } => {
                warn!("{pc:#x}: unimplemented opcode {opcode:#x}, skipped");
                Effect::sequential(pc)
            }
        };
        Ok(effect)
    }

    /// Writes `a op b` to `rd` without touching the flags.
    fn alu(&mut self, op: AluOp, rd: usize, a: i64, b: i64) {
        self.next.regs.write(rd, Alu::execute(op, a, b));
    }

    /// Writes `a op b` to `rd` and updates both flags from the result.
    ///
    /// The flags are updated even when `rd` is the zero register.
    fn alu_set_flags(&mut self, op: AluOp, rd: usize, a: i64, b: i64) {
        let (result, flags) = Alu::execute_with_flags(op, a, b);
        self.next.regs.write(rd, result);
        self.next.set_flags(flags);
    }
}
