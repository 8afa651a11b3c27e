//! Instruction Disassembler for the LEGv8 subset.
//!
//! Converts decoded instructions into assembler syntax for debug tracing,
//! the CLI trace output, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use legv8_core::isa::disasm::disassemble;
//! let text = disassemble(0xB100_1401); // ADDS X1, X0, #5
//! assert_eq!(text, "adds x1, x0, #5");
//! ```

use std::fmt;

use crate::common::constants::ZERO_REG;
use crate::isa::cond::Condition;
use crate::isa::decode::{Instruction, decode};

/// Register name wrapper: `x0`..`x30`, `xzr`.
struct Reg(usize);

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == ZERO_REG {
            f.write_str("xzr")
        } else {
            write!(f, "x{}", self.0)
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Adds { rd, rn, rm } => write!(f, "adds {}, {}, {}", Reg(rd), Reg(rn), Reg(rm)),
            Self::Subs { rd, rn, rm } if rd == ZERO_REG => {
                write!(f, "cmp {}, {}", Reg(rn), Reg(rm))
            }
            Self::Subs { rd, rn, rm } => write!(f, "subs {}, {}, {}", Reg(rd), Reg(rn), Reg(rm)),
            Self::Ands { rd, rn, rm } => write!(f, "ands {}, {}, {}", Reg(rd), Reg(rn), Reg(rm)),
            Self::Eor { rd, rn, rm } => write!(f, "eor {}, {}, {}", Reg(rd), Reg(rn), Reg(rm)),
            Self::Orr { rd, rn, rm } => write!(f, "orr {}, {}, {}", Reg(rd), Reg(rn), Reg(rm)),
            Self::AddsImm { rd, rn, imm } => write!(f, "adds {}, {}, #{imm}", Reg(rd), Reg(rn)),
            Self::SubsImm { rd, rn, imm } if rd == ZERO_REG => {
                write!(f, "cmp {}, #{imm}", Reg(rn))
            }
            Self::SubsImm { rd, rn, imm } => write!(f, "subs {}, {}, #{imm}", Reg(rd), Reg(rn)),
            Self::Lsl { rd, rn, amount } => write!(f, "lsl {}, {}, #{amount}", Reg(rd), Reg(rn)),
            Self::Lsr { rd, rn, amount } => write!(f, "lsr {}, {}, #{amount}", Reg(rd), Reg(rn)),
            Self::Movz { rd, imm16, hw: 0 } => write!(f, "movz {}, #{imm16}", Reg(rd)),
            Self::Movz { rd, imm16, hw } => {
                write!(f, "movz {}, #{imm16}, lsl #{}", Reg(rd), u32::from(hw) * 16)
            }
            Self::Store {
                width,
                rt,
                rn,
                offset,
            } => write!(
                f,
                "stur{} {}, [{}, #{offset}]",
                width.suffix(),
                Reg(rt),
                Reg(rn)
            ),
            Self::Load {
                width,
                rt,
                rn,
                offset,
            } => write!(
                f,
                "ldur{} {}, [{}, #{offset}]",
                width.suffix(),
                Reg(rt),
                Reg(rn)
            ),
            Self::B { offset } => write!(f, "b #{offset}"),
            Self::Br { rn } => write!(f, "br {}", Reg(rn)),
            Self::BCond { code, offset } => match Condition::from_code(code) {
                Some(cond) => write!(f, "b.{cond} #{offset}"),
                None => write!(f, "b.<{code:#x}> #{offset}"),
            },
            Self::Hlt => f.write_str("hlt"),
            Self::Unknown { opcode } => write!(f, "unknown ({opcode:#x})"),
        }
    }
}

/// Disassembles a 32-bit LEGv8 instruction into a human-readable string.
///
/// Returns a mnemonic like `"adds x1, x0, #5"` or `"unknown (0x7ff)"` for
/// encodings outside the modeled subset.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    decode(inst).to_string()
}
