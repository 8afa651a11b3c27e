//! LEGv8 Instruction Decoder.
//!
//! This module turns a 32-bit instruction word into a structured [`Instruction`].
//! Classification happens on two mutually exclusive axes, checked in order:
//! 1. **High byte:** `0x54` in bits 31-24 selects the conditional branch family.
//! 2. **Primary opcode:** bits 31-21 are looked up in [`OPCODE_TABLE`].
//!
//! Each table entry pairs an opcode range with the operand-extraction function
//! for that instruction, so field layouts live in exactly one place.

use crate::common::data::Width;
use crate::isa::instruction::{InstructionBits, sign_extend};
use crate::isa::opcodes;

/// Width of the unconditional branch immediate.
const IMM26_BITS: u32 = 26;

/// Width of the conditional branch immediate.
const IMM19_BITS: u32 = 19;

/// Width of the load/store offset.
const IMM9_BITS: u32 = 9;

/// Branch immediates count instructions; shift converts them to bytes.
const BRANCH_SCALE_SHIFT: u32 = 2;

/// Shift applied to `imm12` when the shift-control field is 1.
const IMM12_LSL: u32 = 12;

/// Highest bit index of a 64-bit register, used by the LSL alias of UBFM.
const REG_MSB: u32 = 63;

/// A decoded LEGv8 instruction with its operands extracted.
///
/// Register operands are raw indices; index 31 is `XZR` for every form here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `ADDS Xd, Xn, Xm`.
    Adds {
        /// Destination register.
        rd: usize,
        /// First source register.
        rn: usize,
        /// Second source register.
        rm: usize,
    },
    /// `SUBS Xd, Xn, Xm` (`CMP Xn, Xm` when `rd` is 31).
    Subs {
        /// Destination register.
        rd: usize,
        /// First source register.
        rn: usize,
        /// Second source register.
        rm: usize,
    },
    /// `ANDS Xd, Xn, Xm`. The shift fields are decoded but never applied.
    Ands {
        /// Destination register.
        rd: usize,
        /// First source register.
        rn: usize,
        /// Second source register.
        rm: usize,
    },
    /// `EOR Xd, Xn, Xm`.
    Eor {
        /// Destination register.
        rd: usize,
        /// First source register.
        rn: usize,
        /// Second source register.
        rm: usize,
    },
    /// `ORR Xd, Xn, Xm`.
    Orr {
        /// Destination register.
        rd: usize,
        /// First source register.
        rn: usize,
        /// Second source register.
        rm: usize,
    },
    /// `ADDS Xd, Xn, #imm`.
    AddsImm {
        /// Destination register.
        rd: usize,
        /// Source register.
        rn: usize,
        /// Zero-extended `imm12`; the shift-control field is ignored.
        imm: u64,
    },
    /// `SUBS Xd, Xn, #imm` (`CMP Xn, #imm` when `rd` is 31).
    SubsImm {
        /// Destination register.
        rd: usize,
        /// Source register.
        rn: usize,
        /// Zero-extended immediate, already shifted when `sh` was set.
        imm: u64,
    },
    /// `LSL Xd, Xn, #amount`.
    Lsl {
        /// Destination register.
        rd: usize,
        /// Source register.
        rn: usize,
        /// Shift amount (0-63).
        amount: u32,
    },
    /// `LSR Xd, Xn, #amount`.
    Lsr {
        /// Destination register.
        rd: usize,
        /// Source register.
        rn: usize,
        /// Shift amount (0-63).
        amount: u32,
    },
    /// `MOVZ Xd, #imm16, LSL #(hw * 16)`.
    Movz {
        /// Destination register.
        rd: usize,
        /// 16-bit immediate.
        imm16: u16,
        /// Lane selector; decoded for diagnostics, not applied.
        hw: u8,
    },
    /// `STUR`, `STURB`, `STURH`.
    Store {
        /// Transfer width.
        width: Width,
        /// Register holding the data to store.
        rt: usize,
        /// Base register.
        rn: usize,
        /// Sign-extended byte offset.
        offset: i64,
    },
    /// `LDUR`, `LDURB`, `LDURH`.
    Load {
        /// Transfer width.
        width: Width,
        /// Destination register.
        rt: usize,
        /// Base register.
        rn: usize,
        /// Sign-extended byte offset.
        offset: i64,
    },
    /// `B label`.
    B {
        /// Sign-extended byte offset from the branch itself.
        offset: i64,
    },
    /// `BR Xn`.
    Br {
        /// Register holding the target address.
        rn: usize,
    },
    /// `B.cond label`.
    BCond {
        /// Raw 4-bit condition field; unmodeled codes are diagnosed at execute.
        code: u32,
        /// Sign-extended byte offset from the branch itself.
        offset: i64,
    },
    /// `HLT #imm16`.
    Hlt,
    /// An encoding outside the modeled subset.
    Unknown {
        /// The 11-bit primary opcode that matched no table entry.
        opcode: u32,
    },
}

/// One row of the dispatch table.
#[derive(Debug)]
pub struct OpcodeEntry {
    /// Lowest 11-bit opcode handled by this entry.
    pub first: u32,
    /// Highest 11-bit opcode handled by this entry (inclusive).
    pub last: u32,
    /// Assembler mnemonic, for diagnostics.
    pub mnemonic: &'static str,
    /// Operand extraction for this encoding.
    pub decode: fn(u32) -> Instruction,
}

impl OpcodeEntry {
    /// Returns `true` if `opcode` falls in this entry's range.
    #[inline]
    pub const fn matches(&self, opcode: u32) -> bool {
        opcode >= self.first && opcode <= self.last
    }
}

/// Dispatch table keyed by the 11-bit primary opcode.
///
/// Ranges are disjoint. Conditional branches are not listed: they are
/// recognised by their high byte before this table is consulted.
pub static OPCODE_TABLE: [OpcodeEntry; 18] = [
    OpcodeEntry {
        first: opcodes::ADDS_REG,
        last: opcodes::ADDS_REG,
        mnemonic: "adds",
        decode: decode_adds,
    },
    OpcodeEntry {
        first: opcodes::SUBS_REG,
        last: opcodes::SUBS_REG,
        mnemonic: "subs",
        decode: decode_subs,
    },
    OpcodeEntry {
        first: opcodes::ADDS_IMM_FIRST,
        last: opcodes::ADDS_IMM_LAST,
        mnemonic: "adds",
        decode: decode_adds_imm,
    },
    OpcodeEntry {
        first: opcodes::SUBS_IMM_FIRST,
        last: opcodes::SUBS_IMM_LAST,
        mnemonic: "subs",
        decode: decode_subs_imm,
    },
    OpcodeEntry {
        first: opcodes::ANDS_REG,
        last: opcodes::ANDS_REG,
        mnemonic: "ands",
        decode: decode_ands,
    },
    OpcodeEntry {
        first: opcodes::EOR_REG,
        last: opcodes::EOR_REG,
        mnemonic: "eor",
        decode: decode_eor,
    },
    OpcodeEntry {
        first: opcodes::ORR_REG,
        last: opcodes::ORR_REG,
        mnemonic: "orr",
        decode: decode_orr,
    },
    OpcodeEntry {
        first: opcodes::UBFM_FIRST,
        last: opcodes::UBFM_LAST,
        mnemonic: "lsl/lsr",
        decode: decode_ubfm,
    },
    OpcodeEntry {
        first: opcodes::MOVZ_FIRST,
        last: opcodes::MOVZ_LAST,
        mnemonic: "movz",
        decode: decode_movz,
    },
    OpcodeEntry {
        first: opcodes::STUR,
        last: opcodes::STUR,
        mnemonic: "stur",
        decode: decode_stur,
    },
    OpcodeEntry {
        first: opcodes::STURB,
        last: opcodes::STURB,
        mnemonic: "sturb",
        decode: decode_sturb,
    },
    OpcodeEntry {
        first: opcodes::STURH,
        last: opcodes::STURH,
        mnemonic: "sturh",
        decode: decode_sturh,
    },
    OpcodeEntry {
        first: opcodes::LDUR,
        last: opcodes::LDUR,
        mnemonic: "ldur",
        decode: decode_ldur,
    },
    OpcodeEntry {
        first: opcodes::LDURB,
        last: opcodes::LDURB,
        mnemonic: "ldurb",
        decode: decode_ldurb,
    },
    OpcodeEntry {
        first: opcodes::LDURH,
        last: opcodes::LDURH,
        mnemonic: "ldurh",
        decode: decode_ldurh,
    },
    OpcodeEntry {
        first: opcodes::B_FIRST,
        last: opcodes::B_LAST,
        mnemonic: "b",
        decode: decode_b,
    },
    OpcodeEntry {
        first: opcodes::BR,
        last: opcodes::BR,
        mnemonic: "br",
        decode: decode_br,
    },
    OpcodeEntry {
        first: opcodes::HLT,
        last: opcodes::HLT,
        mnemonic: "hlt",
        decode: decode_hlt,
    },
];

/// Decodes a LEGv8 instruction word.
///
/// Never fails: encodings outside the modeled subset become
/// [`Instruction::Unknown`] and are diagnosed by the executor.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode
///
/// # Returns
///
/// The decoded instruction with all operand fields extracted.
pub fn decode(inst: u32) -> Instruction {
    if inst.high_byte() == opcodes::B_COND_BYTE {
        return decode_b_cond(inst);
    }

    let opcode = inst.opcode();
    lookup(opcode).map_or(Instruction::Unknown { opcode }, |entry| (entry.decode)(inst))
}

/// Returns the table entry that handles `opcode`, if any.
pub fn lookup(opcode: u32) -> Option<&'static OpcodeEntry> {
    OPCODE_TABLE.iter().find(|entry| entry.matches(opcode))
}

/// Extracts the subtract-immediate operand: `imm12`, shifted left by 12 when
/// the shift-control field is 1.
fn sub_imm(inst: u32) -> u64 {
    let imm = u64::from(inst.imm12());
    if inst.shift() == 1 { imm << IMM12_LSL } else { imm }
}

/// Extracts the sign-extended load/store byte offset.
fn mem_offset(inst: u32) -> i64 {
    sign_extend(u64::from(inst.imm9()), IMM9_BITS)
}

fn decode_adds(inst: u32) -> Instruction {
    Instruction::Adds {
        rd: inst.rd(),
        rn: inst.rn(),
        rm: inst.rm(),
    }
}

fn decode_subs(inst: u32) -> Instruction {
    Instruction::Subs {
        rd: inst.rd(),
        rn: inst.rn(),
        rm: inst.rm(),
    }
}

fn decode_ands(inst: u32) -> Instruction {
    Instruction::Ands {
        rd: inst.rd(),
        rn: inst.rn(),
        rm: inst.rm(),
    }
}

fn decode_eor(inst: u32) -> Instruction {
    Instruction::Eor {
        rd: inst.rd(),
        rn: inst.rn(),
        rm: inst.rm(),
    }
}

fn decode_orr(inst: u32) -> Instruction {
    Instruction::Orr {
        rd: inst.rd(),
        rn: inst.rn(),
        rm: inst.rm(),
    }
}

fn decode_adds_imm(inst: u32) -> Instruction {
    Instruction::AddsImm {
        rd: inst.rd(),
        rn: inst.rn(),
        imm: u64::from(inst.imm12()),
    }
}

fn decode_subs_imm(inst: u32) -> Instruction {
    Instruction::SubsImm {
        rd: inst.rd(),
        rn: inst.rn(),
        imm: sub_imm(inst),
    }
}

/// Decodes the LSL / LSR aliases of UBFM.
///
/// `LSR #s` encodes `immr = s, imms = 63`; `LSL #s` encodes `imms = 63 - s`,
/// so the left amount is recovered from `imms` and the right amount from `immr`.
fn decode_ubfm(inst: u32) -> Instruction {
    let imms = inst.imms();
    if imms == opcodes::UBFM_LSR_IMMS {
        Instruction::Lsr {
            rd: inst.rd(),
            rn: inst.rn(),
            amount: inst.immr(),
        }
    } else {
        Instruction::Lsl {
            rd: inst.rd(),
            rn: inst.rn(),
            amount: REG_MSB - imms,
        }
    }
}

fn decode_movz(inst: u32) -> Instruction {
    Instruction::Movz {
        rd: inst.rd(),
        imm16: inst.imm16() as u16,
        hw: inst.hw() as u8,
    }
}

fn decode_store(inst: u32, width: Width) -> Instruction {
    Instruction::Store {
        width,
        rt: inst.rd(),
        rn: inst.rn(),
        offset: mem_offset(inst),
    }
}

fn decode_load(inst: u32, width: Width) -> Instruction {
    Instruction::Load {
        width,
        rt: inst.rd(),
        rn: inst.rn(),
        offset: mem_offset(inst),
    }
}

fn decode_stur(inst: u32) -> Instruction {
    decode_store(inst, Width::Double)
}

fn decode_sturb(inst: u32) -> Instruction {
    decode_store(inst, Width::Byte)
}

fn decode_sturh(inst: u32) -> Instruction {
    decode_store(inst, Width::Half)
}

fn decode_ldur(inst: u32) -> Instruction {
    decode_load(inst, Width::Double)
}

fn decode_ldurb(inst: u32) -> Instruction {
    decode_load(inst, Width::Byte)
}

fn decode_ldurh(inst: u32) -> Instruction {
    decode_load(inst, Width::Half)
}

fn decode_b(inst: u32) -> Instruction {
    let words = sign_extend(u64::from(inst.imm26()), IMM26_BITS);
    Instruction::B {
        offset: words << BRANCH_SCALE_SHIFT,
    }
}

fn decode_br(inst: u32) -> Instruction {
    Instruction::Br { rn: inst.rn() }
}

const fn decode_hlt(_inst: u32) -> Instruction {
    Instruction::Hlt
}

fn decode_b_cond(inst: u32) -> Instruction {
    let words = sign_extend(u64::from(inst.imm19()), IMM19_BITS);
    Instruction::BCond {
        code: inst.cond(),
        offset: words << BRANCH_SCALE_SHIFT,
    }
}
