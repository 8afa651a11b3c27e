//! LEGv8 Opcodes.
//!
//! Defines the 11-bit primary opcodes (bits 31-21) of the modeled subset.
//! Instructions whose encoding carries immediate or shift bits inside that
//! window occupy a contiguous range; `*_FIRST` / `*_LAST` bound it.

/// ADDS (shifted register), shift type LSL.
pub const ADDS_REG: u32 = 0x558;

/// ORR (shifted register), shift type LSL.
pub const ORR_REG: u32 = 0x550;

/// EOR (shifted register), shift type LSL.
pub const EOR_REG: u32 = 0x650;

/// ANDS (shifted register), shift type LSL.
pub const ANDS_REG: u32 = 0x750;

/// SUBS / CMP (shifted register), shift type LSL.
pub const SUBS_REG: u32 = 0x758;

/// ADDS (immediate): `sh` = 0, imm12[11] = 0.
pub const ADDS_IMM_FIRST: u32 = 0x588;
/// ADDS (immediate): `sh` = 1, imm12[11] = 1.
pub const ADDS_IMM_LAST: u32 = 0x58B;

/// SUBS / CMP (immediate): `sh` = 0, imm12[11] = 0.
pub const SUBS_IMM_FIRST: u32 = 0x788;
/// SUBS / CMP (immediate): `sh` = 1, imm12[11] = 1.
pub const SUBS_IMM_LAST: u32 = 0x78B;

/// MOVZ, `hw` = 0.
pub const MOVZ_FIRST: u32 = 0x694;
/// MOVZ, `hw` = 3.
pub const MOVZ_LAST: u32 = 0x697;

/// UBFM (LSL / LSR immediate aliases), immr[5] = 0.
pub const UBFM_FIRST: u32 = 0x69A;
/// UBFM (LSL / LSR immediate aliases), immr[5] = 1.
pub const UBFM_LAST: u32 = 0x69B;

/// STUR (64-bit).
pub const STUR: u32 = 0x7C0;
/// LDUR (64-bit).
pub const LDUR: u32 = 0x7C2;
/// STURB.
pub const STURB: u32 = 0x1C0;
/// LDURB.
pub const LDURB: u32 = 0x1C2;
/// STURH.
pub const STURH: u32 = 0x3C0;
/// LDURH.
pub const LDURH: u32 = 0x3C2;

/// B (immediate): opcode bits `000101`, imm26[25:21] = 0.
pub const B_FIRST: u32 = 0x0A0;
/// B (immediate): imm26[25:21] all ones.
pub const B_LAST: u32 = 0x0BF;

/// BR (branch to register).
pub const BR: u32 = 0x6B0;

/// HLT.
pub const HLT: u32 = 0x6A2;

/// High byte shared by every `B.cond` encoding.
///
/// Checked before the primary opcode: the 11-bit window of a conditional
/// branch contains immediate bits and would otherwise alias other entries.
pub const B_COND_BYTE: u32 = 0x54;

/// `imms` value that selects the LSR alias of UBFM.
pub const UBFM_LSR_IMMS: u32 = 0x3F;
