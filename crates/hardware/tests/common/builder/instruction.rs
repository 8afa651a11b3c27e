//! LEGv8 instruction encoders.
//!
//! Each helper produces the canonical ARMv8 encoding of one instruction so
//! tests can be written as assembler-like programs.

/// Register index of `XZR`.
pub const XZR: u32 = 31;

const fn reg3(base: u32, rd: u32, rn: u32, rm: u32) -> u32 {
    base | (rm & 0x1F) << 16 | (rn & 0x1F) << 5 | (rd & 0x1F)
}

const fn imm12(base: u32, rd: u32, rn: u32, imm: u32, shifted: bool) -> u32 {
    base | (shifted as u32) << 22 | (imm & 0xFFF) << 10 | (rn & 0x1F) << 5 | (rd & 0x1F)
}

const fn mem(base: u32, rt: u32, rn: u32, offset: i32) -> u32 {
    base | ((offset as u32) & 0x1FF) << 12 | (rn & 0x1F) << 5 | (rt & 0x1F)
}

/// `ADDS Xd, Xn, Xm`
pub const fn adds(rd: u32, rn: u32, rm: u32) -> u32 {
    reg3(0xAB00_0000, rd, rn, rm)
}

/// `SUBS Xd, Xn, Xm`
pub const fn subs(rd: u32, rn: u32, rm: u32) -> u32 {
    reg3(0xEB00_0000, rd, rn, rm)
}

/// `CMP Xn, Xm`
pub const fn cmp(rn: u32, rm: u32) -> u32 {
    subs(XZR, rn, rm)
}

/// `ANDS Xd, Xn, Xm`
pub const fn ands(rd: u32, rn: u32, rm: u32) -> u32 {
    reg3(0xEA00_0000, rd, rn, rm)
}

/// `EOR Xd, Xn, Xm`
pub const fn eor(rd: u32, rn: u32, rm: u32) -> u32 {
    reg3(0xCA00_0000, rd, rn, rm)
}

/// `ORR Xd, Xn, Xm`
pub const fn orr(rd: u32, rn: u32, rm: u32) -> u32 {
    reg3(0xAA00_0000, rd, rn, rm)
}

/// `ADDS Xd, Xn, #imm`
pub const fn adds_imm(rd: u32, rn: u32, imm: u32) -> u32 {
    imm12(0xB100_0000, rd, rn, imm, false)
}

/// `SUBS Xd, Xn, #imm`
pub const fn subs_imm(rd: u32, rn: u32, imm: u32) -> u32 {
    imm12(0xF100_0000, rd, rn, imm, false)
}

/// `SUBS Xd, Xn, #imm, LSL #12`
pub const fn subs_imm_lsl12(rd: u32, rn: u32, imm: u32) -> u32 {
    imm12(0xF100_0000, rd, rn, imm, true)
}

/// `ADDS Xd, Xn, #imm, LSL #12`
pub const fn adds_imm_lsl12(rd: u32, rn: u32, imm: u32) -> u32 {
    imm12(0xB100_0000, rd, rn, imm, true)
}

/// `LSL Xd, Xn, #shift` (alias of `UBFM Xd, Xn, #(-shift mod 64), #(63 - shift)`)
pub const fn lsl(rd: u32, rn: u32, shift: u32) -> u32 {
    let immr = (64 - shift) % 64;
    let imms = 63 - shift;
    0xD340_0000 | immr << 16 | imms << 10 | (rn & 0x1F) << 5 | (rd & 0x1F)
}

/// `LSR Xd, Xn, #shift` (alias of `UBFM Xd, Xn, #shift, #63`)
pub const fn lsr(rd: u32, rn: u32, shift: u32) -> u32 {
    0xD340_0000 | (shift & 0x3F) << 16 | 63 << 10 | (rn & 0x1F) << 5 | (rd & 0x1F)
}

/// `MOVZ Xd, #imm16, LSL #(hw * 16)`
pub const fn movz(rd: u32, imm16: u16, hw: u32) -> u32 {
    0xD280_0000 | (hw & 0x3) << 21 | (imm16 as u32) << 5 | (rd & 0x1F)
}

/// `STUR Xt, [Xn, #offset]`
pub const fn stur(rt: u32, rn: u32, offset: i32) -> u32 {
    mem(0xF800_0000, rt, rn, offset)
}

/// `STURB Wt, [Xn, #offset]`
pub const fn sturb(rt: u32, rn: u32, offset: i32) -> u32 {
    mem(0x3800_0000, rt, rn, offset)
}

/// `STURH Wt, [Xn, #offset]`
pub const fn sturh(rt: u32, rn: u32, offset: i32) -> u32 {
    mem(0x7800_0000, rt, rn, offset)
}

/// `LDUR Xt, [Xn, #offset]`
pub const fn ldur(rt: u32, rn: u32, offset: i32) -> u32 {
    mem(0xF840_0000, rt, rn, offset)
}

/// `LDURB Wt, [Xn, #offset]`
pub const fn ldurb(rt: u32, rn: u32, offset: i32) -> u32 {
    mem(0x3840_0000, rt, rn, offset)
}

/// `LDURH Wt, [Xn, #offset]`
pub const fn ldurh(rt: u32, rn: u32, offset: i32) -> u32 {
    mem(0x7840_0000, rt, rn, offset)
}

/// `B #offset`, with `offset` in bytes.
pub const fn b(offset: i64) -> u32 {
    0x1400_0000 | ((offset >> 2) as u32 & 0x03FF_FFFF)
}

/// `B.cond #offset`, with `offset` in bytes and the raw 4-bit condition code.
pub const fn b_cond(code: u32, offset: i64) -> u32 {
    0x5400_0000 | ((offset >> 2) as u32 & 0x7FFFF) << 5 | (code & 0xF)
}

/// `BR Xn`
pub const fn br(rn: u32) -> u32 {
    0xD61F_0000 | (rn & 0x1F) << 5
}

/// `HLT #imm16`
pub const fn hlt(imm16: u16) -> u32 {
    0xD440_0000 | (imm16 as u32) << 5
}

/// Condition codes.
pub mod cond {
    /// Equal.
    pub const EQ: u32 = 0x0;
    /// Not equal.
    pub const NE: u32 = 0x1;
    /// Signed greater or equal.
    pub const GE: u32 = 0xA;
    /// Signed less than.
    pub const LT: u32 = 0xB;
    /// Signed greater than.
    pub const GT: u32 = 0xC;
    /// Signed less or equal.
    pub const LE: u32 = 0xD;
}
