//! Conditional branch condition codes.
//!
//! Only the codes that depend on the Zero and Negative flags are modeled;
//! the carry and overflow flags do not exist in this machine.

use std::fmt;

/// Condition code of a `B.cond` instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Equal: Z = 1.
    Eq,
    /// Not equal: Z = 0.
    Ne,
    /// Signed greater or equal: N = 0.
    Ge,
    /// Signed less than: N = 1.
    Lt,
    /// Signed greater than: Z = 0 and N = 0.
    Gt,
    /// Signed less or equal: Z = 1 or N = 1.
    Le,
}

impl Condition {
    /// Maps a 4-bit condition field to a modeled condition.
    ///
    /// Returns `None` for codes that need flags this machine does not keep
    /// (`HS`, `LO`, `MI`, `PL`, `VS`, `VC`, `HI`, `LS`, `AL`, `NV`).
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0x0 => Some(Self::Eq),
            0x1 => Some(Self::Ne),
            0xA => Some(Self::Ge),
            0xB => Some(Self::Lt),
            0xC => Some(Self::Gt),
            0xD => Some(Self::Le),
            _ => None,
        }
    }

    /// Returns the 4-bit encoding of the condition.
    pub const fn code(self) -> u32 {
        match self {
            Self::Eq => 0x0,
            Self::Ne => 0x1,
            Self::Ge => 0xA,
            Self::Lt => 0xB,
            Self::Gt => 0xC,
            Self::Le => 0xD,
        }
    }

    /// Evaluates the condition against the Zero and Negative flags.
    pub const fn holds(self, zero: bool, negative: bool) -> bool {
        match self {
            Self::Eq => zero,
            Self::Ne => !zero,
            Self::Ge => !negative,
            Self::Lt => negative,
            Self::Gt => !zero && !negative,
            Self::Le => zero || negative,
        }
    }

    /// Returns the assembler suffix (`eq`, `ne`, ...).
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Ge => "ge",
            Self::Lt => "lt",
            Self::Gt => "gt",
            Self::Le => "le",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
