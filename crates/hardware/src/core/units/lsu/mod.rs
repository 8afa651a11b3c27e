//! Load/Store Unit (LSU).
//!
//! The memory primitive only moves whole 32-bit words. This unit provides the
//! arithmetic that synthesizes every other transfer on top of it:
//! 1. **Addressing:** base register plus signed offset, in 64-bit unsigned form.
//! 2. **Sub-word stores:** splicing a byte or halfword into an existing word.
//! 3. **Sub-word loads:** sign-extending a byte or halfword straight to 64 bits.
//! 4. **Doubleword loads:** joining two consecutive words.

use crate::common::constants::{WORD_BITS, WORD_BYTES};
use crate::common::data::Width;
use crate::isa::instruction::sign_extend;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Computes an effective address from a base register value and offset.
    ///
    /// The register is reinterpreted as unsigned; the sum wraps.
    #[inline]
    pub const fn effective_address(base: i64, offset: i64) -> u64 {
        (base as u64).wrapping_add_signed(offset)
    }

    /// Returns the address of the second word of a doubleword transfer.
    #[inline]
    pub const fn high_word_address(addr: u64) -> u64 {
        addr.wrapping_add(WORD_BYTES)
    }

    /// Returns the mask covering the low `width` bits of a word.
    const fn lane_mask(width: Width) -> u32 {
        match width {
            Width::Byte => 0xFF,
            Width::Half => 0xFFFF,
            Width::Double => u32::MAX,
        }
    }

    /// Replaces the low 8 or 16 bits of `word` with the low bits of `value`.
    ///
    /// The remaining bytes of `word` are preserved. For `Width::Double` the
    /// whole word is replaced by the low 32 bits of `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use legv8_core::common::Width;
    /// use legv8_core::core::units::lsu::Lsu;
    ///
    /// assert_eq!(Lsu::splice(0xAABB_CCDD, 0x11, Width::Byte), 0xAABB_CC11);
    /// assert_eq!(Lsu::splice(0xAABB_CCDD, 0x1234_5678, Width::Half), 0xAABB_5678);
    /// ```
    pub const fn splice(word: u32, value: i64, width: Width) -> u32 {
        let mask = Self::lane_mask(width);
        (word & !mask) | (value as u32 & mask)
    }

    /// Sign-extends the low 8 or 16 bits of a loaded word to 64 bits.
    ///
    /// The extension goes directly from the lane width to 64 bits, with no
    /// 32-bit intermediate. For `Width::Double` the word is zero-extended;
    /// use [`Lsu::join`] for full doubleword loads.
    pub const fn extend(word: u32, width: Width) -> i64 {
        match width {
            Width::Byte | Width::Half => {
                sign_extend((word & Self::lane_mask(width)) as u64, width.bits())
            }
            Width::Double => word as i64,
        }
    }

    /// Joins two words into a doubleword: `lo` supplies bits 0-31, `hi` bits 32-63.
    #[inline]
    pub const fn join(lo: u32, hi: u32) -> i64 {
        (((hi as u64) << WORD_BITS) | lo as u64) as i64
    }
}
