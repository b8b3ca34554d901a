//! Bit-range arithmetic shared by every range-based decoder.
//!
//! Bits are addressed LSB-first: bit 0 is the least significant bit of the value.

use crate::errors::CompileError;

/// Highest bit position addressable in a decoded value.
pub const MAX_BIT: u32 = u64::BITS - 1;

/// Returns a value with the low `n` bits set. `n >= 64` yields all ones.
const fn low_bits(n: u32) -> u64 {
    match 1u64.checked_shl(n) {
        Some(x) => x.wrapping_sub(1),
        None => u64::MAX,
    }
}

/// Mask with only bit `pos` set. Positions past [MAX_BIT] give an empty mask.
pub const fn bit_mask(pos: u32) -> u64 {
    match 1u64.checked_shl(pos) {
        Some(x) => x,
        None => 0,
    }
}

/// Mask with bits `start..=end` set.
pub const fn range_mask(start: u32, end: u32) -> u64 {
    low_bits(end.saturating_add(1)) ^ low_bits(start)
}

/// Shifts `value` right by `n`, yielding 0 once every bit has been shifted out.
pub const fn shift_right(value: u64, n: u32) -> u64 {
    match value.checked_shr(n) {
        Some(x) => x,
        None => 0,
    }
}

/// An inclusive range of bit positions together with its precomputed mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    start: u32,
    end: u32,
    mask: u64,
}

impl BitRange {
    /// Builds the range `start..=end`.
    ///
    /// A reversed or out-of-width range is a caller error; it is only checked in debug
    /// builds. Use [BitRange::try_new] for untrusted input.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "bit range {start}..={end} is reversed");
        debug_assert!(end <= MAX_BIT, "bit range {start}..={end} exceeds 64 bits");

        BitRange {
            start,
            end,
            mask: range_mask(start, end),
        }
    }

    /// Builds the range `start..=end`, rejecting reversed or out-of-width ranges.
    pub fn try_new(start: u32, end: u32) -> Result<Self, CompileError> {
        if start > end || end > MAX_BIT {
            return Err(CompileError::InvalidBitRange { start, end });
        }

        Ok(Self::new(start, end))
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Number of bits covered by the range.
    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }

    /// Extracts the field covered by this range, right-aligned.
    pub fn extract(&self, value: u64) -> u64 {
        shift_right(value & self.mask, self.start)
    }
}

/// Checks a single bit position for untrusted input.
pub fn check_bit(pos: u32) -> Result<u32, CompileError> {
    if pos > MAX_BIT {
        return Err(CompileError::InvalidBitPosition(pos));
    }

    Ok(pos)
}
