// Shared helpers for the piecewise-linear segment coding used by both laws.

#[cfg(feature = "internal-no-panic")]
use no_panic::no_panic;

/// Magnitude of an arithmetically shifted sample using 1s' complement for negative values,
/// so that -1 maps to 0 and i16::MIN maps to i16::MAX.
#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
pub(crate) fn magnitude(shifted: i16) -> u32 {
    u32::from((shifted ^ (shifted >> 15)).unsigned_abs())
}

/// Returns the segment number of `value`.
///
/// Values whose highest set bit is below `linear_bits` belong to segment 0, every further bit
/// position starts the next segment.
#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
pub(crate) fn segment(value: u32, linear_bits: u32) -> u32 {
    (u32::BITS - value.leading_zeros()).saturating_sub(linear_bits)
}
