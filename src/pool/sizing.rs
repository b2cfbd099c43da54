/*!
 * Buffer Sizing
 * Power-of-two alignment of freshly manufactured buffers
 */

use crate::buffer::Buffer;
use crate::limits::{MIN_ALIGN, SUBS};

/// Round `target` up to the pool's allocation granularity
///
/// The granularity is `next_power_of_two(target) >> SUBS`, but never below
/// `1 << MIN_ALIGN`. Targets of similar magnitude therefore share a small set
/// of physical sizes (at most 8 per power-of-two band).
///
/// `0` maps to `0`: with `next_power_of_two(0) == 1` the alignment clamps to
/// `MIN_ALIGN` and zero is already a multiple of it.
///
/// Saturates at the largest aligned value instead of overflowing.
#[inline]
pub fn aligned_capacity(target: usize) -> usize {
    let align = alignment_exponent(target);
    let mask = (1usize << align) - 1;
    match target.checked_add(mask) {
        Some(padded) => padded & !mask,
        None => usize::MAX & !mask,
    }
}

/// Alignment exponent for `target`: `log2(next_power_of_two(target)) - SUBS`
#[inline]
fn alignment_exponent(target: usize) -> u32 {
    let exponent = match target.checked_next_power_of_two() {
        Some(p) => p.trailing_zeros(),
        None => usize::BITS,
    };
    exponent.saturating_sub(SUBS).clamp(MIN_ALIGN, usize::BITS - 1)
}

/// Manufacture an empty buffer sized for `target`
#[inline]
pub(crate) fn manufacture(target: usize) -> Buffer {
    Buffer::with_capacity(aligned_capacity(target))
}
