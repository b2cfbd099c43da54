/*!
 * Target Capacity Estimator
 * Exponential moving average of deflated buffer capacities
 */

use crate::limits::{ALPHA, SUBS};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared estimate of a typical buffer capacity
///
/// Every released buffer contributes `cap - cap / 8` with weight `ALPHA`%.
/// Capacities only ever grow by reallocation, so blending in the raw value
/// would drift upward forever; the deflated sample tracks used size instead.
///
/// Updates are compare-and-swap loops: concurrent releases never lose the
/// word, though their blending order is unspecified.
#[derive(Debug)]
pub struct CapacityEstimator {
    target: AtomicUsize,
}

impl CapacityEstimator {
    pub fn new(initial: usize) -> Self {
        Self {
            target: AtomicUsize::new(initial),
        }
    }

    /// Current target capacity in bytes
    #[inline]
    pub fn get(&self) -> usize {
        self.target.load(Ordering::Relaxed)
    }

    /// Blend an observed capacity into the estimate, returning the new target
    #[inline]
    pub fn observe(&self, capacity: usize) -> usize {
        let previous = self
            .target
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |current| {
                Some(blend(current, capacity))
            })
            .unwrap_or_else(|current| current);
        blend(previous, capacity)
    }
}

/// One step of the moving average with truncating integer division
///
/// Widened to u128 so `target * (100 - ALPHA)` cannot overflow; the result
/// is bounded by `max(target, capacity)` and fits back into usize.
#[inline]
pub(crate) fn blend(target: usize, capacity: usize) -> usize {
    let sample = (capacity - (capacity >> SUBS)) as u128;
    let alpha = ALPHA as u128;
    let mixed = (target as u128 * (100 - alpha) + sample * alpha) / 100;
    mixed as usize
}
