/*!
 * Error Types
 * Configuration errors with thiserror and miette diagnostics
 */

use miette::Diagnostic;
use thiserror::Error;

/// Result alias for fallible pool setup
pub type PoolResult<T> = Result<T, PoolError>;

/// Errors raised while validating pool configuration
///
/// Acquire and release are total; only construction from a
/// [`PoolConfig`](crate::PoolConfig) can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum PoolError {
    #[error("Pool size must be at least 1")]
    #[diagnostic(
        code(pool::zero_size),
        help("A pool that retains no buffers misses on every acquire. Use size >= 1.")
    )]
    ZeroSize,

    #[error("Pool size {size} exceeds maximum {max}")]
    #[diagnostic(
        code(pool::size_too_large),
        help("Every retained slot is reserved up front. Lower the pool size.")
    )]
    SizeTooLarge { size: usize, max: usize },

    #[error("Initial capacity {capacity} bytes exceeds maximum {max} bytes")]
    #[diagnostic(
        code(pool::capacity_too_large),
        help("Seed the pool with a typical (95th percentile) write size, not a peak.")
    )]
    CapacityTooLarge { capacity: usize, max: usize },
}
