/*!
 * Pool Limits and Tuning Constants
 *
 * Centralized location for the estimator and sizing constants.
 * Values marked [COMPAT] must not change: the sequence of target
 * capacities produced by the estimator depends on them exactly.
 */

// =============================================================================
// ESTIMATOR
// =============================================================================

/// Smoothing weight of the moving average, in percent (0..=100)
/// [COMPAT] Each release contributes ALPHA% of its deflated capacity
pub const ALPHA: usize = 5;

/// Deflation and alignment shift
/// [COMPAT] Observations are reduced by `cap >> SUBS` (1/8th) before blending,
/// and buffer sizes are rounded to a multiple of `next_power_of_two(a) >> SUBS`
pub const SUBS: u32 = 3;

// =============================================================================
// SIZING
// =============================================================================

/// Minimum alignment exponent
/// Buffers are always a multiple of `1 << MIN_ALIGN` (16) bytes
pub const MIN_ALIGN: u32 = 4;

// =============================================================================
// CONFIGURATION BOUNDS
// =============================================================================

/// Default number of retained buffers
pub const DEFAULT_POOL_SIZE: usize = 64;

/// Default seed for the target capacity (4KB)
/// [PERF] Covers most serialized messages without regrowth
pub const DEFAULT_INITIAL_CAPACITY: usize = 4 * 1024;

/// Upper bound on retained buffers accepted by `PoolConfig::validate`
/// The slot store pre-allocates one slot per retained buffer
pub const MAX_POOL_SIZE: usize = 1 << 20;

/// Upper bound on the seed capacity accepted by `PoolConfig::validate` (1GB)
pub const MAX_INITIAL_CAPACITY: usize = 1 << 30;
