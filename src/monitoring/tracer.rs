/*!
 * Structured Tracing
 * Subscriber setup for binaries and tests embedding the pool
 */

use crate::pool::PoolStats;
use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - BPOOL_TRACE_JSON: Enable JSON output (default: false)
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("BPOOL_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_current_span(true)
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact()
            )
            .try_init()
    };

    if installed.is_ok() {
        info!(json = use_json, "Structured tracing initialized");
    }
}

/// Emit a pool statistics snapshot as a structured event
pub fn report_stats(pool_name: &str, stats: &PoolStats) {
    info!(
        pool = pool_name,
        retained = stats.retained,
        target_capacity = stats.target_capacity,
        hits = stats.hits,
        misses = stats.misses,
        recycled = stats.recycled,
        replaced = stats.replaced,
        discarded = stats.discarded,
        hit_rate = stats.hit_rate(),
        "Buffer pool statistics"
    );
}
