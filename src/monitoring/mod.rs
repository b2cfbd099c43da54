/*!
 * Monitoring
 * Structured tracing setup and pool statistics reporting
 */

mod tracer;

pub use tracer::{init_tracing, report_stats};
