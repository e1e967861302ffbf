// slipstream_core/src/error.rs

use thiserror::Error;

/// Errors surfaced by the state reconstruction core.
///
/// Malformed physics values (NaN/inf) are deliberately not validated here;
/// sanitizing telemetry is the feed's responsibility and the core passes
/// those values through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    /// A sample arrived with a tick index at or before the last one seen.
    /// Absorbing it would drive the duration timers negative, so the caller
    /// must decide how to handle the stale delivery.
    #[error("out-of-order telemetry sample: tick {sample_tick} arrived after tick {last_tick}")]
    OutOfOrderSample { last_tick: u64, sample_tick: u64 },
}
