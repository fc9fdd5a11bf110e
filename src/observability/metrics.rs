//! Metrics collection.
//!
//! # Metrics
//! - `fallback_attempts_total` (counter): attempts issued, by target
//! - `fallback_retries_total` (counter): fallbacks triggered
//! - `fallback_attempt_outcomes_total` (counter): settled attempts by
//!   target and result
//! - `fallback_attempt_duration_seconds` (histogram): attempt latency by
//!   target
//!
//! # Design Decisions
//! - Recording only; exporters are the embedding application's concern
//! - Labels are static strings, so recording stays allocation-light

use std::time::Instant;

use metrics::{counter, histogram};

use crate::fallback::handle::Target;

pub fn record_attempt(target: Target) {
    counter!("fallback_attempts_total", "target" => target.as_str()).increment(1);
}

pub fn record_fallback() {
    counter!("fallback_retries_total").increment(1);
}

pub fn record_attempt_outcome(target: Target, result: &'static str, started: Instant) {
    counter!(
        "fallback_attempt_outcomes_total",
        "target" => target.as_str(),
        "result" => result
    )
    .increment(1);
    histogram!("fallback_attempt_duration_seconds", "target" => target.as_str())
        .record(started.elapsed().as_secs_f64());
}
