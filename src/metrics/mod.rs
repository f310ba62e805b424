//! Prometheus metrics for the relay.
//!
//! - Notification outcomes (sent, failed, rejected)
//! - Latency of the call to the push provider

mod helpers;

pub use helpers::{encode_metrics, RelayMetrics};

use lazy_static::lazy_static;
use prometheus::{register_histogram, register_int_counter_vec, Histogram, IntCounterVec};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "push_relay";

lazy_static! {
    /// Notification requests by outcome
    pub static ref NOTIFICATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_notifications_total", METRIC_PREFIX),
        "Topic notification requests by outcome",
        &["outcome"]
    ).unwrap();

    /// Time spent waiting on the push provider
    pub static ref DELIVERY_LATENCY: Histogram = register_histogram!(
        format!("{}_delivery_latency_seconds", METRIC_PREFIX),
        "Push provider call latency in seconds",
        vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]
    ).unwrap();
}
