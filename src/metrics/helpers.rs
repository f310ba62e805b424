//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{DELIVERY_LATENCY, NOTIFICATIONS_TOTAL};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

/// Helper struct for recording notification metrics
pub struct RelayMetrics;

impl RelayMetrics {
    /// Record a notification accepted by the provider
    pub fn record_sent() {
        NOTIFICATIONS_TOTAL.with_label_values(&["sent"]).inc();
    }

    /// Record a notification the provider failed to accept
    pub fn record_failed() {
        NOTIFICATIONS_TOTAL.with_label_values(&["failed"]).inc();
    }

    /// Record a request rejected before reaching the provider
    pub fn record_rejected() {
        NOTIFICATIONS_TOTAL.with_label_values(&["rejected"]).inc();
    }

    /// Record how long the provider call took
    pub fn observe_delivery(elapsed: Duration) {
        DELIVERY_LATENCY.observe(elapsed.as_secs_f64());
    }
}
