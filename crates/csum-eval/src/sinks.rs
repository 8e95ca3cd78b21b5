// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use csum_core::{Measurement, ProgressSink, SumVariant, TelemetrySink};

/// Forwards throughput measurements to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TracingTelemetrySink;

impl TelemetrySink for TracingTelemetrySink {
    fn record(&self, variant: SumVariant, len: usize, measurement: Measurement, value: f64) {
        tracing::debug!(
            variant = variant.name(),
            len,
            measurement = measurement.name(),
            value,
            "kernel measurement"
        );
    }
}

/// Forwards parity progress to `tracing` at trace level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TracingProgressSink;

impl ProgressSink for TracingProgressSink {
    fn on_case_finished(&self, len: usize, completed: usize, total: usize) {
        tracing::trace!(len, completed, total, "parity case finished");
    }
}
