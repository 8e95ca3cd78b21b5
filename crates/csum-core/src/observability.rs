// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::SumVariant;

/// Scalar derived from one timed run of a kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Measurement {
    NsPerCall,
    ElementsPerSec,
}

impl Measurement {
    pub fn name(self) -> &'static str {
        match self {
            Self::NsPerCall => "ns_per_call",
            Self::ElementsPerSec => "elements_per_sec",
        }
    }
}

/// Receives parity-check progress once per evaluated input length.
pub trait ProgressSink: Send + Sync {
    /// `len` is the length just checked; `completed` of `total` lengths are done.
    fn on_case_finished(&self, len: usize, completed: usize, total: usize);
}

/// Receives throughput measurements attributed to the kernel and input length
/// they were taken on.
pub trait TelemetrySink: Send + Sync {
    fn record(&self, variant: SumVariant, len: usize, measurement: Measurement, value: f64);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopProgressSink;

impl ProgressSink for NoopProgressSink {
    fn on_case_finished(&self, _len: usize, _completed: usize, _total: usize) {}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _variant: SumVariant, _len: usize, _measurement: Measurement, _value: f64) {}
}
