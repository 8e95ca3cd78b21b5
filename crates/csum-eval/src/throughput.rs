// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::HarnessConfig;
use csum_core::{CsumError, Measurement, SumVariant, TelemetrySink, tiled_sequence_with_period};
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::Instant;
use tracing::{debug, info};

/// Wall-clock timing of one kernel on one input length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThroughputSample {
    pub variant: SumVariant,
    pub len: usize,
    pub iterations: usize,
    pub elapsed_ns: u64,
    pub ns_per_call: f64,
    pub elements_per_sec: f64,
    /// Result of the last timed call, kept so the work cannot be elided.
    pub checksum: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThroughputReport {
    pub samples: Vec<ThroughputSample>,
}

impl ThroughputReport {
    pub fn sample(&self, variant: SumVariant, len: usize) -> Option<&ThroughputSample> {
        self.samples
            .iter()
            .find(|sample| sample.variant == variant && sample.len == len)
    }

    /// Naive time per call divided by chunked time per call for `len`.
    ///
    /// Returns `None` unless both kernels were measured at `len` with a
    /// non-zero chunked timing.
    pub fn speedup(&self, len: usize) -> Option<f64> {
        let naive = self.sample(SumVariant::Naive, len)?;
        let chunked = self.sample(SumVariant::Chunked, len)?;
        if chunked.ns_per_call <= 0.0 {
            return None;
        }
        Some(naive.ns_per_call / chunked.ns_per_call)
    }
}

/// Times every configured kernel on a tiled input of every configured length.
pub fn measure_throughput(
    config: &HarnessConfig,
    telemetry: &dyn TelemetrySink,
) -> Result<ThroughputReport, CsumError> {
    config.validate()?;

    let mut report = ThroughputReport {
        samples: Vec::with_capacity(config.lengths.len() * config.variants.len()),
    };

    for &len in &config.lengths {
        let values = tiled_sequence_with_period(len, config.period)?;
        for &variant in &config.variants {
            let sample = measure_one(
                variant,
                &values,
                config.warmup_iterations,
                config.measure_iterations,
            );
            telemetry.record(variant, len, Measurement::NsPerCall, sample.ns_per_call);
            telemetry.record(
                variant,
                len,
                Measurement::ElementsPerSec,
                sample.elements_per_sec,
            );
            debug!(
                variant = variant.name(),
                len,
                ns_per_call = sample.ns_per_call,
                elements_per_sec = sample.elements_per_sec,
                "throughput sample"
            );
            report.samples.push(sample);
        }
    }

    info!(
        samples = report.samples.len(),
        max_len = config.max_len(),
        "throughput measurement finished"
    );
    Ok(report)
}

fn measure_one(
    variant: SumVariant,
    values: &[i64],
    warmup_iterations: usize,
    measure_iterations: usize,
) -> ThroughputSample {
    for _ in 0..warmup_iterations {
        black_box(variant.sum(black_box(values)));
    }

    let mut checksum = 0_i64;
    let started_at = Instant::now();
    for _ in 0..measure_iterations {
        checksum = black_box(variant.sum(black_box(values)));
    }
    let elapsed = started_at.elapsed();

    let elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
    let ns_per_call = elapsed_ns as f64 / measure_iterations as f64;
    let elements = (values.len() as f64) * (measure_iterations as f64);
    let elements_per_sec = elements / elapsed.as_secs_f64().max(1e-9);

    ThroughputSample {
        variant,
        len: values.len(),
        iterations: measure_iterations,
        elapsed_ns,
        ns_per_call,
        elements_per_sec,
        checksum,
    }
}
