// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

//! Parity and throughput harness for the `csum-core` summation kernels.
//!
//! Inputs are tiled sequences (`0..period` repeated), so every case has a
//! closed-form expected sum in addition to the naive fold.

pub mod config;
pub mod parity;
pub mod report;
pub mod sinks;
pub mod throughput;

pub use config::{DEFAULT_LENGTHS, HarnessConfig, MAX_LENGTH};
pub use parity::{ParityCase, ParityReport, check_parity};
pub use report::HarnessReport;
pub use sinks::{TracingProgressSink, TracingTelemetrySink};
pub use throughput::{ThroughputReport, ThroughputSample, measure_throughput};

use csum_core::{CsumError, ProgressSink, TelemetrySink};

/// Validates `config`, checks kernel parity, then measures throughput.
///
/// Throughput is only measured once every parity case is consistent; a
/// mismatch is returned as `CsumError::ParityMismatch`.
pub fn run_harness(
    config: &HarnessConfig,
    progress: &dyn ProgressSink,
    telemetry: &dyn TelemetrySink,
) -> Result<HarnessReport, CsumError> {
    config.validate()?;
    tracing::info!(
        lengths = config.lengths.len(),
        period = config.period,
        measure_iterations = config.measure_iterations,
        "starting harness run"
    );

    let parity = check_parity(config, progress)?;
    parity.ensure_consistent()?;
    let throughput = measure_throughput(config, telemetry)?;

    for &len in &config.lengths {
        if let Some(speedup) = throughput.speedup(len) {
            tracing::info!(len, speedup, "chunked speedup over naive");
        }
    }

    Ok(HarnessReport {
        config: config.clone(),
        parity,
        throughput,
    })
}
