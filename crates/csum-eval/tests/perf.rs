// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use csum_core::{CsumError, NoopTelemetrySink, SumVariant};
use csum_eval::{HarnessConfig, ThroughputReport, measure_throughput};

const PERF_LEN: usize = 99_999;
const WARMUP_ITERATIONS: usize = 64;
const MEASURE_ITERATIONS: usize = 2_000;
const SLO_MIN_CHUNKED_ELEMENTS_PER_SEC: f64 = 250_000_000.0;
// Chunked may not be slower than naive by more than this factor.
const SLO_MIN_SPEEDUP: f64 = 0.8;

fn parse_env_bool(name: &str) -> bool {
    std::env::var(name)
        .ok()
        .is_some_and(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
}

fn emit_metrics_if_requested(
    chunked_elements_per_sec: f64,
    naive_elements_per_sec: f64,
    speedup: f64,
    enforce: bool,
) -> Result<(), CsumError> {
    let Some(path) = std::env::var("CSUM_PERF_METRICS_OUT").ok() else {
        return Ok(());
    };

    let payload = serde_json::json!({
        "scenario": "tiled_i64_len_99999",
        "len": PERF_LEN,
        "warmup_iterations": WARMUP_ITERATIONS,
        "measure_iterations": MEASURE_ITERATIONS,
        "chunked_elements_per_sec": chunked_elements_per_sec,
        "naive_elements_per_sec": naive_elements_per_sec,
        "speedup": speedup,
        "slo_min_chunked_elements_per_sec": SLO_MIN_CHUNKED_ELEMENTS_PER_SEC,
        "slo_min_speedup": SLO_MIN_SPEEDUP,
        "enforce": enforce,
    });
    let encoded = serde_json::to_string_pretty(&payload)
        .map_err(|err| CsumError::artifact(format!("failed encoding perf metrics: {err}")))?;

    std::fs::write(path, encoded).map_err(|err| {
        CsumError::artifact(format!("failed writing perf metrics artifact: {err}"))
    })
}

fn elements_per_sec(report: &ThroughputReport, variant: SumVariant) -> f64 {
    report
        .sample(variant, PERF_LEN)
        .map(|sample| sample.elements_per_sec)
        .expect("both variants should be measured at the perf length")
}

#[test]
fn chunked_sum_perf_contract() {
    let enforce = parse_env_bool("CSUM_PERF_ENFORCE");
    let config = HarnessConfig {
        lengths: vec![PERF_LEN],
        warmup_iterations: WARMUP_ITERATIONS,
        measure_iterations: MEASURE_ITERATIONS,
        ..HarnessConfig::default()
    };

    let report = measure_throughput(&config, &NoopTelemetrySink)
        .expect("throughput measurement should succeed");
    let chunked = elements_per_sec(&report, SumVariant::Chunked);
    let naive = elements_per_sec(&report, SumVariant::Naive);
    let speedup = report
        .speedup(PERF_LEN)
        .expect("speedup should be defined when both variants ran");

    println!(
        "csum perf: len={} iterations={} chunked_elements_per_sec={:.2} naive_elements_per_sec={:.2} speedup={:.3} enforce={}",
        PERF_LEN, MEASURE_ITERATIONS, chunked, naive, speedup, enforce
    );

    emit_metrics_if_requested(chunked, naive, speedup, enforce)
        .expect("metrics artifact emission should succeed");

    if enforce {
        assert!(
            chunked >= SLO_MIN_CHUNKED_ELEMENTS_PER_SEC,
            "chunked throughput SLO failed: observed={chunked:.2} elements/sec, threshold={} elements/sec",
            SLO_MIN_CHUNKED_ELEMENTS_PER_SEC
        );
        assert!(
            speedup >= SLO_MIN_SPEEDUP,
            "chunked/naive speedup guard failed: observed={speedup:.3}, minimum={SLO_MIN_SPEEDUP}"
        );
    } else {
        assert!(chunked.is_finite() && chunked > 0.0);
        assert!(naive.is_finite() && naive > 0.0);
    }
}
