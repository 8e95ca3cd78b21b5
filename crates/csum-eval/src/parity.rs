// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::HarnessConfig;
use csum_core::{
    CsumError, ProgressSink, chunked_sum, naive_sum, tiled_sequence_with_period, tiled_sum,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Outcome of running both kernels and the closed form on one tiled input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityCase {
    pub len: usize,
    pub expected: i64,
    pub naive: i64,
    pub chunked: i64,
    /// Both kernels returned the same value on a second call.
    pub repeat_stable: bool,
}

impl ParityCase {
    pub fn is_consistent(&self) -> bool {
        self.repeat_stable && self.naive == self.expected && self.chunked == self.expected
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityReport {
    pub period: usize,
    pub cases: Vec<ParityCase>,
}

impl ParityReport {
    pub fn mismatches(&self) -> Vec<&ParityCase> {
        self.cases
            .iter()
            .filter(|case| !case.is_consistent())
            .collect()
    }

    pub fn is_consistent(&self) -> bool {
        self.cases.iter().all(ParityCase::is_consistent)
    }

    /// Returns `CsumError::ParityMismatch` describing the first inconsistent case.
    pub fn ensure_consistent(&self) -> Result<(), CsumError> {
        let mismatches = self.mismatches();
        let Some(first) = mismatches.first() else {
            return Ok(());
        };
        Err(CsumError::parity_mismatch(format!(
            "{} of {} cases disagree; first at len={}: expected={}, naive={}, chunked={}, repeat_stable={}",
            mismatches.len(),
            self.cases.len(),
            first.len,
            first.expected,
            first.naive,
            first.chunked,
            first.repeat_stable
        )))
    }
}

/// Runs both kernels on a tiled input of every configured length and compares
/// them against the closed-form tiled sum.
pub fn check_parity(
    config: &HarnessConfig,
    progress: &dyn ProgressSink,
) -> Result<ParityReport, CsumError> {
    config.validate()?;

    let total = config.lengths.len();
    let mut cases = Vec::with_capacity(total);

    for (idx, &len) in config.lengths.iter().enumerate() {
        let values = tiled_sequence_with_period(len, config.period)?;
        let expected = tiled_sum(len, config.period)?;

        let naive = naive_sum(&values);
        let chunked = chunked_sum(&values);
        let repeat_stable = naive_sum(&values) == naive && chunked_sum(&values) == chunked;

        let case = ParityCase {
            len,
            expected,
            naive,
            chunked,
            repeat_stable,
        };
        if case.is_consistent() {
            debug!(len, expected, "parity case consistent");
        } else {
            warn!(
                len,
                expected, naive, chunked, repeat_stable, "parity case mismatch"
            );
        }
        cases.push(case);
        progress.on_case_finished(len, idx + 1, total);
    }

    let report = ParityReport {
        period: config.period,
        cases,
    };
    info!(
        cases = report.cases.len(),
        mismatches = report.mismatches().len(),
        period = report.period,
        "parity check finished"
    );
    Ok(report)
}
