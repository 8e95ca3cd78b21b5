// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::{HarnessConfig, ParityReport, ThroughputReport};
use csum_core::CsumError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Combined output of one harness run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarnessReport {
    pub config: HarnessConfig,
    pub parity: ParityReport,
    pub throughput: ThroughputReport,
}

impl HarnessReport {
    pub fn to_json_pretty(&self) -> Result<String, CsumError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| CsumError::artifact(format!("failed to encode harness report: {err}")))
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CsumError> {
        serde_json::from_str(raw)
            .map_err(|err| CsumError::artifact(format!("failed to decode harness report: {err}")))
    }

    /// Writes the report as pretty JSON, creating parent directories as needed.
    pub fn write_json(&self, path: &Path) -> Result<(), CsumError> {
        let encoded = self.to_json_pretty()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|err| {
                CsumError::artifact(format!(
                    "failed to create report directory {}: {err}",
                    parent.display()
                ))
            })?;
        }
        fs::write(path, encoded).map_err(|err| {
            CsumError::artifact(format!(
                "failed writing harness report {}: {err}",
                path.display()
            ))
        })
    }
}
