// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use csum_core::{CsumError, SumVariant, TILE_PERIOD};
use serde::{Deserialize, Serialize};

/// Input lengths exercised when no explicit list is configured.
pub const DEFAULT_LENGTHS: [usize; 9] = [0, 1, 7, 8, 15, 16, 127, 4095, 99_999];

/// Largest single input the harness will materialize (2 GiB of `i64`).
pub const MAX_LENGTH: usize = 1 << 28;

pub const ENV_LENGTHS: &str = "CSUM_LENGTHS";
pub const ENV_PERIOD: &str = "CSUM_PERIOD";
pub const ENV_WARMUP_ITERATIONS: &str = "CSUM_WARMUP_ITERATIONS";
pub const ENV_MEASURE_ITERATIONS: &str = "CSUM_MEASURE_ITERATIONS";

/// Harness settings shared by parity checks and throughput measurement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    pub lengths: Vec<usize>,
    pub period: usize,
    pub warmup_iterations: usize,
    pub measure_iterations: usize,
    pub variants: Vec<SumVariant>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            lengths: DEFAULT_LENGTHS.to_vec(),
            period: TILE_PERIOD,
            warmup_iterations: 16,
            measure_iterations: 200,
            variants: SumVariant::ALL.to_vec(),
        }
    }
}

impl HarnessConfig {
    pub fn validate(&self) -> Result<(), CsumError> {
        if self.lengths.is_empty() {
            return Err(CsumError::invalid_input(
                "harness.lengths must contain at least one length; got []",
            ));
        }
        if let Some((idx, &len)) = self
            .lengths
            .iter()
            .enumerate()
            .find(|(_, len)| **len > MAX_LENGTH)
        {
            return Err(CsumError::resource_limit(format!(
                "harness.lengths[{idx}]={len} exceeds the maximum of {MAX_LENGTH} elements"
            )));
        }
        if self.period == 0 {
            return Err(CsumError::invalid_input(
                "harness.period must be > 0; got 0",
            ));
        }
        if i64::try_from(self.period).is_err() {
            return Err(CsumError::invalid_input(format!(
                "harness.period must be <= i64::MAX; got {}",
                self.period
            )));
        }
        if self.measure_iterations == 0 {
            return Err(CsumError::invalid_input(
                "harness.measure_iterations must be > 0; got 0",
            ));
        }
        if self.variants.is_empty() {
            return Err(CsumError::invalid_input(
                "harness.variants must name at least one kernel; got []",
            ));
        }
        for (idx, variant) in self.variants.iter().enumerate() {
            if self.variants[..idx].contains(variant) {
                return Err(CsumError::invalid_input(format!(
                    "harness.variants must be unique: index {idx} repeats {variant}"
                )));
            }
        }
        Ok(())
    }

    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, CsumError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| CsumError::invalid_input(format!("invalid harness config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `CSUM_*` environment overrides on top of `self`.
    pub fn with_env_overrides(self) -> Result<Self, CsumError> {
        self.with_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides resolved through `lookup`, which maps a variable name
    /// to its raw value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, CsumError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_LENGTHS) {
            self.lengths = parse_lengths(ENV_LENGTHS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PERIOD) {
            self.period = parse_usize(ENV_PERIOD, &raw)?;
        }
        if let Some(raw) = lookup(ENV_WARMUP_ITERATIONS) {
            self.warmup_iterations = parse_usize(ENV_WARMUP_ITERATIONS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MEASURE_ITERATIONS) {
            self.measure_iterations = parse_usize(ENV_MEASURE_ITERATIONS, &raw)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn max_len(&self) -> usize {
        self.lengths.iter().copied().max().unwrap_or(0)
    }
}

fn parse_usize(name: &str, raw: &str) -> Result<usize, CsumError> {
    let trimmed = raw.trim().replace('_', "");
    trimmed.parse::<usize>().map_err(|err| {
        CsumError::invalid_input(format!("{name} must be a non-negative integer; got {raw:?}: {err}"))
    })
}

fn parse_lengths(name: &str, raw: &str) -> Result<Vec<usize>, CsumError> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse_usize(name, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_LENGTHS, ENV_LENGTHS, ENV_MEASURE_ITERATIONS, ENV_PERIOD, HarnessConfig,
        MAX_LENGTH,
    };
    use csum_core::{CsumError, SumVariant};
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn default_config_is_valid() {
        let config = HarnessConfig::default();
        config.validate().expect("default config should validate");
        assert_eq!(config.lengths, DEFAULT_LENGTHS.to_vec());
        assert_eq!(config.period, 1_000);
        assert_eq!(config.max_len(), 99_999);
    }

    #[test]
    fn validate_rejects_degenerate_settings() {
        let cases = [
            (
                HarnessConfig {
                    lengths: vec![],
                    ..HarnessConfig::default()
                },
                "harness.lengths",
            ),
            (
                HarnessConfig {
                    period: 0,
                    ..HarnessConfig::default()
                },
                "harness.period",
            ),
            (
                HarnessConfig {
                    measure_iterations: 0,
                    ..HarnessConfig::default()
                },
                "harness.measure_iterations",
            ),
            (
                HarnessConfig {
                    variants: vec![],
                    ..HarnessConfig::default()
                },
                "harness.variants",
            ),
            (
                HarnessConfig {
                    variants: vec![SumVariant::Naive, SumVariant::Naive],
                    ..HarnessConfig::default()
                },
                "unique",
            ),
        ];

        for (config, needle) in cases {
            let err = config.validate().expect_err("config should be rejected");
            assert!(matches!(err, CsumError::InvalidInput(_)), "{err}");
            assert!(err.to_string().contains(needle), "{err} missing {needle}");
        }
    }

    #[test]
    fn validate_rejects_oversized_lengths_as_resource_limit() {
        let config = HarnessConfig {
            lengths: vec![8, MAX_LENGTH + 1],
            ..HarnessConfig::default()
        };
        let err = config.validate().expect_err("oversized length should fail");
        assert!(matches!(err, CsumError::ResourceLimit(_)));
        assert!(err.to_string().contains("harness.lengths[1]"));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn validate_rejects_period_beyond_i64_range() {
        let config = HarnessConfig {
            period: i64::MAX as usize + 1,
            ..HarnessConfig::default()
        };
        let err = config.validate().expect_err("oversized period should fail");
        assert!(matches!(err, CsumError::InvalidInput(_)));
        assert!(err.to_string().contains("harness.period must be <= i64::MAX"));

        let widest = HarnessConfig {
            period: i64::MAX as usize,
            ..HarnessConfig::default()
        };
        widest.validate().expect("i64::MAX period should be accepted");
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = HarnessConfig::from_json_str(r#"{"lengths": [3, 9], "variants": ["chunked"]}"#)
            .expect("partial config should parse");
        assert_eq!(config.lengths, vec![3, 9]);
        assert_eq!(config.variants, vec![SumVariant::Chunked]);
        assert_eq!(config.period, 1_000);
        assert_eq!(config.measure_iterations, 200);
    }

    #[test]
    fn json_errors_surface_as_invalid_input() {
        let err = HarnessConfig::from_json_str(r#"{"variants": ["unrolled"]}"#)
            .expect_err("unknown variant should fail");
        assert!(err.to_string().starts_with("invalid input: invalid harness config"));

        let err = HarnessConfig::from_json_str(r#"{"period": 0}"#)
            .expect_err("zero period should fail validation");
        assert!(err.to_string().contains("harness.period"));
    }

    #[test]
    fn overrides_replace_selected_fields() {
        let config = HarnessConfig::default()
            .with_overrides(lookup_from(&[
                (ENV_LENGTHS, " 0, 8 ,99_999,"),
                (ENV_PERIOD, "64"),
                (ENV_MEASURE_ITERATIONS, "3"),
            ]))
            .expect("overrides should apply");
        assert_eq!(config.lengths, vec![0, 8, 99_999]);
        assert_eq!(config.period, 64);
        assert_eq!(config.measure_iterations, 3);
        assert_eq!(config.warmup_iterations, 16);
    }

    #[test]
    fn overrides_reject_malformed_values() {
        let err = HarnessConfig::default()
            .with_overrides(lookup_from(&[(ENV_PERIOD, "-4")]))
            .expect_err("negative period should fail");
        assert!(err.to_string().contains("CSUM_PERIOD"));

        let err = HarnessConfig::default()
            .with_overrides(lookup_from(&[(ENV_LENGTHS, " , ")]))
            .expect_err("empty length list should fail validation");
        assert!(err.to_string().contains("harness.lengths"));
    }

    #[test]
    fn no_overrides_leaves_config_untouched() {
        let config = HarnessConfig::default()
            .with_overrides(|_| None)
            .expect("defaults should validate");
        assert_eq!(config, HarnessConfig::default());
    }
}
