// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use crate::CsumError;

/// Width of the default tile: inputs repeat `0..TILE_PERIOD`.
pub const TILE_PERIOD: usize = 1_000;

/// Returns `n` elements tiling the pattern `0..1000`, so element `i` is `i % 1000`.
pub fn tiled_sequence(n: usize) -> Vec<i64> {
    (0..n).map(|idx| (idx % TILE_PERIOD) as i64).collect()
}

/// Returns `n` elements tiling the pattern `0..period`.
///
/// `period` must be in `1..=i64::MAX`.
pub fn tiled_sequence_with_period(n: usize, period: usize) -> Result<Vec<i64>, CsumError> {
    validate_period(period)?;
    Ok((0..n).map(|idx| (idx % period) as i64).collect())
}

/// Closed-form sum of [`tiled_sequence_with_period`], reduced with the same
/// wrapping policy as the kernels.
///
/// With `q = n / period` full tiles and `r = n % period` trailing elements the
/// sum is `q * period * (period - 1) / 2 + r * (r - 1) / 2`.
pub fn tiled_sum(n: usize, period: usize) -> Result<i64, CsumError> {
    validate_period(period)?;

    let p = period as u128;
    let q = (n / period) as u128;
    let r = (n % period) as u128;

    // Both triangle numbers are computed exactly; only the final combination wraps.
    let full_tile = p * (p - 1) / 2;
    let tail = if r == 0 { 0 } else { r * (r - 1) / 2 };
    let total = q.wrapping_mul(full_tile).wrapping_add(tail);

    Ok(total as u64 as i64)
}

fn validate_period(period: usize) -> Result<(), CsumError> {
    if period == 0 {
        return Err(CsumError::invalid_input("tile period must be > 0; got 0"));
    }
    if period as u128 > i64::MAX as u128 {
        return Err(CsumError::invalid_input(format!(
            "tile period must be <= i64::MAX; got {period}"
        )));
    }
    Ok(())
}
