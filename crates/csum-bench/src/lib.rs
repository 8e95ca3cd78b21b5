// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Input lengths benchmarked for every kernel: around each block boundary
/// plus a page-sized and a large input.
pub const BENCH_LENGTHS: [usize; 9] = [0, 1, 7, 8, 15, 16, 127, 4095, 99_999];

/// Short label used as the criterion parameter name.
pub fn size_label(n: usize) -> String {
    match n {
        1_024 => "1K".into(),
        4_096 => "4K".into(),
        65_536 => "64K".into(),
        1_048_576 => "1M".into(),
        _ => format!("{n}"),
    }
}
