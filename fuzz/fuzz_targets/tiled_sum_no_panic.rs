// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

#[path = "common.rs"]
mod common;

use csum_core::{chunked_sum, tiled_sequence_with_period, tiled_sum};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = common::ByteCursor::new(data);
    let n = common::bounded(cursor.next_u16(), 0, common::MAX_VALUE_LEN);
    let period = usize::try_from(cursor.next_u64()).unwrap_or(usize::MAX);

    let closed = tiled_sum(n, period);
    let materialized = tiled_sequence_with_period(n, period);
    match (closed, materialized) {
        (Ok(expected), Ok(values)) => assert_eq!(chunked_sum(&values), expected),
        (Err(_), Err(_)) => {}
        (closed, materialized) => panic!(
            "closed form and generator disagree on validity: {:?} vs {:?}",
            closed.map(|_| ()),
            materialized.map(|_| ())
        ),
    }

    // Huge periods still have a closed form for lengths beyond one tile.
    let _ = tiled_sum(usize::MAX, period);
});
