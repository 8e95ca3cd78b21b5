// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

#[path = "common.rs"]
mod common;

use csum_core::{SumVariant, chunked_sum, naive_sum};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = common::ByteCursor::new(data);
    let width_seed = cursor.next_u8();
    let offset_seed = cursor.next_u8();
    let payload = cursor.remaining();

    match width_seed % 3 {
        0 => {
            let values = common::decode_i64_chunks(payload, common::MAX_VALUE_LEN);
            let offset = usize::from(offset_seed).min(values.len());
            let view = &values[offset..];
            assert_eq!(chunked_sum(view), naive_sum(view));
            for variant in SumVariant::ALL {
                assert_eq!(variant.sum(view), variant.sum(view));
            }
        }
        1 => {
            let values = common::decode_i32_chunks(payload, common::MAX_VALUE_LEN);
            let offset = usize::from(offset_seed).min(values.len());
            let view = &values[offset..];
            assert_eq!(chunked_sum(view), naive_sum(view));
        }
        _ => {
            let view: Vec<i8> = payload.iter().map(|&byte| byte as i8).collect();
            assert_eq!(chunked_sum(&view), naive_sum(&view));
        }
    }
});
