// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(dead_code)]

pub const MAX_VALUE_LEN: usize = 4096;

pub struct ByteCursor<'a> {
    data: &'a [u8],
    idx: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, idx: 0 }
    }

    pub fn next_u8(&mut self) -> u8 {
        let value = self.data.get(self.idx).copied().unwrap_or(0);
        self.idx = self.idx.saturating_add(1);
        value
    }

    pub fn next_u16(&mut self) -> u16 {
        let bytes = [self.next_u8(), self.next_u8()];
        u16::from_le_bytes(bytes)
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut bytes = [0_u8; 8];
        for byte in &mut bytes {
            *byte = self.next_u8();
        }
        u64::from_le_bytes(bytes)
    }

    pub fn remaining(&self) -> &[u8] {
        if self.idx >= self.data.len() {
            &[]
        } else {
            &self.data[self.idx..]
        }
    }
}

pub fn decode_i64_chunks(bytes: &[u8], max_values: usize) -> Vec<i64> {
    let capped = max_values.min(MAX_VALUE_LEN);
    bytes
        .chunks_exact(8)
        .take(capped)
        .map(|chunk| {
            let mut raw = [0_u8; 8];
            raw.copy_from_slice(chunk);
            i64::from_le_bytes(raw)
        })
        .collect()
}

pub fn decode_i32_chunks(bytes: &[u8], max_values: usize) -> Vec<i32> {
    let capped = max_values.min(MAX_VALUE_LEN);
    bytes
        .chunks_exact(4)
        .take(capped)
        .map(|chunk| {
            let mut raw = [0_u8; 4];
            raw.copy_from_slice(chunk);
            i32::from_le_bytes(raw)
        })
        .collect()
}

pub fn bounded(seed: u16, min: usize, max_inclusive: usize) -> usize {
    if max_inclusive <= min {
        min
    } else {
        min + (usize::from(seed) % (max_inclusive - min + 1))
    }
}
