// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use std::fmt::Debug;

/// Fixed-width integer accumulated with two's-complement wrapping addition.
///
/// Wrapping addition is associative and commutative modulo `2^w`, so any
/// regrouping of the additions yields the same bits as a left-to-right fold.
pub trait Summand: Copy + Eq + Debug + Send + Sync + 'static {
    /// Additive identity.
    const ZERO: Self;

    fn add_wrapping(self, rhs: Self) -> Self;
}

macro_rules! impl_summand {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Summand for $ty {
                const ZERO: Self = 0;

                #[inline(always)]
                fn add_wrapping(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
            }
        )*
    };
}

impl_summand!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

/// Returns the sum of `values` folded left-to-right into one running total.
///
/// Empty input returns `0`. Overflow wraps.
pub fn naive_sum<T: Summand>(values: &[T]) -> T {
    let mut total = T::ZERO;
    for &value in values {
        total = total.add_wrapping(value);
    }
    total
}

/// Returns the same value as [`naive_sum`], computed over blocks of 8 with
/// four independent pair sums per block.
///
/// Tail policy after the 8-wide blocks: one 4-wide step, one 2-wide step,
/// then a single trailing element.
pub fn chunked_sum<T: Summand>(values: &[T]) -> T {
    let len = values.len();
    let mut total = T::ZERO;
    let mut cursor = 0;

    while len - cursor >= 8 {
        let block = &values[cursor..cursor + 8];
        let mut a = block[0].add_wrapping(block[1]);
        let mut b = block[2].add_wrapping(block[3]);
        let c = block[4].add_wrapping(block[5]);
        let d = block[6].add_wrapping(block[7]);
        a = a.add_wrapping(c);
        b = b.add_wrapping(d);
        total = total.add_wrapping(a.add_wrapping(b));
        cursor += 8;
    }

    if len - cursor >= 4 {
        let block = &values[cursor..cursor + 4];
        let a = block[0].add_wrapping(block[1]);
        let b = block[2].add_wrapping(block[3]);
        total = total.add_wrapping(a.add_wrapping(b));
        cursor += 4;
    }

    if len - cursor >= 2 {
        total = total.add_wrapping(values[cursor].add_wrapping(values[cursor + 1]));
        cursor += 2;
    }

    if len - cursor == 1 {
        total = total.add_wrapping(values[cursor]);
    }

    total
}

/// Names one of the two summation kernels.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SumVariant {
    Naive,
    Chunked,
}

impl SumVariant {
    pub const ALL: [SumVariant; 2] = [SumVariant::Naive, SumVariant::Chunked];

    pub fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Chunked => "chunked",
        }
    }

    /// Runs the named kernel over `values`.
    #[inline]
    pub fn sum<T: Summand>(self, values: &[T]) -> T {
        match self {
            Self::Naive => naive_sum(values),
            Self::Chunked => chunked_sum(values),
        }
    }
}

impl std::fmt::Display for SumVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
