// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

pub mod error;
pub mod observability;
pub mod summation;
pub mod tiling;

pub use error::CsumError;
pub use observability::{
    Measurement, NoopProgressSink, NoopTelemetrySink, ProgressSink, TelemetrySink,
};
pub use summation::{SumVariant, Summand, chunked_sum, naive_sum};
pub use tiling::{TILE_PERIOD, tiled_sequence, tiled_sequence_with_period, tiled_sum};
