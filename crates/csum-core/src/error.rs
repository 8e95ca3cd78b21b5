// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

/// Structured error type for the csum harness APIs.
///
/// The summation kernels themselves are total and never return this type.
/// It covers configuration, oracle disagreement and report persistence.
#[derive(thiserror::Error, Debug)]
pub enum CsumError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parity mismatch: {0}")]
    ParityMismatch(String),
    #[error("resource limit exceeded: {0}")]
    ResourceLimit(String),
    #[error("artifact error: {0}")]
    Artifact(String),
}

impl CsumError {
    /// Creates a `CsumError::InvalidInput`.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Creates a `CsumError::ParityMismatch`.
    pub fn parity_mismatch(msg: impl Into<String>) -> Self {
        Self::ParityMismatch(msg.into())
    }

    /// Creates a `CsumError::ResourceLimit`.
    pub fn resource_limit(msg: impl Into<String>) -> Self {
        Self::ResourceLimit(msg.into())
    }

    /// Creates a `CsumError::Artifact`.
    pub fn artifact(msg: impl Into<String>) -> Self {
        Self::Artifact(msg.into())
    }
}
