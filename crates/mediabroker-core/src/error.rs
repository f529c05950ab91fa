//! Error types for the broker.

use thiserror::Error;

/// Errors a backend module can report while materializing an encoder.
///
/// These never cross the broker's public boundary: the fallback engine
/// logs them and advances to the next candidate.
#[derive(Debug, Error)]
pub enum EncoderError {
    /// The module does not support the requested configuration.
    #[error("configuration not supported: {0}")]
    NotSupported(String),

    /// Encoder initialization failed.
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// The backend ran out of encoder sessions or memory.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(String),

    /// The remote process hosting the backend went away.
    #[error("remote process unavailable: {0}")]
    RemoteUnavailable(String),
}

/// Errors surfaced by the broker itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BrokerError {
    /// Every candidate module declined or failed; nothing can serve the
    /// request. Carries no per-backend detail.
    #[error("no encoder available for the requested configuration")]
    NoEncoderAvailable,
}
