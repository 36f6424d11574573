//! Unified error types.

use thiserror::Error;

/// Top-level error for response normalization.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// The response envelope carried a non-success error code. The payload's
    /// own `result` message is kept verbatim for diagnostics.
    #[error("exchange returned an error: {0}")]
    Response(String),

    #[error("invalid decimal: {0}")]
    Decimal(#[from] rust_decimal::Error),

    #[error("invalid timestamp: {0}")]
    Timestamp(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
