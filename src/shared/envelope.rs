//! Response envelope check shared by the enveloped endpoints.
//!
//! Coinone wraps order-book, trade-history, and balance responses in a
//! business-level status envelope: `errorCode` (string) plus a human-readable
//! `result` message. Ticker and order-info responses carry no envelope.

use crate::error::ExchangeError;

/// The envelope error code denoting success.
pub const SUCCESS_CODE: &str = "0";

/// Fails with [`ExchangeError::Response`] whenever `error_code` is not the
/// success sentinel, carrying the exchange's own `result` message verbatim.
pub fn ensure_success(error_code: &str, result: &str) -> Result<(), ExchangeError> {
    if error_code != SUCCESS_CODE {
        return Err(ExchangeError::Response(result.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_sentinel_passes() {
        assert!(ensure_success("0", "success").is_ok());
    }

    #[test]
    fn test_error_code_carries_result_message() {
        let err = ensure_success("131", "Invalid API permission").unwrap_err();
        match err {
            ExchangeError::Response(msg) => assert_eq!(msg, "Invalid API permission"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_display_is_user_facing() {
        let err = ensure_success("405", "server maintenance").unwrap_err();
        assert_eq!(
            err.to_string(),
            "exchange returned an error: server maintenance"
        );
    }
}
