//! Common error types used across the workspace.
//!
//! Each layer converts its own failures into one of these typed errors via
//! `#[from]`; adapters map their client errors into [`DeviceError`].

use crate::id::LedNumber;

/// Top-level error for dashboard operations.
#[derive(Debug, thiserror::Error)]
pub enum LedboardError {
    /// Input rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The LED is not part of the most recently reported set.
    #[error("LED {0} is not available on this board")]
    UnavailableLed(LedNumber),

    /// The device API could not be reached or answered with an error.
    #[error(transparent)]
    Device(#[from] DeviceError),
}

/// Validation failures for user-provided values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The value is not a finite number above zero.
    #[error("invalid number {0:?}, expected a positive number")]
    InvalidNumber(String),

    /// The LED action is not one the device understands.
    #[error("unknown LED action {0:?}, expected on, off or toggle")]
    UnknownAction(String),

    /// The polling interval is zero.
    #[error("refresh interval must be non-zero")]
    ZeroRefreshInterval,
}

/// Failure talking to the device HTTP API.
///
/// Messages are kept as strings so that both the native and the browser
/// clients can produce them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// Transport failure: connection refused, DNS, aborted request, …
    #[error("network error: {0}")]
    Network(String),

    /// The device answered with a non-success status.
    #[error("HTTP error {0}")]
    Status(u16),

    /// The body is not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_status_error_like_a_browser_fetch() {
        assert_eq!(DeviceError::Status(500).to_string(), "HTTP error 500");
    }

    #[test]
    fn should_mention_led_number_when_unavailable() {
        let number = LedNumber::new(5).unwrap();
        let err = LedboardError::UnavailableLed(number);
        assert_eq!(err.to_string(), "LED 5 is not available on this board");
    }

    #[test]
    fn should_be_transparent_over_device_error() {
        let err: LedboardError = DeviceError::Network("connection refused".into()).into();
        assert_eq!(err.to_string(), "network error: connection refused");
    }

    #[test]
    fn should_convert_validation_error() {
        let err: LedboardError = ValidationError::UnknownAction("blink".into()).into();
        assert!(matches!(
            err,
            LedboardError::Validation(ValidationError::UnknownAction(_))
        ));
    }
}
