//! HTTP adapter error types.

use ledboard_domain::error::DeviceError;

/// Errors specific to the reqwest client.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The request could not be sent or the connection failed.
    #[error("request failed")]
    Request(#[source] reqwest::Error),

    /// The device answered with a non-success status.
    #[error("HTTP error {0}")]
    Status(u16),

    /// The response body is not valid JSON.
    #[error("failed to decode response body")]
    Decode(#[source] reqwest::Error),
}

impl HttpError {
    /// Convert into a [`DeviceError`] for propagation across the port boundary.
    #[must_use]
    pub fn into_domain(self) -> DeviceError {
        match self {
            Self::Request(err) => DeviceError::Network(err.to_string()),
            Self::Status(code) => DeviceError::Status(code),
            Self::Decode(err) => DeviceError::Decode(err.to_string()),
        }
    }
}

impl From<HttpError> for DeviceError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}
