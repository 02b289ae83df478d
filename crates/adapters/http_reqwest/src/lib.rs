//! # ledboard-adapter-http-reqwest
//!
//! Implements the [`DeviceApi`] port over HTTP with `reqwest`.
//!
//! The client keeps no state beyond its connection pool: every call is a
//! single request, with no retry and no timeout beyond the transport's own.

mod error;

pub use error::HttpError;

use std::future::Future;

use ledboard_app::ports::DeviceApi;
use ledboard_app::ports::device_api::{BUTTONS_PATH, LED_COMMAND_PATH, LEDS_PATH, endpoint};
use ledboard_domain::error::DeviceError;
use ledboard_domain::led::LedCommand;
use serde_json::Value;

/// Device API client for a board reachable at `base_url`.
#[derive(Debug, Clone)]
pub struct ReqwestDeviceApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestDeviceApi {
    /// Create a client for `base_url` (e.g. `http://192.168.7.1`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest` client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, HttpError> {
        let url = endpoint(&self.base_url, path);
        tracing::trace!(%url, "GET");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(HttpError::Request)?;
        let resp = check_response(resp)?;
        resp.json::<Value>().await.map_err(HttpError::Decode)
    }

    async fn post_command(&self, command: LedCommand) -> Result<(), HttpError> {
        let url = endpoint(&self.base_url, LED_COMMAND_PATH);
        tracing::trace!(%url, led = %command.led, action = %command.action, "POST");
        let resp = self
            .client
            .post(&url)
            .json(&command)
            .send()
            .await
            .map_err(HttpError::Request)?;
        check_response(resp)?;
        Ok(())
    }
}

/// Turn a non-2xx response into [`HttpError::Status`].
fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, HttpError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(HttpError::Status(status.as_u16()))
    }
}

impl DeviceApi for ReqwestDeviceApi {
    fn fetch_buttons(&self) -> impl Future<Output = Result<Value, DeviceError>> {
        async move { Ok(self.get_json(BUTTONS_PATH).await?) }
    }

    fn fetch_leds(&self) -> impl Future<Output = Result<Value, DeviceError>> {
        async move { Ok(self.get_json(LEDS_PATH).await?) }
    }

    fn send_led_command(
        &self,
        command: LedCommand,
    ) -> impl Future<Output = Result<(), DeviceError>> {
        async move { Ok(self.post_command(command).await?) }
    }
}
