//! Device API client wrapping `gloo-net` for calls to `/api/*`.

use std::future::Future;

use gloo_net::http::{Request, Response};
use ledboard_app::ports::DeviceApi;
use ledboard_app::ports::device_api::{BUTTONS_PATH, LED_COMMAND_PATH, LEDS_PATH, endpoint};
use ledboard_domain::error::DeviceError;
use ledboard_domain::led::LedCommand;
use serde_json::Value;

/// Talks to the board through the browser's `fetch`.
///
/// An empty base URL keeps requests same-origin, which is how the page is
/// served by the board itself.
#[derive(Debug, Clone, Default)]
pub struct GlooDeviceApi {
    base_url: String,
}

impl GlooDeviceApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoint(&self.base_url, path)
    }

    async fn get_json(&self, path: &str) -> Result<Value, DeviceError> {
        let resp = check_response(Request::get(&self.url(path)).send().await.map_err(network)?)?;
        resp.json::<Value>()
            .await
            .map_err(|err| DeviceError::Decode(err.to_string()))
    }

    async fn post_command(&self, command: LedCommand) -> Result<(), DeviceError> {
        let request = Request::post(&self.url(LED_COMMAND_PATH))
            .json(&command)
            .map_err(|err| DeviceError::Decode(err.to_string()))?;
        check_response(request.send().await.map_err(network)?)?;
        Ok(())
    }
}

fn network(err: gloo_net::Error) -> DeviceError {
    DeviceError::Network(err.to_string())
}

/// Check the HTTP response status and turn non-2xx into an error.
fn check_response(resp: Response) -> Result<Response, DeviceError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(DeviceError::Status(resp.status()))
    }
}

impl DeviceApi for GlooDeviceApi {
    fn fetch_buttons(&self) -> impl Future<Output = Result<Value, DeviceError>> {
        self.get_json(BUTTONS_PATH)
    }

    fn fetch_leds(&self) -> impl Future<Output = Result<Value, DeviceError>> {
        self.get_json(LEDS_PATH)
    }

    fn send_led_command(
        &self,
        command: LedCommand,
    ) -> impl Future<Output = Result<(), DeviceError>> {
        self.post_command(command)
    }
}
