//! Device API port: the HTTP endpoints exposed by the board firmware.

use std::future::Future;

use ledboard_domain::error::DeviceError;
use ledboard_domain::led::LedCommand;
use serde_json::Value;

/// Path of the button snapshot endpoint.
pub const BUTTONS_PATH: &str = "/api/buttons";
/// Path of the LED snapshot endpoint.
pub const LEDS_PATH: &str = "/api/leds";
/// Path of the LED command endpoint.
pub const LED_COMMAND_PATH: &str = "/api/led";

/// Client for the device HTTP API.
///
/// Snapshot calls return the raw JSON body: decoding is lenient and happens
/// in the domain layer so that one malformed record never fails the whole
/// response. Non-success statuses must be reported as
/// [`DeviceError::Status`].
pub trait DeviceApi {
    /// `GET /api/buttons`.
    fn fetch_buttons(&self) -> impl Future<Output = Result<Value, DeviceError>>;

    /// `GET /api/leds`.
    fn fetch_leds(&self) -> impl Future<Output = Result<Value, DeviceError>>;

    /// `POST /api/led` with a `{led, action}` JSON body. The response body is ignored.
    fn send_led_command(&self, command: LedCommand)
    -> impl Future<Output = Result<(), DeviceError>>;
}

/// Join an API base (possibly empty, for same-origin requests) and a path.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
