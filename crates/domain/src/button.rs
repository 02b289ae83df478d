//! Button snapshots as reported by `GET /api/buttons`.

use serde::Serialize;
use serde_json::Value;

use crate::coerce;
use crate::id::ButtonNumber;

/// State of a single physical button at poll time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonState {
    pub number: ButtonNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub pressed: bool,
    pub count: u64,
}

impl ButtonState {
    /// Decode one record, returning `None` when its number is unusable.
    #[must_use]
    pub fn from_json(record: &Value) -> Option<Self> {
        let number = ButtonNumber::from_f64(coerce::to_identifier(record.get("number"))?)?;
        Some(Self {
            number,
            name: coerce::to_label(record.get("name")),
            pressed: coerce::is_truthy(record.get("pressed")),
            count: coerce::to_count(record.get("count")),
        })
    }

    /// Display label: the device-provided name, or `Button <n>`.
    #[must_use]
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| default_label(self.number))
    }
}

/// Label used before the device provides a name.
#[must_use]
pub fn default_label(number: ButtonNumber) -> String {
    format!("Button {number}")
}

/// Decoded body of `GET /api/buttons`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonReport {
    /// Number of records in the response, valid or not.
    pub received: usize,
    /// Records with a usable number, in response order.
    pub buttons: Vec<ButtonState>,
}

impl ButtonReport {
    /// Decode a response body.
    ///
    /// Returns `None` when `buttons` is missing or not a list; the caller
    /// then leaves the rendered buttons untouched.
    #[must_use]
    pub fn from_json(body: &Value) -> Option<Self> {
        let records = body.get("buttons")?.as_array()?;
        Some(Self {
            received: records.len(),
            buttons: records.iter().filter_map(ButtonState::from_json).collect(),
        })
    }

    /// Whether the device reported no buttons at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.received == 0
    }
}
