//! LED snapshots (`GET /api/leds`) and control commands (`POST /api/led`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce;
use crate::error::ValidationError;
use crate::id::LedNumber;

/// State of a single LED at poll time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedState {
    pub number: LedNumber,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub is_on: bool,
}

impl LedState {
    /// Decode one record, returning `None` when its number is unusable.
    #[must_use]
    pub fn from_json(record: &Value) -> Option<Self> {
        let number = LedNumber::from_f64(coerce::to_identifier(record.get("number"))?)?;
        Some(Self {
            number,
            name: coerce::to_label(record.get("name")),
            is_on: coerce::is_truthy(record.get("is_on")),
        })
    }

    /// Display label: the device-provided name, or `LED <n>`.
    #[must_use]
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| default_label(self.number))
    }
}

/// Label used before the device provides a name.
#[must_use]
pub fn default_label(number: LedNumber) -> String {
    format!("LED {number}")
}

/// Decoded body of `GET /api/leds`, sorted by LED number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedReport {
    pub leds: Vec<LedState>,
}

impl LedReport {
    /// Decode a response body. A missing or malformed `leds` field is an
    /// empty report.
    #[must_use]
    pub fn from_json(body: &Value) -> Self {
        let mut leds: Vec<LedState> = body
            .get("leds")
            .and_then(Value::as_array)
            .map(|records| records.iter().filter_map(LedState::from_json).collect())
            .unwrap_or_default();
        leds.sort_by_key(|led| led.number);
        Self { leds }
    }

    /// Whether no usable LED was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    /// Iterate over reported LED numbers in ascending order.
    pub fn numbers(&self) -> impl Iterator<Item = LedNumber> + '_ {
        self.leds.iter().map(|led| led.number)
    }
}

/// Action understood by `POST /api/led`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedAction {
    On,
    Off,
    Toggle,
}

impl LedAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
            Self::Toggle => "toggle",
        }
    }
}

impl fmt::Display for LedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            "toggle" => Ok(Self::Toggle),
            _ => Err(ValidationError::UnknownAction(s.to_string())),
        }
    }
}

/// Body of `POST /api/led`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedCommand {
    pub led: LedNumber,
    pub action: LedAction,
}
