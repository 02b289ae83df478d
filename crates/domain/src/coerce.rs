//! Loose coercion of JSON values coming from the device.
//!
//! The firmware hand-writes its JSON, so field types are not guaranteed.
//! These helpers follow the usual dynamic-language conversions (a numeric
//! string is a number, `null` is zero, an empty string is falsy) and never
//! fail: a value that cannot be used becomes `NaN`, `false` or `None`.

use serde_json::Value;

/// Convert a field to a number. A missing field is `NaN`.
#[must_use]
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Array(_) | Value::Object(_)) => f64::NAN,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                0.0
            } else {
                text.parse().unwrap_or(f64::NAN)
            }
        }
    }
}

/// Truthiness of a field. Missing, `null`, `false`, `0`, `NaN` and `""` are falsy.
#[must_use]
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Coerce a field to an identifier: any finite number above zero.
#[must_use]
pub fn to_identifier(value: Option<&Value>) -> Option<f64> {
    let number = to_number(value);
    (number.is_finite() && number > 0.0).then_some(number)
}

/// A display label: only non-empty strings count.
#[must_use]
pub fn to_label(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

/// A non-negative counter. Anything unusable counts as zero.
#[must_use]
pub fn to_count(value: Option<&Value>) -> u64 {
    let number = to_number(value);
    if !number.is_finite() || number <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = number.floor() as u64;
    count
}
