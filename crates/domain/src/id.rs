//! Typed identifier newtypes for physical buttons and LEDs.
//!
//! The firmware numbers its buttons and LEDs with plain JSON numbers. Any
//! finite positive value is an identifier, fractional ones included; zero,
//! negatives, `NaN` and infinities never are.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Largest integer an `f64` represents exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn is_identifier(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Whole values go on the wire as JSON integers (`2`, not `2.0`).
fn serialize_number<S: Serializer>(value: f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract().abs() > 0.0 || value > MAX_EXACT_INTEGER {
        return serializer.serialize_f64(value);
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = value as u64;
    serializer.serialize_u64(whole)
}

macro_rules! define_number {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name(f64);

        impl $name {
            /// Wrap a whole number, returning `None` for zero.
            #[must_use]
            pub fn new(value: u32) -> Option<Self> {
                Self::from_f64(f64::from(value))
            }

            /// Wrap any finite positive number.
            #[must_use]
            pub fn from_f64(value: f64) -> Option<Self> {
                is_identifier(value).then_some(Self(value))
            }

            /// Access the raw number.
            #[must_use]
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for $name {}

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.to_bits().hash(state);
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<f64>()
                    .ok()
                    .and_then(Self::from_f64)
                    .ok_or_else(|| ValidationError::InvalidNumber(s.to_string()))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serialize_number(self.0, serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = f64::deserialize(deserializer)?;
                Self::from_f64(value).ok_or_else(|| {
                    serde::de::Error::custom(ValidationError::InvalidNumber(value.to_string()))
                })
            }
        }
    };
}

define_number!(
    /// Identifier of a physical button, as reported by `/api/buttons`.
    ButtonNumber
);

define_number!(
    /// Identifier of a physical LED, as reported by `/api/leds`.
    LedNumber
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_zero() {
        assert!(LedNumber::new(0).is_none());
        assert!("0".parse::<ButtonNumber>().is_err());
    }

    #[test]
    fn should_reject_non_finite_values() {
        assert!(LedNumber::from_f64(f64::NAN).is_none());
        assert!(LedNumber::from_f64(f64::INFINITY).is_none());
        assert!("inf".parse::<LedNumber>().is_err());
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let number = ButtonNumber::new(3).unwrap();
        let parsed: ButtonNumber = number.to_string().parse().unwrap();
        assert_eq!(parsed, number);
    }

    #[test]
    fn should_display_fractional_number_like_the_device() {
        let number = ButtonNumber::from_f64(1.5).unwrap();
        assert_eq!(number.to_string(), "1.5");
        assert_eq!(ButtonNumber::new(2).unwrap().to_string(), "2");
        assert_eq!("1.5".parse::<ButtonNumber>(), Ok(number));
    }

    #[test]
    fn should_return_error_when_parsing_negative_number() {
        let result = LedNumber::from_str("-1");
        assert_eq!(
            result,
            Err(ValidationError::InvalidNumber("-1".to_string()))
        );
    }

    #[test]
    fn should_serialize_whole_numbers_as_integer() {
        let number = LedNumber::new(2).unwrap();
        assert_eq!(serde_json::to_string(&number).unwrap(), "2");
        let number = LedNumber::from_f64(2.5).unwrap();
        assert_eq!(serde_json::to_string(&number).unwrap(), "2.5");
    }

    #[test]
    fn should_reject_zero_when_deserializing() {
        assert!(serde_json::from_str::<LedNumber>("0").is_err());
        assert_eq!(
            serde_json::from_str::<LedNumber>("0.5").unwrap(),
            LedNumber::from_f64(0.5).unwrap()
        );
    }

    #[test]
    fn should_order_by_numeric_value() {
        let mut numbers = vec![
            LedNumber::new(10).unwrap(),
            LedNumber::new(2).unwrap(),
            LedNumber::from_f64(1.5).unwrap(),
            LedNumber::new(1).unwrap(),
        ];
        numbers.sort();
        let raw: Vec<f64> = numbers.into_iter().map(LedNumber::get).collect();
        assert_eq!(raw, vec![1.0, 1.5, 2.0, 10.0]);
    }
}
