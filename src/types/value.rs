// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loosely typed scalar property values.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A scalar whose JSON type varies between devices.
///
/// Properties such as `value` or `state` are a boolean on a binary switch,
/// an integer on a dimmer, a float on a sensor and a string on some plugins.
/// Decoding probes the variants in a fixed order: boolean, integer, float,
/// string. A JSON number with an exact integer value that fits an `i64`,
/// including `42.0` or `1e3`, is therefore always an [`Value::Integer`];
/// only fractional or out-of-range numbers become [`Value::Double`].
///
/// # Examples
///
/// ```
/// use hc3_lib::types::Value;
///
/// let v: Value = serde_json::from_str("42").unwrap();
/// assert_eq!(v, Value::Integer(42));
///
/// let v: Value = serde_json::from_str(r#""42""#).unwrap();
/// assert_eq!(v, Value::String("42".to_string()));
///
/// let v: Value = serde_json::from_str("true").unwrap();
/// assert_eq!(v.as_bool(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A JSON boolean.
    Bool(bool),
    /// A JSON number representable as `i64`.
    Integer(i64),
    /// Any other JSON number.
    Double(f64),
    /// A JSON string.
    String(String),
}

impl Value {
    /// Returns the boolean if this is a [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`Value::Integer`].
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float if this is a [`Value::Double`].
    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a float when it is any kind of number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
        match value {
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = super::exact_integer(&n) {
                    Ok(Self::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Self::Double(f))
                } else {
                    Err(serde::de::Error::custom(format!(
                        "number {n} is not representable"
                    )))
                }
            }
            serde_json::Value::String(s) => Ok(Self::String(s)),
            other => Err(serde::de::Error::custom(format!(
                "expected a boolean, number or string, got {other}"
            ))),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Double(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_wins_over_double() {
        let v: Value = serde_json::from_str("42").unwrap();
        assert_eq!(v, Value::Integer(42));
        assert_eq!(v.as_double(), None);
        assert_eq!(v.as_number(), Some(42.0));
    }

    #[test]
    fn numeric_string_stays_string() {
        let v: Value = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(v, Value::String("42".to_string()));
        assert_eq!(v.as_int(), None);
    }

    #[test]
    fn boolean_probe_runs_first() {
        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v, Value::Bool(true));
    }

    #[test]
    fn fractional_number_is_double() {
        let v: Value = serde_json::from_str("21.5").unwrap();
        assert_eq!(v, Value::Double(21.5));
    }

    #[test]
    fn whole_number_float_is_integer() {
        for json in ["42.0", "4.2e1", "-3.0"] {
            let v: Value = serde_json::from_str(json).unwrap();
            assert!(matches!(v, Value::Integer(_)), "{json}: {v:?}");
        }
        let v: Value = serde_json::from_str("1e3").unwrap();
        assert_eq!(v, Value::Integer(1000));
    }

    #[test]
    fn negative_integer() {
        let v: Value = serde_json::from_str("-7").unwrap();
        assert_eq!(v.as_int(), Some(-7));
    }

    #[test]
    fn integer_beyond_i64_falls_back_to_double() {
        let v: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert!(matches!(v, Value::Double(_)));
    }

    #[test]
    fn rejects_null_array_and_object() {
        assert!(serde_json::from_str::<Value>("null").is_err());
        assert!(serde_json::from_str::<Value>("[1]").is_err());
        assert!(serde_json::from_str::<Value>(r#"{"a":1}"#).is_err());
    }

    #[test]
    fn serializes_as_bare_scalar() {
        assert_eq!(serde_json::to_string(&Value::Bool(false)).unwrap(), "false");
        assert_eq!(serde_json::to_string(&Value::Integer(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Value::Double(0.5)).unwrap(), "0.5");
        assert_eq!(
            serde_json::to_string(&Value::from("on")).unwrap(),
            r#""on""#
        );
    }

    #[test]
    fn display() {
        assert_eq!(Value::Integer(99).to_string(), "99");
        assert_eq!(Value::from("idle").to_string(), "idle");
    }
}
