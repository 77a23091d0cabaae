// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `power` device property.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The `power` property of a device.
///
/// Metering devices report the current load in watts; some plugins report a
/// plain on/off flag instead. Booleans are probed first, then any number is
/// taken as a float.
///
/// # Examples
///
/// ```
/// use hc3_lib::types::Power;
///
/// let p: Power = serde_json::from_str("12").unwrap();
/// assert_eq!(p, Power::Double(12.0));
///
/// let p: Power = serde_json::from_str("false").unwrap();
/// assert_eq!(p, Power::Bool(false));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Power {
    /// On/off flag.
    Bool(bool),
    /// Load in watts.
    Double(f64),
}

impl Power {
    /// Returns the flag if this is a [`Power::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Double(_) => None,
        }
    }

    /// Returns the load if this is a [`Power::Double`].
    #[must_use]
    pub fn watts(&self) -> Option<f64> {
        match self {
            Self::Double(w) => Some(*w),
            Self::Bool(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for Power {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
        match value {
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Self::Double)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid power value {n}"))),
            other => Err(serde::de::Error::custom(format!(
                "expected a boolean or a number, got {other}"
            ))),
        }
    }
}

impl Serialize for Power {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Double(w) => serializer.serialize_f64(*w),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_becomes_double() {
        let p: Power = serde_json::from_str("0").unwrap();
        assert_eq!(p, Power::Double(0.0));
        assert_eq!(p.watts(), Some(0.0));
        assert_eq!(p.as_bool(), None);
    }

    #[test]
    fn fractional_load() {
        let p: Power = serde_json::from_str("7.25").unwrap();
        assert_eq!(p.watts(), Some(7.25));
    }

    #[test]
    fn boolean_flag() {
        let p: Power = serde_json::from_str("true").unwrap();
        assert_eq!(p.as_bool(), Some(true));
        assert_eq!(p.watts(), None);
    }

    #[test]
    fn rejects_string() {
        assert!(serde_json::from_str::<Power>(r#""12""#).is_err());
    }

    #[test]
    fn serializes_load_as_float() {
        assert_eq!(serde_json::to_string(&Power::Double(12.0)).unwrap(), "12.0");
        assert_eq!(serde_json::to_string(&Power::Bool(true)).unwrap(), "true");
    }
}
