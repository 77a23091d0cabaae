// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fully dynamic JSON values.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An arbitrary JSON value for fields without a fixed schema.
///
/// Used for things like a device's UI view layout, whose shape depends on
/// the device and is never interpreted by this library. Decoding and
/// re-encoding a `JsonAny` reproduces the same JSON document (object keys
/// come back sorted).
///
/// Numbers follow the same rule as [`Value`](super::Value): any exact
/// integer that fits an `i64` (`3`, `3.0`, `3e0`) is an
/// [`JsonAny::Integer`], everything else a [`JsonAny::Double`]. A
/// whole-number float therefore re-encodes without its fractional part.
///
/// # Examples
///
/// ```
/// use hc3_lib::types::JsonAny;
///
/// let json = r#"{"$jason":{"body":{"header":{"style":{"height":"250"}}}},"items":[1,2.5,null]}"#;
/// let any: JsonAny = serde_json::from_str(json).unwrap();
/// assert_eq!(any.get("items").and_then(|v| v.as_array()).map(Vec::len), Some(3));
/// assert_eq!(serde_json::to_string(&any).unwrap(), json);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonAny {
    /// `null`.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number representable as `i64`.
    Integer(i64),
    /// Any other number.
    Double(f64),
    /// A string.
    String(String),
    /// An array.
    Array(Vec<JsonAny>),
    /// An object.
    Object(BTreeMap<String, JsonAny>),
}

impl JsonAny {
    /// Returns `true` for [`JsonAny::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean if this is a [`JsonAny::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is a [`JsonAny::Integer`].
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the value as a float when it is any kind of number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string if this is a [`JsonAny::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`JsonAny::Array`].
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<JsonAny>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the members if this is a [`JsonAny::Object`].
    #[must_use]
    pub fn as_object(&self) -> Option<&BTreeMap<String, JsonAny>> {
        match self {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up a member of an object. Returns `None` for non-objects.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&JsonAny> {
        self.as_object().and_then(|members| members.get(key))
    }

    /// Converts this value into a typed one.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error if the value does not match `T`.
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(serde_json::Value::from(self.clone()))
    }
}

impl From<serde_json::Value> for JsonAny {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match super::exact_integer(&n) {
                Some(i) => Self::Integer(i),
                // as_f64 is always Some without serde_json's arbitrary_precision.
                None => Self::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(members) => Self::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonAny> for serde_json::Value {
    fn from(value: JsonAny) -> Self {
        match value {
            JsonAny::Null => Self::Null,
            JsonAny::Bool(b) => Self::Bool(b),
            JsonAny::Integer(n) => Self::from(n),
            JsonAny::Double(n) => Self::from(n),
            JsonAny::String(s) => Self::String(s),
            JsonAny::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            JsonAny::Object(members) => Self::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for JsonAny {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
        Ok(Self::from(value))
    }
}

impl Serialize for JsonAny {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Double(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => serializer.collect_seq(items),
            Self::Object(members) => serializer.collect_map(members),
        }
    }
}
