// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Field deserializers for the partial hub schema.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Deserializes an optional field, yielding `None` when the value is `null`
/// or has an unexpected type.
///
/// Use together with `#[serde(default)]` so that a missing field is `None`
/// as well.
pub(crate) fn optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
