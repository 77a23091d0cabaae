// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Global variable records from `/api/globalVariables`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{epoch_seconds, lenient};

/// A global variable stored on the hub.
///
/// The hub stores every value as a string. Equality and hashing use all
/// fields.
///
/// # Examples
///
/// ```
/// use hc3_lib::response::GlobalVariable;
///
/// let json = r#"{"name":"mode","value":"Away","readOnly":false,"isEnum":true,
///                "enumValues":["Home","Away"],"created":1,"modified":2}"#;
/// let var: GlobalVariable = serde_json::from_str(json).unwrap();
/// assert_eq!(var.value, "Away");
/// assert!(var.allows("Home"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalVariable {
    /// Variable name, unique on the hub.
    pub name: String,

    /// Current value.
    pub value: String,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_only: Option<bool>,

    /// Whether the value is restricted to [`enum_values`](Self::enum_values).
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_enum: Option<bool>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub enum_values: Option<Vec<String>>,

    /// Creation time, seconds since the Unix epoch.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<i64>,

    /// Last modification time, seconds since the Unix epoch.
    pub modified: i64,
}

impl GlobalVariable {
    /// Returns `true` if `value` may be assigned to this variable.
    ///
    /// Non-enum variables accept any value.
    #[must_use]
    pub fn allows(&self, value: &str) -> bool {
        if self.is_enum != Some(true) {
            return true;
        }
        self.enum_values
            .as_ref()
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Creation time.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created.and_then(epoch_seconds)
    }

    /// Last modification time.
    #[must_use]
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        epoch_seconds(self.modified)
    }
}
