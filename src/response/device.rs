// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device records from `/api/devices`.

use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::properties::Properties;
use super::{epoch_seconds, lenient};
use crate::types::{JsonAny, Value};

/// A device as reported by the hub.
///
/// A device is a read snapshot: it is never modified after decoding. Only
/// [`id`](Self::id) and [`name`](Self::name) are required; every other
/// field is `None` when the hub leaves it out or sends an unexpected type.
///
/// Two devices are equal when their ids are equal, whatever their other
/// fields contain.
///
/// # Examples
///
/// ```
/// use hc3_lib::response::Device;
///
/// let json = r#"{
///     "id": 42,
///     "name": "Dimmer switch",
///     "roomID": 219,
///     "type": "com.fibaro.FGD212",
///     "baseType": "com.fibaro.multilevelSwitch",
///     "interfaces": ["levelChange", "light"],
///     "properties": {"value": 35},
///     "actions": {"setValue": 1, "turnOff": 0}
/// }"#;
/// let device: Device = serde_json::from_str(json).unwrap();
/// assert_eq!(device.name, "Dimmer switch");
/// assert!(device.has_interface("light"));
/// assert_eq!(device.action_arity("setValue"), Some(1));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Device id, unique on the hub.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Room the device is assigned to.
    #[serde(
        rename = "roomID",
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub room_id: Option<i64>,

    /// UI view description.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub view: Option<Vec<JsonAny>>,

    /// Concrete device type, e.g. `com.fibaro.FGD212`.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,

    /// Generic type the concrete type derives from.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub base_type: Option<String>,

    /// Capability interfaces.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub interfaces: Option<Vec<String>>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub enabled: Option<bool>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub visible: Option<bool>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_plugin: Option<bool>,

    /// Id of the parent (master) device.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_id: Option<i64>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub view_xml: Option<bool>,

    #[serde(
        rename = "hasUIView",
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub has_ui_view: Option<bool>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub config_xml: Option<bool>,

    /// Vendor-specific properties.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub properties: Option<Properties>,

    /// Supported actions and the number of arguments each takes.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub actions: Option<BTreeMap<String, i64>>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub remote_gateway_id: Option<i64>,

    /// Creation time, seconds since the Unix epoch.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub created: Option<i64>,

    /// Last modification time, seconds since the Unix epoch.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub modified: Option<i64>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub sort_order: Option<i64>,
}

impl Device {
    /// Returns `true` if the device implements `interface`.
    #[must_use]
    pub fn has_interface(&self, interface: &str) -> bool {
        self.interfaces
            .as_ref()
            .is_some_and(|i| i.iter().any(|x| x == interface))
    }

    /// Returns the number of arguments `action` takes, if supported.
    #[must_use]
    pub fn action_arity(&self, action: &str) -> Option<i64> {
        self.actions.as_ref()?.get(action).copied()
    }

    /// Shortcut for the `value` property.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.properties.as_ref()?.value.as_ref()
    }

    /// Returns `true` if the hub reports the device as dead.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.properties
            .as_ref()
            .and_then(|p| p.dead)
            .unwrap_or(false)
    }

    /// Creation time.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created.and_then(epoch_seconds)
    }

    /// Last modification time.
    #[must_use]
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        self.modified.and_then(epoch_seconds)
    }
}

impl PartialEq for Device {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Device {}

impl Hash for Device {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
