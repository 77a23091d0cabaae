// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device properties.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::lenient;
use crate::types::{JsonAny, Power, Value};

/// The vendor-specific property bag of a device.
///
/// The set of properties depends on device class and firmware and runs into
/// the hundreds. Commonly read properties have a typed member; all others
/// are kept in [`extra`](Self::extra) and can be read with
/// [`get`](Self::get). A typed member is `None` when the property is
/// missing or has an unexpected type.
///
/// # Examples
///
/// ```
/// use hc3_lib::response::Properties;
/// use hc3_lib::types::Value;
///
/// let json = r#"{"value": 42, "dead": false, "ringBrightness": 80}"#;
/// let props: Properties = serde_json::from_str(json).unwrap();
/// assert_eq!(props.value, Some(Value::Integer(42)));
/// assert_eq!(props.dead, Some(false));
/// assert_eq!(props.get::<u8>("ringBrightness"), Some(80));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    /// Main value: on/off, level, reading.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,

    /// Secondary state (e.g. a door lock's state).
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub state: Option<Value>,

    /// Current load or on/off flag.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub power: Option<Power>,

    /// Accumulated energy in kWh.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub energy: Option<f64>,

    /// Battery level in percent.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub battery_level: Option<i64>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub battery_low_notification: Option<bool>,

    /// Whether the hub considers the device unreachable.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub dead: Option<bool>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub dead_reason: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub armed: Option<bool>,

    /// UI categories (`"lights"`, `"security"`, ...).
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub categories: Option<Vec<String>>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub manufacturer: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub model: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub serial_number: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub software_version: Option<String>,

    /// Unit of [`value`](Self::value), e.g. `"°C"` or `"W"`.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub unit: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub icon: Option<Icon>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_light: Option<bool>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_role: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub device_control_type: Option<i64>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_description: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_value: Option<i64>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_value: Option<i64>,

    /// Thermostat set point.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_level: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub thermostat_mode: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub supported_thermostat_modes: Option<Vec<String>>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub thermostat_operating_state: Option<String>,

    /// Z-Wave configuration parameters.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub parameters: Option<Vec<DeviceParameter>>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub parameters_template: Option<Value>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub favorite_positions: Option<Vec<FavoritePosition>>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub central_scene_support: Option<Vec<CentralSceneSupport>>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub ui_callbacks: Option<Vec<UiCallback>>,

    /// Variables of a QuickApp device.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub quick_app_variables: Option<Vec<QuickAppVariable>>,

    /// UI layout description. Never interpreted.
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub view_layout: Option<JsonAny>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub main_function: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub node_id: Option<i64>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub zwave_company: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub zwave_info: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub zwave_version: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_breached: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub log: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub log_temp: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate_type: Option<String>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_energy: Option<bool>,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub store_energy_data: Option<bool>,

    /// Every property without a typed member above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, JsonAny>,
}

impl Properties {
    /// Reads a property without a typed member.
    ///
    /// Returns `None` if the property is missing or not a `T`.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.extra.get(name).and_then(|v| v.to_typed().ok())
    }

    /// Returns the raw JSON of a property without a typed member.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&JsonAny> {
        self.extra.get(name)
    }

    /// Returns `true` if the device is listed under `category`.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .as_ref()
            .is_some_and(|c| c.iter().any(|x| x == category))
    }

    /// Looks up a QuickApp variable by name.
    #[must_use]
    pub fn quick_app_variable(&self, name: &str) -> Option<&JsonAny> {
        self.quick_app_variables
            .as_ref()?
            .iter()
            .find(|v| v.name == name)
            .map(|v| &v.value)
    }
}

/// Icon reference of a device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Icon {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub path: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub source: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub overlay: Option<String>,
}

/// A preset position of a roller shutter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FavoritePosition {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<i64>,
}

/// Binding of a UI element event to a QuickApp function.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiCallback {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub callback: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_type: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
}

/// A Z-Wave configuration parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceParameter {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub size: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_reported_value: Option<i64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_set_value: Option<i64>,
    /// Sent by the hub under the misspelled key `readyOnly`.
    #[serde(
        rename = "readyOnly",
        alias = "readOnly",
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub read_only: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub set_default: Option<bool>,
}

/// Scene activation support of one button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentralSceneSupport {
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub key_attributes: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub key_id: Option<i64>,
}

/// A variable of a QuickApp device.
///
/// Two variables are equal when their names are equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickAppVariable {
    pub name: String,
    #[serde(default)]
    pub value: JsonAny,
}

impl PartialEq for QuickAppVariable {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for QuickAppVariable {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_has_no_properties() {
        let props: Properties = serde_json::from_str("{}").unwrap();
        assert_eq!(props, Properties::default());
    }

    #[test]
    fn mistyped_property_is_none() {
        let props: Properties =
            serde_json::from_str(r#"{"batteryLevel": "full", "dead": 1}"#).unwrap();
        assert_eq!(props.battery_level, None);
        assert_eq!(props.dead, None);
        assert!(props.extra.is_empty());
    }

    #[test]
    fn unknown_properties_land_in_extra() {
        let json = r##"{"value": true, "ringUpperColor": "#ff0000", "slatsRange": 90}"##;
        let props: Properties = serde_json::from_str(json).unwrap();

        assert_eq!(props.value, Some(Value::Bool(true)));
        assert_eq!(props.extra.len(), 2);
        assert_eq!(props.get::<String>("ringUpperColor").as_deref(), Some("#ff0000"));
        assert_eq!(props.get::<i64>("slatsRange"), Some(90));
        assert_eq!(props.get::<bool>("slatsRange"), None);
        assert_eq!(props.raw("missing"), None);
    }

    #[test]
    fn nested_records() {
        let json = r#"{
            "icon": {"path": "/assets/icon.png", "source": "HC"},
            "favoritePositions": [{"name": "fav1", "label": "Half", "value": 50}],
            "parameters": [
                {"id": 1, "size": 1, "value": 0, "lastReportedValue": 0, "readyOnly": false}
            ],
            "centralSceneSupport": [{"keyAttributes": ["Pressed", "HeldDown"], "keyId": 1}],
            "uiCallbacks": [{"callback": "onPress", "eventType": "onReleased", "name": "button1"}]
        }"#;
        let props: Properties = serde_json::from_str(json).unwrap();

        let icon = props.icon.unwrap();
        assert_eq!(icon.path.as_deref(), Some("/assets/icon.png"));
        assert_eq!(icon.overlay, None);

        let fav = &props.favorite_positions.unwrap()[0];
        assert_eq!(fav.value, Some(50));

        let param = &props.parameters.unwrap()[0];
        assert_eq!(param.read_only, Some(false));
        assert_eq!(param.last_set_value, None);

        let scene = &props.central_scene_support.unwrap()[0];
        assert_eq!(scene.key_id, Some(1));
        assert_eq!(scene.key_attributes.as_ref().map(Vec::len), Some(2));

        let cb = &props.ui_callbacks.unwrap()[0];
        assert_eq!(cb.event_type.as_deref(), Some("onReleased"));
    }

    #[test]
    fn parameter_read_only_uses_hub_key() {
        let param: DeviceParameter =
            serde_json::from_str(r#"{"id": 1, "readyOnly": true}"#).unwrap();
        assert_eq!(param.read_only, Some(true));

        let props: Properties =
            serde_json::from_str(r#"{"parameters": [{"id": 1, "readyOnly": true}]}"#).unwrap();
        let encoded = serde_json::to_value(&props).unwrap();
        assert_eq!(encoded["parameters"][0]["readyOnly"], true);

        let legacy: DeviceParameter =
            serde_json::from_str(r#"{"id": 1, "readOnly": false}"#).unwrap();
        assert_eq!(legacy.read_only, Some(false));
    }

    #[test]
    fn quick_app_variables() {
        let json = r#"{"quickAppVariables": [
            {"name": "ip", "value": "10.0.0.5"},
            {"name": "interval", "value": 30}
        ]}"#;
        let props: Properties = serde_json::from_str(json).unwrap();

        assert_eq!(
            props.quick_app_variable("ip").and_then(JsonAny::as_str),
            Some("10.0.0.5")
        );
        assert_eq!(
            props.quick_app_variable("interval"),
            Some(&JsonAny::Integer(30))
        );
        assert_eq!(props.quick_app_variable("port"), None);
    }

    #[test]
    fn quick_app_variable_equality_by_name() {
        let a = QuickAppVariable {
            name: "ip".to_string(),
            value: JsonAny::String("a".to_string()),
        };
        let b = QuickAppVariable {
            name: "ip".to_string(),
            value: JsonAny::Integer(1),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn categories() {
        let props: Properties =
            serde_json::from_str(r#"{"categories": ["lights", "other"]}"#).unwrap();
        assert!(props.has_category("lights"));
        assert!(!props.has_category("security"));
        assert!(!Properties::default().has_category("lights"));
    }

    #[test]
    fn encoding_omits_absent_properties() {
        let props: Properties = serde_json::from_str(r#"{"value": 0, "custom": [1]}"#).unwrap();
        let encoded = serde_json::to_value(&props).unwrap();
        assert_eq!(encoded, serde_json::json!({"value": 0, "custom": [1]}));
    }
}
