// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response decoding for hub JSON payloads.
//!
//! This module provides the records returned by the hub and the
//! [`decode`] function that turns a status code and a raw body into one of
//! them. The schema is deliberately partial: the hub's payloads differ
//! between device classes and firmware versions, so almost every field is
//! optional and unknown fields are ignored.

mod decoder;
mod device;
mod global_variable;
mod lenient;
mod properties;

pub use decoder::{MAX_SUCCESS_STATUS, decode, decode_str};
pub use device::Device;
pub use global_variable::GlobalVariable;
pub use properties::{
    CentralSceneSupport, DeviceParameter, FavoritePosition, Icon, Properties, QuickAppVariable,
    UiCallback,
};

use chrono::{DateTime, Utc};

/// Converts hub timestamps (seconds since the Unix epoch).
fn epoch_seconds(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
