// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dynamic value types for loosely specified hub payloads.
//!
//! The hub's JSON shape varies by device class and firmware. These types
//! carry values whose JSON type is not fixed by the schema.
//!
//! # Types
//!
//! - [`Value`] - Boolean, integer, float or string (`value`, `state`)
//! - [`Power`] - Boolean or float (`power`)
//! - [`JsonAny`] - Any JSON document (view layouts, unknown properties)

mod json_any;
mod power;
mod value;

pub use json_any::JsonAny;
pub use power::Power;
pub use value::Value;

/// Returns the number as an `i64` when it has an exact integer value,
/// including floats such as `42.0` or `1e3`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(crate) fn exact_integer(n: &serde_json::Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    // Both bounds are exact: -2^63 and 2^63.
    let min = i64::MIN as f64;
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= min && *f < -min)
        .map(|f| f as i64)
}
