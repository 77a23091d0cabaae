// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `hc3_lib` - A typed Rust client for the Fibaro Home Center 3 REST API.
//!
//! The library reads the hub's device inventory and global variables and
//! decodes the loosely specified JSON payloads into a typed model.
//!
//! # Supported Endpoints
//!
//! - `GET /api/devices` and `GET /api/devices/{id}`
//! - `GET /api/globalVariables/` and `GET /api/globalVariables/{name}`
//!
//! # Quick Start
//!
//! ```no_run
//! use hc3_lib::FibaroApi;
//! use hc3_lib::protocol::HttpConfig;
//!
//! #[tokio::main]
//! async fn main() -> hc3_lib::Result<()> {
//!     let api = FibaroApi::http(
//!         HttpConfig::new("192.168.1.57").with_credentials("admin", "admin"),
//!     )?;
//!
//!     let device = api.get_device(42).await?;
//!     println!("{} is {:?}", device.name, device.value());
//!
//!     let (value, _modified) = api.get_global_variable("mode").await?;
//!     println!("mode = {value}");
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every operation fails with either [`Error::Http`] (status above 201, or
//! no response at all) or [`Error::Decode`] (body does not match the
//! schema). There is no retry and no partial result.
//!
//! # Dynamic values
//!
//! Fields whose JSON type depends on the device are represented by the
//! sum types in [`types`]: [`Value`], [`Power`] and [`JsonAny`].

pub mod api;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use api::FibaroApi;
pub use error::{Error, ProtocolError, Result};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::{RawResponse, Transport};
pub use response::{Device, GlobalVariable, Properties};
pub use types::{JsonAny, Power, Value};
