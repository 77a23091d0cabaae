// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level access to the hub's REST API.
//!
//! [`FibaroApi`] composes a [`Transport`] with the response
//! [`decode`](crate::response::decode) pipeline. Every operation issues
//! exactly one GET request; nothing is cached, retried or paginated.
//!
//! ```no_run
//! use hc3_lib::FibaroApi;
//! use hc3_lib::protocol::HttpConfig;
//!
//! # async fn example() -> hc3_lib::Result<()> {
//! let api = FibaroApi::http(
//!     HttpConfig::new("192.168.1.57").with_credentials("admin", "admin"),
//! )?;
//!
//! for device in api.get_devices("roomID=219").await? {
//!     println!("{} {}", device.id, device.name);
//! }
//!
//! let (value, modified) = api.get_global_variable("mode").await?;
//! println!("mode = {value} (changed at {modified})");
//! # Ok(())
//! # }
//! ```
//!
//! For callers without an async runtime, [`blocking::FibaroApi`] offers
//! the same operations as blocking calls.

pub mod blocking;

use crate::error::Result;
use crate::protocol::Transport;
use crate::response::{Device, GlobalVariable};

#[cfg(feature = "http")]
use crate::protocol::{HttpClient, HttpConfig};

/// Typed access to devices and global variables.
///
/// The façade is built explicitly from a transport handle; it holds no
/// other state, so concurrent calls are independent requests.
#[derive(Debug, Clone)]
pub struct FibaroApi<P: Transport> {
    transport: P,
}

impl<P: Transport> FibaroApi<P> {
    /// Creates a façade over `transport`.
    #[must_use]
    pub fn new(transport: P) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &P {
        &self.transport
    }

    /// Fetches a single device (`GET /devices/{id}`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`](crate::Error::Http) if the hub answers with a
    /// status above 201 (unknown ids give 404) or the request fails, and
    /// [`Error::Decode`](crate::Error::Decode) if the body is not a device.
    pub async fn get_device(&self, id: i64) -> Result<Device> {
        let response = self.transport.get(&format!("/devices/{id}")).await;
        response.decode(|device: Device| device)
    }

    /// Fetches all devices matching `query` (`GET /devices?{query}`).
    ///
    /// `query` is passed through verbatim, e.g. `"roomID=3"` or
    /// `"interface=light&enabled=true"`. An empty query lists every device.
    ///
    /// # Errors
    ///
    /// Same as [`get_device`](Self::get_device).
    pub async fn get_devices(&self, query: &str) -> Result<Vec<Device>> {
        let response = self.transport.get(&devices_path(query)).await;
        response.decode(|devices: Vec<Device>| devices)
    }

    /// Fetches a global variable's value and last modification time
    /// (`GET /globalVariables/{name}`).
    ///
    /// # Errors
    ///
    /// Same as [`get_device`](Self::get_device).
    pub async fn get_global_variable(&self, name: &str) -> Result<(String, i64)> {
        let path = format!("/globalVariables/{}", urlencoding::encode(name));
        let response = self.transport.get(&path).await;
        response.decode(|var: GlobalVariable| (var.value, var.modified))
    }

    /// Fetches every global variable (`GET /globalVariables/`).
    ///
    /// # Errors
    ///
    /// Same as [`get_device`](Self::get_device).
    pub async fn get_global_variables(&self) -> Result<Vec<GlobalVariable>> {
        let response = self.transport.get("/globalVariables/").await;
        response.decode(|vars: Vec<GlobalVariable>| vars)
    }
}

#[cfg(feature = "http")]
impl FibaroApi<HttpClient> {
    /// Creates a façade over an HTTP connection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`](crate::Error::Protocol) if the HTTP
    /// client cannot be created.
    pub fn http(config: HttpConfig) -> Result<Self> {
        Ok(Self::new(config.into_client()?))
    }
}

fn devices_path(query: &str) -> String {
    if query.is_empty() {
        "/devices".to_string()
    } else {
        format!("/devices?{query}")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::error::Error;
    use crate::protocol::RawResponse;
    use crate::types::Value;

    /// Transport returning canned responses and recording requested paths.
    #[derive(Debug, Default)]
    pub(crate) struct StubTransport {
        responses: HashMap<String, RawResponse>,
        pub(crate) requests: Mutex<Vec<String>>,
    }

    impl StubTransport {
        pub(crate) fn with(mut self, path: &str, status: u16, body: &str) -> Self {
            self.responses
                .insert(path.to_string(), RawResponse::new(status, "OK", body));
            self
        }

        pub(crate) fn requested(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for StubTransport {
        async fn get(&self, path: &str) -> RawResponse {
            self.requests.lock().unwrap().push(path.to_string());
            self.responses
                .get(path)
                .cloned()
                .unwrap_or_else(|| RawResponse::new(404, "Not Found", ""))
        }
    }

    pub(crate) const VARIABLE: &str =
        r#"{"name":"x","value":"5","readOnly":false,"isEnum":false,"enumValues":[],"created":1,"modified":2}"#;

    #[test]
    fn devices_path_without_query() {
        assert_eq!(devices_path(""), "/devices");
    }

    #[test]
    fn devices_path_with_query() {
        assert_eq!(devices_path("roomID=3"), "/devices?roomID=3");
    }

    #[tokio::test]
    async fn get_device_decodes_single_device() {
        let stub = StubTransport::default().with(
            "/devices/42",
            200,
            r#"{"id": 42, "name": "Dimmer", "properties": {"value": 35}}"#,
        );
        let api = FibaroApi::new(stub);

        let device = api.get_device(42).await.unwrap();
        assert_eq!(device.id, 42);
        assert_eq!(device.value(), Some(&Value::Integer(35)));
        assert_eq!(api.transport().requested(), vec!["/devices/42"]);
    }

    #[tokio::test]
    async fn get_device_unknown_id_is_http_error() {
        let api = FibaroApi::new(StubTransport::default());
        let err = api.get_device(7).await.unwrap_err();
        assert!(matches!(err, Error::Http { status: 404, .. }));
    }

    #[tokio::test]
    async fn get_devices_builds_query_path() {
        let stub = StubTransport::default()
            .with("/devices", 200, r#"[{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]"#)
            .with("/devices?roomID=3", 200, r#"[{"id": 2, "name": "b"}]"#);
        let api = FibaroApi::new(stub);

        assert_eq!(api.get_devices("").await.unwrap().len(), 2);
        assert_eq!(api.get_devices("roomID=3").await.unwrap().len(), 1);
        assert_eq!(
            api.transport().requested(),
            vec!["/devices", "/devices?roomID=3"]
        );
    }

    #[tokio::test]
    async fn get_global_variable_projects_value_and_modified() {
        let stub = StubTransport::default().with("/globalVariables/x", 200, VARIABLE);
        let api = FibaroApi::new(stub);

        let pair = api.get_global_variable("x").await.unwrap();
        assert_eq!(pair, ("5".to_string(), 2));
    }

    #[tokio::test]
    async fn get_global_variable_encodes_name() {
        let api = FibaroApi::new(StubTransport::default());
        let _ = api.get_global_variable("night mode").await;
        assert_eq!(
            api.transport().requested(),
            vec!["/globalVariables/night%20mode"]
        );
    }

    #[tokio::test]
    async fn get_global_variables_lists_all() {
        let body = format!("[{VARIABLE},{VARIABLE}]");
        let stub = StubTransport::default().with("/globalVariables/", 200, &body);
        let api = FibaroApi::new(stub);

        let vars = api.get_global_variables().await.unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars[0].name, "x");
    }

    #[tokio::test]
    async fn status_202_is_rejected() {
        let stub = StubTransport::default().with("/globalVariables/", 202, "[]");
        let api = FibaroApi::new(stub);

        let err = api.get_global_variables().await.unwrap_err();
        assert_eq!(err.status(), Some(202));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let stub = StubTransport::default().with("/devices", 200, "<html>");
        let api = FibaroApi::new(stub);

        let err = api.get_devices("").await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn transport_failure_surfaces_synthetic_status() {
        #[derive(Debug)]
        struct Unreachable;

        impl Transport for Unreachable {
            async fn get(&self, _path: &str) -> RawResponse {
                RawResponse::transport_error("connection refused")
            }
        }

        let api = FibaroApi::new(Unreachable);
        let err = api.get_device(1).await.unwrap_err();
        assert_eq!(err.status(), Some(crate::protocol::TRANSPORT_ERROR_STATUS));
    }
}
