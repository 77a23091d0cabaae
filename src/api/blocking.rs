// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Blocking variant of the API façade.
//!
//! Each call blocks the current thread until the hub has answered. The
//! façade drives its own single-threaded tokio runtime, so it must not be
//! used from inside another async runtime.
//!
//! ```no_run
//! use hc3_lib::api::blocking::FibaroApi;
//! use hc3_lib::protocol::HttpConfig;
//!
//! # fn example() -> hc3_lib::Result<()> {
//! let api = FibaroApi::http(
//!     HttpConfig::new("192.168.1.57").with_credentials("admin", "admin"),
//! )?;
//! let devices = api.get_devices("")?;
//! println!("{} devices", devices.len());
//! # Ok(())
//! # }
//! ```

use tokio::runtime::{Builder, Runtime};

use crate::error::{ProtocolError, Result};
use crate::protocol::Transport;
use crate::response::{Device, GlobalVariable};

#[cfg(feature = "http")]
use crate::protocol::{HttpClient, HttpConfig};

/// Blocking access to devices and global variables.
///
/// See [`crate::api::FibaroApi`] for the semantics of each operation.
#[derive(Debug)]
pub struct FibaroApi<P: Transport> {
    inner: super::FibaroApi<P>,
    runtime: Runtime,
}

impl<P: Transport> FibaroApi<P> {
    /// Creates a blocking façade over `transport`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`](crate::Error::Protocol) if the runtime
    /// cannot be started.
    pub fn new(transport: P) -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProtocolError::Runtime)?;

        Ok(Self {
            inner: super::FibaroApi::new(transport),
            runtime,
        })
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &P {
        self.inner.transport()
    }

    /// Fetches a single device.
    ///
    /// # Errors
    ///
    /// See [`crate::api::FibaroApi::get_device`].
    pub fn get_device(&self, id: i64) -> Result<Device> {
        self.runtime.block_on(self.inner.get_device(id))
    }

    /// Fetches all devices matching `query`.
    ///
    /// # Errors
    ///
    /// See [`crate::api::FibaroApi::get_devices`].
    pub fn get_devices(&self, query: &str) -> Result<Vec<Device>> {
        self.runtime.block_on(self.inner.get_devices(query))
    }

    /// Fetches a global variable's value and last modification time.
    ///
    /// # Errors
    ///
    /// See [`crate::api::FibaroApi::get_global_variable`].
    pub fn get_global_variable(&self, name: &str) -> Result<(String, i64)> {
        self.runtime.block_on(self.inner.get_global_variable(name))
    }

    /// Fetches every global variable.
    ///
    /// # Errors
    ///
    /// See [`crate::api::FibaroApi::get_global_variables`].
    pub fn get_global_variables(&self) -> Result<Vec<GlobalVariable>> {
        self.runtime.block_on(self.inner.get_global_variables())
    }
}

#[cfg(feature = "http")]
impl FibaroApi<HttpClient> {
    /// Creates a blocking façade over an HTTP connection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`](crate::Error::Protocol) if the HTTP
    /// client or the runtime cannot be created.
    pub fn http(config: HttpConfig) -> Result<Self> {
        Self::new(config.into_client()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{StubTransport, VARIABLE};
    use crate::error::Error;

    #[test]
    fn blocking_calls_return_decoded_values() {
        let stub = StubTransport::default()
            .with("/globalVariables/x", 200, VARIABLE)
            .with("/devices/3", 200, r#"{"id": 3, "name": "Plug"}"#);
        let api = FibaroApi::new(stub).unwrap();

        assert_eq!(
            api.get_global_variable("x").unwrap(),
            ("5".to_string(), 2)
        );
        assert_eq!(api.get_device(3).unwrap().name, "Plug");
        assert_eq!(
            api.transport().requested(),
            vec!["/globalVariables/x", "/devices/3"]
        );
    }

    #[test]
    fn blocking_calls_propagate_errors() {
        let stub = StubTransport::default().with("/devices", 500, "oops");
        let api = FibaroApi::new(stub).unwrap();

        assert!(matches!(
            api.get_devices(""),
            Err(Error::Http { status: 500, .. })
        ));
        assert!(matches!(
            api.get_global_variables(),
            Err(Error::Http { status: 404, .. })
        ));
    }
}
