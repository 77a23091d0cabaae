// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to the hub.
//!
//! A [`Transport`] performs one GET round trip per call and hands back a
//! [`RawResponse`]. It never fails: transport errors are folded into the
//! response with the synthetic [`TRANSPORT_ERROR_STATUS`], which the
//! decoder then reports as an HTTP error.
//!
//! - [`HttpClient`]: the reqwest-based transport (feature `http`)

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{Credentials, HttpClient, HttpConfig};

use serde::de::DeserializeOwned;

use crate::error::Result;

/// Status reported when the request did not produce an HTTP response.
pub const TRANSPORT_ERROR_STATUS: u16 = 5001;

/// Outcome of a single request: status, status message and raw body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: u16,
    message: String,
    body: String,
}

impl RawResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub fn new(status: u16, message: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            body: body.into(),
        }
    }

    /// Creates the response for a request that never got an answer.
    ///
    /// The body is empty and the status is [`TRANSPORT_ERROR_STATUS`].
    #[must_use]
    pub fn transport_error(message: impl Into<String>) -> Self {
        Self::new(TRANSPORT_ERROR_STATUS, message, String::new())
    }

    /// Returns the status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns the status message, or the transport error text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the raw body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the body as `T` and projects it, see [`crate::response::decode`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`](crate::Error::Http) for a status above 201
    /// and [`Error::Decode`](crate::Error::Decode) for a body that does not
    /// match `T`.
    pub fn decode<T, D, F>(&self, project: F) -> Result<D>
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> D,
    {
        crate::response::decode(self.status, &self.body, project)
    }
}

/// A way of issuing GET requests against the hub's `/api` root.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Performs one GET request for `path` (relative to `/api`).
    ///
    /// The returned future completes once the full response or a transport
    /// error is available.
    async fn get(&self, path: &str) -> RawResponse;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn transport_error_response() {
        let response = RawResponse::transport_error("connection refused");
        assert_eq!(response.status(), TRANSPORT_ERROR_STATUS);
        assert_eq!(response.message(), "connection refused");
        assert!(response.body().is_empty());
    }

    #[test]
    fn transport_error_decodes_as_http_error() {
        let response = RawResponse::transport_error("timed out");
        let err = response.decode(|v: serde_json::Value| v).unwrap_err();
        assert!(matches!(err, Error::Http { status: 5001, .. }));
    }

    #[test]
    fn decode_delegates_to_decoder() {
        let response = RawResponse::new(200, "OK", "[1,2,3]");
        let sum = response.decode(|v: Vec<u32>| v.iter().sum::<u32>()).unwrap();
        assert_eq!(sum, 6);
    }
}
