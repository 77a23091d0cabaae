// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `hc3_lib` library.
//!
//! Requests against the hub fail in exactly two ways: the hub answered with
//! a status outside the accepted range ([`Error::Http`]), or the body did
//! not match the expected schema ([`Error::Decode`]). Building a client can
//! additionally fail with a [`ProtocolError`].

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The hub answered with a status code above the accepted range, or the
    /// request never reached the hub (synthetic status
    /// [`TRANSPORT_ERROR_STATUS`](crate::protocol::TRANSPORT_ERROR_STATUS)).
    #[error("HTTP error {status}")]
    Http {
        /// The HTTP (or synthetic transport) status code.
        status: u16,
        /// Additional message. Not populated from the response body.
        message: String,
    },

    /// The response body could not be decoded into the expected schema.
    #[error("decode error: {0}")]
    Decode(String),

    /// The client could not be constructed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

impl Error {
    /// Returns the status code carried by an [`Error::Http`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while building a transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The underlying HTTP client could not be created.
    #[cfg(feature = "http")]
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid host or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The runtime backing the blocking API could not be started.
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_display() {
        let err = Error::Http {
            status: 404,
            message: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP error 404");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn decode_error_display() {
        let err = Error::Decode("missing field `id`".to_string());
        assert_eq!(err.to_string(), "decode error: missing field `id`");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn error_from_protocol_error() {
        let err: Error = ProtocolError::InvalidAddress("host is required".to_string()).into();
        assert!(matches!(err, Error::Protocol(ProtocolError::InvalidAddress(_))));
        assert_eq!(
            err.to_string(),
            "protocol error: invalid address: host is required"
        );
    }
}
