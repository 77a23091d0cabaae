// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status-aware JSON decoding.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Highest status code treated as success.
///
/// The hub answers reads with 200 and creations with 201. Every other code,
/// including the remaining 2xx codes, is reported as [`Error::Http`].
pub const MAX_SUCCESS_STATUS: u16 = 201;

/// Decodes a response body into `T` and projects it into the caller's shape.
///
/// The status is checked before the body is looked at: a status above
/// [`MAX_SUCCESS_STATUS`] fails with [`Error::Http`] whatever the body
/// contains. Otherwise the body is decoded as `T`, and `project` maps the
/// decoded value to the returned `D`. Decoding is all-or-nothing.
///
/// # Errors
///
/// - [`Error::Http`] if `status` is above [`MAX_SUCCESS_STATUS`]
/// - [`Error::Decode`] if the body does not match `T`
///
/// # Examples
///
/// ```
/// use hc3_lib::response::{decode, GlobalVariable};
///
/// let body = r#"{"name":"x","value":"5","readOnly":false,"isEnum":false,
///                "enumValues":[],"created":1,"modified":2}"#;
/// let pair = decode(200, body, |v: GlobalVariable| (v.value, v.modified)).unwrap();
/// assert_eq!(pair, ("5".to_string(), 2));
///
/// let err = decode(404, body, |v: GlobalVariable| v).unwrap_err();
/// assert_eq!(err.status(), Some(404));
/// ```
pub fn decode<T, D, F>(status: u16, body: &str, project: F) -> Result<D>
where
    T: DeserializeOwned,
    F: FnOnce(T) -> D,
{
    if status > MAX_SUCCESS_STATUS {
        return Err(Error::Http {
            status,
            message: String::new(),
        });
    }

    decode_str(body).map(project)
}

/// Decodes a JSON body into `T` without looking at any status code.
///
/// # Errors
///
/// Returns [`Error::Decode`] carrying the decoder's diagnostic if the body
/// does not match `T`.
pub fn decode_str<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        tracing::debug!(error = %e, "Failed to decode response body");
        Error::Decode(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::GlobalVariable;

    const VARIABLE: &str =
        r#"{"name":"x","value":"5","readOnly":false,"isEnum":false,"enumValues":[],"created":1,"modified":2}"#;

    #[test]
    fn accepts_200_and_201() {
        for status in [200, 201] {
            let value = decode(status, VARIABLE, |v: GlobalVariable| v.value).unwrap();
            assert_eq!(value, "5");
        }
    }

    #[test]
    fn rejects_everything_above_201_regardless_of_body() {
        for status in [202, 204, 301, 304, 400, 401, 404, 500, 503] {
            let err = decode(status, VARIABLE, |v: GlobalVariable| v).unwrap_err();
            match err {
                Error::Http { status: s, message } => {
                    assert_eq!(s, status);
                    assert!(message.is_empty());
                }
                other => panic!("expected HTTP error, got {other:?}"),
            }
        }
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode(200, "{\"name\": ", |v: GlobalVariable| v).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn schema_mismatch_is_a_decode_error() {
        let err = decode(200, r#"{"name":"x"}"#, |v: GlobalVariable| v).unwrap_err();
        match err {
            Error::Decode(message) => assert!(message.contains("value")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn empty_body_is_a_decode_error() {
        let err = decode(200, "", |v: Vec<GlobalVariable>| v).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn projection_shapes_the_result() {
        let pair = decode(200, VARIABLE, |v: GlobalVariable| (v.value, v.modified)).unwrap();
        assert_eq!(pair, ("5".to_string(), 2));

        let name_len = decode(201, VARIABLE, |v: GlobalVariable| v.name.len()).unwrap();
        assert_eq!(name_len, 1);
    }

    #[test]
    fn decode_str_ignores_status() {
        let v: GlobalVariable = decode_str(VARIABLE).unwrap();
        assert_eq!(v.name, "x");
    }
}
