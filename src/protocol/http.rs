// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the hub's REST API.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::error::ProtocolError;
use crate::protocol::{RawResponse, Transport};

/// API version header required by the hub.
const FIBARO_VERSION_HEADER: &str = "x-fibaro-version";

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for an HTTP connection to the hub.
///
/// # Examples
///
/// ```
/// use hc3_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// // Simple configuration
/// let config = HttpConfig::new("192.168.1.57");
/// assert_eq!(config.base_url(), "http://192.168.1.57/api");
///
/// // With all options
/// let config = HttpConfig::new("192.168.1.57")
///     .with_port(8080)
///     .with_https()
///     .with_credentials("admin", "password")
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "https://192.168.1.57:8080/api");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    credentials: Option<(String, String)>,
    timeout: Option<Duration>,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;

    /// Creates a new configuration for the hub at `host` (name or IP).
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            credentials: None,
            timeout: None,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the basic authentication credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password.into()));
        self
    }

    /// Sets a request timeout. Without one, the transport's default applies.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the credentials if set.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.credentials
            .as_ref()
            .map(|(u, p)| (u.as_str(), p.as_str()))
    }

    /// Returns the timeout if set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Builds the API root URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}/api", self.host)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }

        let base_url = self.base_url();
        let credentials = self
            .credentials
            .map(|(username, password)| Credentials { username, password });

        HttpClient::with_parts(base_url, credentials, self.timeout)
    }
}

// ============================================================================
// HttpClient - reqwest-backed transport
// ============================================================================

/// HTTP transport for the hub.
///
/// Every request carries the headers the hub expects:
/// `Authorization: Basic ...` (when credentials are set),
/// `X-Fibaro-Version: 2`, `Content-Type: application/json; charset=utf-8`
/// and `Accept: */*`.
///
/// # Examples
///
/// ```no_run
/// use hc3_lib::protocol::{HttpClient, Transport};
///
/// # async fn example() -> hc3_lib::Result<()> {
/// let client = HttpClient::new("192.168.1.57")?.with_credentials("admin", "admin");
/// let response = client.get("/devices").await;
/// println!("{} {}", response.status(), response.body());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
    credentials: Option<Credentials>,
}

/// HTTP basic authentication credentials.
#[derive(Clone)]
pub struct Credentials {
    /// Username for authentication.
    pub username: String,
    /// Password for authentication.
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl HttpClient {
    /// Creates a new client for the hub at `host`.
    ///
    /// `host` may carry a scheme (`http://`, `https://`) and a port;
    /// without a scheme, `http://` is used.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        let base_url = api_root(&host.into())?;
        Self::with_parts(base_url, None, None)
    }

    fn with_parts(
        base_url: String,
        credentials: Option<Credentials>,
        timeout: Option<Duration>,
    ) -> Result<Self, ProtocolError> {
        let mut builder = Client::builder().default_headers(default_headers());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ProtocolError::Http)?;

        Ok(Self {
            base_url,
            client,
            credentials,
        })
    }

    /// Sets authentication credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Returns the API root URL, e.g. `http://192.168.1.57/api`.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Transport for HttpClient {
    async fn get(&self, path: &str) -> RawResponse {
        let url = self.build_url(path);

        tracing::debug!(url = %url, "Sending HTTP request");

        let mut request = self.client.get(&url);
        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "HTTP request failed");
                return RawResponse::transport_error(e.to_string());
            }
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) if body.is_empty() => {
                tracing::debug!(status, "Received HTTP response without body");
                RawResponse::new(status, "No data", String::new())
            }
            Ok(body) => {
                tracing::debug!(status, body = %body, "Received HTTP response");
                RawResponse::new(status, "OK", body)
            }
            Err(e) => {
                tracing::warn!(url = %url, status, error = %e, "Failed to read HTTP response body");
                RawResponse::transport_error(e.to_string())
            }
        }
    }
}

/// Turns a host (with or without scheme) into the API root URL.
fn api_root(host: &str) -> Result<String, ProtocolError> {
    let host = host.trim().trim_end_matches('/');
    if host.is_empty() {
        return Err(ProtocolError::InvalidAddress("host is required".to_string()));
    }

    let origin = if host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("http://{host}")
    };
    Ok(format!("{origin}/api"))
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(FIBARO_VERSION_HEADER),
        HeaderValue::from_static("2"),
    );
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers
}
