// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the web power switch REST API.

use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};

use crate::error::Error;
use crate::response::{Outlet, parse_outlets};
use crate::types::{OutletId, PowerState};

/// Path of the outlet collection, relative to the device base URL.
const OUTLETS_PATH: &str = "restapi/relay/outlets/";

/// Anti-CSRF header required by the device firmware on state changes.
const CSRF_HEADER: &str = "X-CSRF";
const CSRF_TOKEN: &str = "x";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

// ============================================================================
// SwitchConfig - Connection parameters for one switch
// ============================================================================

/// Configuration for a web power switch.
///
/// Holds the base URL, the Basic Auth credentials and the request timeout.
/// Nothing is validated or sent over the network until
/// [`into_client`](Self::into_client) is called, and even then only the
/// URL is parsed.
///
/// # Examples
///
/// ```
/// use webpowerswitch::SwitchConfig;
/// use std::time::Duration;
///
/// let client = SwitchConfig::new("http://192.168.0.100/", "admin", "1234")
///     .with_timeout(Duration::from_secs(5))
///     .into_client()
///     .unwrap();
/// assert_eq!(client.base_url().as_str(), "http://192.168.0.100/");
/// ```
#[derive(Clone)]
pub struct SwitchConfig {
    base_url: String,
    credentials: Credentials,
    timeout: Duration,
}

impl SwitchConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a configuration for the switch at `base_url`.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Absolute URL of the device, optionally with a path prefix
    /// * `username` - Basic Auth user name
    /// * `password` - Basic Auth password
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: Credentials {
                username: username.into(),
                password: password.into(),
            },
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the base URL as given.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the Basic Auth user name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creates a `SwitchClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if the base URL is not an absolute
    /// URL with a host, or [`Error::Transport`] if the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<SwitchClient, Error> {
        let base_url = parse_base_url(&self.base_url)?;

        let client = Client::builder().timeout(self.timeout).build()?;

        Ok(SwitchClient {
            base_url,
            client,
            credentials: self.credentials,
        })
    }
}

impl fmt::Debug for SwitchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchConfig")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Parses and normalizes the device base URL.
///
/// The path always ends in `/` so that relative endpoint paths resolve
/// underneath any prefix instead of replacing its last segment.
fn parse_base_url(input: &str) -> Result<Url, Error> {
    let mut url =
        Url::parse(input).map_err(|e| Error::InvalidAddress(format!("{input}: {e}")))?;

    if url.cannot_be_a_base() || !url.has_host() {
        return Err(Error::InvalidAddress(format!("{input}: missing host")));
    }

    // Credentials are sent explicitly; keep them out of the URL and the logs.
    if url.set_username("").is_err() || url.set_password(None).is_err() {
        return Err(Error::InvalidAddress(format!("{input}: cannot strip credentials")));
    }
    url.set_query(None);
    url.set_fragment(None);

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

// ============================================================================
// SwitchClient - HTTP client implementation
// ============================================================================

/// HTTP client for one web power switch.
///
/// Every call is a single authenticated request/response exchange; the
/// client keeps no per-call state, so it can be cloned and shared across
/// tasks freely. Dropping a returned future cancels the request.
///
/// # Examples
///
/// ```no_run
/// use webpowerswitch::SwitchClient;
///
/// # async fn example() -> webpowerswitch::Result<()> {
/// let client = SwitchClient::new("http://192.168.0.100/", "admin", "1234")?;
///
/// for outlet in client.list_outlets().await? {
///     println!("{}: {}", outlet.name, outlet.power_state());
/// }
///
/// client.turn_outlet_on("1").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SwitchClient {
    base_url: Url,
    client: Client,
    credentials: Credentials,
}

/// HTTP Basic Auth credentials.
#[derive(Clone)]
struct Credentials {
    username: String,
    password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl SwitchClient {
    /// Creates a client with the default 30 second timeout.
    ///
    /// No network I/O happens here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAddress`] if `base_url` cannot be parsed as an
    /// absolute URL with a host.
    pub fn new(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, Error> {
        SwitchConfig::new(base_url, username, password).into_client()
    }

    /// Returns the normalized base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an API path against the base URL.
    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path)
            .map_err(|e| Error::InvalidPath(format!("{path}: {e}")))
    }

    /// Builds the state-change URL for an outlet.
    ///
    /// `.` and `..` are rejected: percent-encoding does not protect them,
    /// since `%2E` forms are dot segments too.
    fn outlet_state_url(&self, outlet_id: &OutletId) -> Result<Url, Error> {
        if outlet_id.is_dot_segment() {
            return Err(Error::InvalidOutletId(outlet_id.to_string()));
        }
        self.endpoint(&format!("{OUTLETS_PATH}{}/state/", outlet_id.path_segment()))
    }

    /// Lists all outlets on the switch, in the order the device reports them.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the request fails or times out
    /// - [`Error::UnexpectedStatus`] if the device does not answer `200 OK`
    /// - [`Error::Decode`] if the body is not a JSON array of outlets
    pub async fn list_outlets(&self) -> Result<Vec<Outlet>, Error> {
        let url = self.endpoint(OUTLETS_PATH)?;

        tracing::debug!(url = %url, "Listing outlets");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON_CONTENT_TYPE)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received outlet listing response");

        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                code: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let outlets = parse_outlets(&body)?;

        tracing::debug!(count = outlets.len(), "Decoded outlets");

        Ok(outlets)
    }

    /// Sets the power state of one outlet.
    ///
    /// Accepts anything convertible to [`PowerState`], including `bool`.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the request fails or times out
    /// - [`Error::InvalidOutletId`] for the ids `.` and `..`, before any
    ///   request is sent
    /// - [`Error::UnexpectedStatus`] if the device does not answer
    ///   `204 No Content`
    pub async fn set_outlet_state(
        &self,
        outlet_id: impl Into<OutletId>,
        state: impl Into<PowerState>,
    ) -> Result<(), Error> {
        let outlet_id = outlet_id.into();
        let state = state.into();
        let url = self.outlet_state_url(&outlet_id)?;

        tracing::debug!(url = %url, outlet = %outlet_id, state = %state, "Setting outlet state");

        let response = self
            .client
            .put(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(CSRF_HEADER, CSRF_TOKEN)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .body(state.form_body())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Received outlet state response");

        if status != StatusCode::NO_CONTENT {
            return Err(Error::UnexpectedStatus {
                code: status.as_u16(),
            });
        }

        Ok(())
    }

    /// Turns an outlet on.
    ///
    /// # Errors
    ///
    /// See [`set_outlet_state`](Self::set_outlet_state).
    pub async fn turn_outlet_on(&self, outlet_id: impl Into<OutletId>) -> Result<(), Error> {
        self.set_outlet_state(outlet_id, PowerState::On).await
    }

    /// Turns an outlet off.
    ///
    /// # Errors
    ///
    /// See [`set_outlet_state`](Self::set_outlet_state).
    pub async fn turn_outlet_off(&self, outlet_id: impl Into<OutletId>) -> Result<(), Error> {
        self.set_outlet_state(outlet_id, PowerState::Off).await
    }
}
