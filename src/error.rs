// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the web power switch client.
//!
//! Every failure is returned to the caller as an [`Error`]: a bad base
//! address at construction, a transport failure, an unexpected HTTP status,
//! or a response body that does not decode.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// The base URL could not be used as a device address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The outlet id cannot be addressed as a single path segment.
    #[error("invalid outlet id: {0:?}")]
    InvalidOutletId(String),

    /// An API path could not be resolved against the base URL.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// The HTTP exchange failed (connection, timeout, or client setup).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The device answered with a status other than the expected one.
    #[error("request failed, got status {code} from web power switch")]
    UnexpectedStatus {
        /// The status code received from the device.
        code: u16,
    },

    /// The response body did not match the expected JSON shape.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Returns the HTTP status code for [`Error::UnexpectedStatus`].
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { code } => Some(*code),
            _ => None,
        }
    }

    /// Returns `true` if the request timed out before the device answered.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_timeout())
    }
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_display() {
        let err = Error::UnexpectedStatus { code: 401 };
        assert_eq!(
            err.to_string(),
            "request failed, got status 401 from web power switch"
        );
    }

    #[test]
    fn status_code_accessor() {
        assert_eq!(Error::UnexpectedStatus { code: 503 }.status_code(), Some(503));
        assert_eq!(Error::InvalidAddress("x".into()).status_code(), None);
    }

    #[test]
    fn error_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
        assert!(!err.is_timeout());
    }

    #[test]
    fn invalid_outlet_id_display() {
        let err = Error::InvalidOutletId("..".to_string());
        assert_eq!(err.to_string(), "invalid outlet id: \"..\"");
    }

    #[test]
    fn invalid_path_is_not_an_address_error() {
        let err = Error::InvalidPath("restapi/relay/outlets/".to_string());
        assert_eq!(err.to_string(), "invalid request path: restapi/relay/outlets/");
        assert!(!matches!(err, Error::InvalidAddress(_)));
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn invalid_address_display() {
        let err = Error::InvalidAddress("not a url".to_string());
        assert_eq!(err.to_string(), "invalid address: not a url");
    }
}
