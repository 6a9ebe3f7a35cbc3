// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outlet addressing and power state types.

use std::fmt;

/// Represents the commanded power state of an outlet.
///
/// # Examples
///
/// ```
/// use webpowerswitch::types::PowerState;
///
/// assert_eq!(PowerState::On.form_value(), "true");
/// assert_eq!(PowerState::from(false), PowerState::Off);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// Outlet is off.
    Off,
    /// Outlet is on.
    On,
}

impl PowerState {
    /// Returns the value sent in the `value=` form field of a state change.
    #[must_use]
    pub const fn form_value(&self) -> &'static str {
        match self {
            Self::Off => "false",
            Self::On => "true",
        }
    }

    /// Returns the form-encoded request body for a state change.
    #[must_use]
    pub fn form_body(&self) -> String {
        format!("value={}", self.form_value())
    }

    /// Returns `true` for [`PowerState::On`].
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "OFF"),
            Self::On => write!(f, "ON"),
        }
    }
}

impl From<bool> for PowerState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<PowerState> for bool {
    fn from(value: PowerState) -> Self {
        value.is_on()
    }
}

/// Identifier of an outlet on the switch.
///
/// The identifier is opaque: the client does not check that the outlet
/// exists, the device rejects unknown ids with an HTTP error.
///
/// # Examples
///
/// ```
/// use webpowerswitch::types::OutletId;
///
/// let id = OutletId::from(3u32);
/// assert_eq!(id.as_str(), "3");
///
/// let id = OutletId::from("7");
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutletId(String);

impl OutletId {
    /// Creates an outlet id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for `.` and `..`, which URL resolution would collapse
    /// into the parent path instead of sending to the device.
    #[must_use]
    pub fn is_dot_segment(&self) -> bool {
        matches!(self.0.as_str(), "." | "..")
    }

    /// Returns the id encoded as a single URL path segment.
    #[must_use]
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for OutletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OutletId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for OutletId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for OutletId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

macro_rules! outlet_id_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OutletId {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

outlet_id_from_int!(u8, u16, u32, u64, usize);
