// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Protocol implementation for communicating with web power switches.
//!
//! The device exposes a small REST API authenticated with HTTP Basic Auth:
//!
//! - `GET restapi/relay/outlets/` lists the outlets
//! - `PUT restapi/relay/outlets/{id}/state/` switches one outlet
//!
//! [`SwitchClient`] wraps both endpoints; [`SwitchConfig`] holds the
//! connection parameters.

mod http;

pub use http::{SwitchClient, SwitchConfig};
