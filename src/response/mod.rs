// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response types decoded from the switch's REST API.

mod outlet;

pub use outlet::Outlet;

use crate::error::Error;

/// Decodes an outlet listing body, keeping the order reported by the device.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the body is not a JSON array of outlets.
pub fn parse_outlets(body: &[u8]) -> Result<Vec<Outlet>, Error> {
    serde_json::from_slice(body).map_err(Error::Decode)
}
