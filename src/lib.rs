// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `webpowerswitch` - A Rust client for web power switches.
//!
//! This library talks to the REST API of networked power-distribution units
//! ("web power switches") to list their outlets and switch outlets on or off.
//! Every call is one independent HTTP request authenticated with Basic Auth;
//! the device holds all state.
//!
//! # Quick Start
//!
//! ```no_run
//! use webpowerswitch::SwitchClient;
//!
//! #[tokio::main]
//! async fn main() -> webpowerswitch::Result<()> {
//!     let client = SwitchClient::new("http://192.168.0.100/", "admin", "1234")?;
//!
//!     for outlet in client.list_outlets().await? {
//!         println!("{} is {}", outlet.name, outlet.power_state());
//!     }
//!
//!     client.turn_outlet_off("3").await?;
//!     client.set_outlet_state(3u32, true).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Custom Timeout
//!
//! ```
//! use std::time::Duration;
//! use webpowerswitch::SwitchConfig;
//!
//! let client = SwitchConfig::new("http://192.168.0.100/", "admin", "1234")
//!     .with_timeout(Duration::from_secs(5))
//!     .into_client()
//!     .unwrap();
//! ```

pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use error::{Error, Result};
pub use protocol::{SwitchClient, SwitchConfig};
pub use response::Outlet;
pub use types::{OutletId, PowerState};
