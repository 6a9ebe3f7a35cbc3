// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outlet listing response parsing.

use serde::{Deserialize, Serialize};

use crate::types::PowerState;

/// Snapshot of one outlet as reported by the switch.
///
/// The switch returns the outlet list as a JSON array like:
///
/// ```json
/// [{"name": "Fan1", "critical": false, "transient_state": false,
///   "cycle_delay": null, "physical_state": true, "locked": false,
///   "state": true}]
/// ```
///
/// # Examples
///
/// ```
/// use webpowerswitch::Outlet;
///
/// let json = r#"{
///     "name": "Fan1", "critical": false, "transient_state": false,
///     "cycle_delay": null, "physical_state": true, "locked": false,
///     "state": true
/// }"#;
/// let outlet: Outlet = serde_json::from_str(json).unwrap();
/// assert_eq!(outlet.name, "Fan1");
/// assert!(outlet.is_on());
/// assert!(outlet.cycle_delay().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outlet {
    /// Human-readable outlet label.
    pub name: String,
    /// Importance flag set on the device.
    pub critical: bool,
    /// True while the outlet is changing state.
    pub transient_state: bool,
    /// Delay applied during a power cycle, if configured.
    #[serde(default)]
    pub cycle_delay: Option<String>,
    /// Sensed relay state.
    pub physical_state: bool,
    /// True if changes to this outlet are disallowed.
    pub locked: bool,
    /// Commanded power state.
    pub state: bool,
}

impl Outlet {
    /// Returns `true` if the outlet is commanded on.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.state
    }

    /// Returns the commanded power state.
    #[must_use]
    pub fn power_state(&self) -> PowerState {
        PowerState::from(self.state)
    }

    /// Returns the power cycle delay, if the device reports one.
    #[must_use]
    pub fn cycle_delay(&self) -> Option<&str> {
        self.cycle_delay.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_outlet_with_null_cycle_delay() {
        let json = r#"{
            "name": "HLG651",
            "critical": true,
            "transient_state": true,
            "cycle_delay": null,
            "physical_state": true,
            "locked": false,
            "state": true
        }"#;
        let outlet: Outlet = serde_json::from_str(json).unwrap();
        assert_eq!(outlet.name, "HLG651");
        assert!(outlet.critical);
        assert!(outlet.transient_state);
        assert_eq!(outlet.cycle_delay, None);
        assert!(outlet.physical_state);
        assert!(!outlet.locked);
        assert_eq!(outlet.power_state(), PowerState::On);
    }

    #[test]
    fn parse_outlet_with_cycle_delay() {
        let json = r#"{
            "name": "Aerator",
            "critical": false,
            "transient_state": false,
            "cycle_delay": "5",
            "physical_state": false,
            "locked": true,
            "state": false
        }"#;
        let outlet: Outlet = serde_json::from_str(json).unwrap();
        assert_eq!(outlet.cycle_delay(), Some("5"));
        assert!(outlet.locked);
        assert!(!outlet.is_on());
    }

    #[test]
    fn parse_outlet_missing_cycle_delay() {
        let json = r#"{"name": "Outlet 8", "critical": false, "transient_state": false,
            "physical_state": false, "locked": false, "state": false}"#;
        let outlet: Outlet = serde_json::from_str(json).unwrap();
        assert!(outlet.cycle_delay().is_none());
    }

    #[test]
    fn parse_outlet_ignores_unknown_fields() {
        let json = r#"{"name": "Fan1", "critical": false, "transient_state": false,
            "cycle_delay": null, "physical_state": true, "locked": false,
            "state": true, "index": 6}"#;
        let outlet: Outlet = serde_json::from_str(json).unwrap();
        assert_eq!(outlet.name, "Fan1");
    }

    #[test]
    fn parse_outlet_rejects_wrong_type() {
        let json = r#"{"name": "Fan1", "critical": "yes", "transient_state": false,
            "cycle_delay": null, "physical_state": true, "locked": false, "state": true}"#;
        assert!(serde_json::from_str::<Outlet>(json).is_err());
    }

    #[test]
    fn serialize_keeps_wire_names() {
        let outlet = Outlet {
            name: "Fan1".to_string(),
            critical: false,
            transient_state: false,
            cycle_delay: None,
            physical_state: true,
            locked: false,
            state: true,
        };
        let value = serde_json::to_value(&outlet).unwrap();
        assert_eq!(value["transient_state"], false);
        assert_eq!(value["physical_state"], true);
        assert!(value["cycle_delay"].is_null());
    }
}
