//! User settings: the parts of `user_settings.json` the dashboard reads.
//!
//! The file also carries Wi-Fi credentials and relay wiring; those fields
//! are ignored here.

use serde::{Deserialize, Serialize};

use crate::zone::{Zone, ZoneDirectory, deserialize_zone_list};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSettings {
    /// Zones without an `id` are dropped, as the controller does.
    #[serde(default, deserialize_with = "deserialize_zone_list")]
    pub zones: Vec<Zone>,
    /// Global switch for scheduled runs.
    #[serde(default)]
    pub automatic_programs_enabled: bool,
    /// Minutes the controller waits between two steps.
    #[serde(default)]
    pub activation_delay: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_active_zones: Option<u32>,
    /// Upper bound, in minutes, for a single step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_zone_duration: Option<u32>,
}

impl UserSettings {
    #[must_use]
    pub fn zone_directory(&self) -> ZoneDirectory {
        ZoneDirectory::from_zones(&self.zones)
    }
}
