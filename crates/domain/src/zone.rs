//! Zone: an irrigation valve output, and the id → name lookup cards use.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::id::ZoneId;
use crate::wire::null_as_default;

/// Whether the controller's own UI lists the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoneStatus {
    #[default]
    Show,
    Hide,
}

/// A zone entry from `user_settings.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: ZoneId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: ZoneStatus,
    /// GPIO pin driving the relay; informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pin: Option<u32>,
}

impl Zone {
    #[must_use]
    pub fn new(id: ZoneId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            status: ZoneStatus::Show,
            pin: None,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.status == ZoneStatus::Show
    }

    /// Configured name, or `"Zone N+1"` when blank or missing.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => fallback_name(self.id),
        }
    }
}

/// Zone list as written by the controller, dropping entries without an `id`.
pub(crate) fn deserialize_zone_list<'de, D>(deserializer: D) -> Result<Vec<Zone>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct WireZone {
        id: Option<ZoneId>,
        name: Option<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        status: ZoneStatus,
        pin: Option<u32>,
    }

    let zones: Vec<WireZone> = null_as_default(deserializer)?;
    Ok(zones
        .into_iter()
        .filter_map(|zone| {
            Some(Zone {
                id: zone.id?,
                name: zone.name,
                status: zone.status,
                pin: zone.pin,
            })
        })
        .collect())
}

fn fallback_name(id: ZoneId) -> String {
    format!("Zone {}", u64::from(id.index()) + 1)
}

/// Zone id → display name lookup built from the settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneDirectory {
    names: HashMap<ZoneId, String>,
}

impl ZoneDirectory {
    #[must_use]
    pub fn from_zones<'a>(zones: impl IntoIterator<Item = &'a Zone>) -> Self {
        let names = zones
            .into_iter()
            .map(|zone| (zone.id, zone.display_name()))
            .collect();
        Self { names }
    }

    /// Display name for `id`, falling back to `"Zone N+1"` for unknown zones.
    #[must_use]
    pub fn name_of(&self, id: ZoneId) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| fallback_name(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
