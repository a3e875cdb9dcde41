//! Step: one zone watered for a fixed number of minutes.

use serde::{Deserialize, Serialize};

use crate::id::ZoneId;

/// A single zone/duration pairing within a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// `None` when the controller wrote a step without a zone; it never runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<ZoneId>,
    /// Minutes the zone stays open.
    #[serde(default = "default_duration")]
    pub duration: u32,
}

fn default_duration() -> u32 {
    1
}

impl Step {
    #[must_use]
    pub fn new(zone_id: ZoneId, duration: u32) -> Self {
        Self {
            zone_id: Some(zone_id),
            duration,
        }
    }
}
