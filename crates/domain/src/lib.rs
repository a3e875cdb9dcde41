//! # irrigo-domain
//!
//! Pure domain model for the irrigo dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, date helpers
//! - Mirror the controller's wire data: **Programs**, **Steps**, **Zones**,
//!   **User settings**, **Run state**, and control **Commands**
//! - Derive everything a dashboard shows from that data: recurrence text,
//!   the month grid, step tags, scheduling badges, start/stop enablement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod card;
pub mod command;
pub mod month;
pub mod program;
pub mod run_state;
pub mod settings;
pub mod zone;

mod wire;
