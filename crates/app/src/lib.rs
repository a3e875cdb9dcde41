//! # irrigo-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `ControllerApi`: read settings/programs/run state, send commands
//!   - `Sleeper`: wait between poll ticks
//!   - `DashboardView`: pending controls, switches, notices, confirmation
//!   - `EditTarget`: remember which program the edit page opens
//! - Define **use-cases** as service structs:
//!   - `DashboardLoader`: concurrent initial load with aggregated failure
//!   - `StatePoller`: immediate then periodic run-state refresh, cancellable
//!   - `ActionDispatcher`: optimistic control commands with rollback
//!
//! ## Dependency rule
//! Depends on `irrigo-domain` only (plus `futures` for joins and aborts).
//! Never imports adapter crates, and never assumes a particular async
//! runtime: port futures are not required to be `Send`, so the browser
//! adapter can implement them.

pub mod ports;
pub mod services;
