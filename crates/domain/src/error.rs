//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors; this one covers controller
//! values that do not have the expected shape.

/// A controller-provided value that could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `activation_time` is not `HH:MM`.
    #[error("invalid activation time {0:?}, expected HH:MM")]
    ActivationTime(String),

    /// `last_run_date` is not `YYYY-MM-DD`.
    #[error("invalid run date {0:?}, expected YYYY-MM-DD")]
    RunDate(String),

    /// A switch argument outside `on`/`off`, `true`/`false`, `yes`/`no`, `1`/`0`.
    #[error("invalid switch value {0:?}, expected on/off, true/false, yes/no or 1/0")]
    Switch(String),
}
