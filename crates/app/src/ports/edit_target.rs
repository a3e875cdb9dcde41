//! Edit-target port: the one value the dashboard keeps across navigation.

use irrigo_domain::id::ProgramId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot store the program to edit: {0}")]
pub struct EditTargetError(pub String);

/// Remembers which program the edit page should open.
pub trait EditTarget {
    /// Store `program` as the edit target, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`EditTargetError`] when the backing store is unavailable.
    fn remember(&self, program: &ProgramId) -> Result<(), EditTargetError>;

    /// The last stored edit target.
    fn recall(&self) -> Option<ProgramId>;
}
