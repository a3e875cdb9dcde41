//! `localStorage`-backed edit target, read by the controller's edit page.

use irrigo_app::ports::{EditTarget, EditTargetError};
use irrigo_domain::id::ProgramId;

/// Key the edit page reads the program id from.
const STORAGE_KEY: &str = "selectedProgramId";

/// Stores the edit target in the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageEditTarget;

fn local_storage() -> Result<web_sys::Storage, EditTargetError> {
    web_sys::window()
        .ok_or_else(|| EditTargetError("no window".to_string()))?
        .local_storage()
        .map_err(|err| EditTargetError(format!("{err:?}")))?
        .ok_or_else(|| EditTargetError("localStorage is disabled".to_string()))
}

impl EditTarget for LocalStorageEditTarget {
    fn remember(&self, program: &ProgramId) -> Result<(), EditTargetError> {
        local_storage()?
            .set_item(STORAGE_KEY, program.as_str())
            .map_err(|err| EditTargetError(format!("{err:?}")))
    }

    fn recall(&self) -> Option<ProgramId> {
        local_storage()
            .ok()?
            .get_item(STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|id| !id.trim().is_empty())
            .map(ProgramId::new)
    }
}
