//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod controller;
pub mod edit_target;
pub mod timer;
pub mod view;

pub use controller::{ApiError, ControllerApi};
pub use edit_target::{EditTarget, EditTargetError};
pub use timer::Sleeper;
pub use view::{AutomationScope, Control, DashboardView, Notice, NoticeLevel};
