mod automation_switch;
mod month_grid;
mod program_card;
mod status;
mod toast;

pub use automation_switch::AutomationSwitch;
pub use month_grid::MonthGrid;
pub use program_card::ProgramCardView;
pub use status::{LoadFailed, Loading};
pub use toast::{ToastContainer, ToastProvider, use_toasts};
