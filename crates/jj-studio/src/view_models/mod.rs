pub mod session_view_model;
pub mod status_bar;

pub use session_view_model::{ChangeEntryViewModel, SessionHeaderViewModel, SessionViewMode};
pub use status_bar::StatusBarViewModel;
