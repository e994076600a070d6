//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
mod change_list;
mod directory_picker;
mod session;
mod status_bar;

pub use app::AppState;
pub use change_list::ChangeListState;
pub use directory_picker::{DirectoryPickerState, PickerConfig};
pub use session::Session;
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
