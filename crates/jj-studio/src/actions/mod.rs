//! Actions module
//!
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput) that the active view translates
//! - Global actions that affect the entire application
//! - Screen/domain specific actions that are already targeted

// Shared action types
pub mod global;
pub mod navigation;
pub mod text_input;

// Targeted action types
pub mod change_list;
pub mod directory_picker;
pub mod session;
pub mod status_bar;

pub use change_list::ChangeListAction;
pub use directory_picker::DirectoryPickerAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use session::SessionAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),

    // Global actions (no translation needed)
    Global(GlobalAction),

    // Targeted actions
    /// Repository selection and change loading
    Session(SessionAction),
    /// Directory picker popup
    DirectoryPicker(DirectoryPickerAction),
    /// Cursor in the loaded change list
    ChangeList(ChangeListAction),
    /// Status bar feedback
    StatusBar(StatusBarAction),
}
