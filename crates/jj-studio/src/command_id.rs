//! Command identifiers
//!
//! Commands are the semantic actions a user can trigger from the keymap.

use serde::{Deserialize, Serialize};

use crate::actions::{Action, GlobalAction, NavigationAction, SessionAction};

/// Unique identifier for each command in the application.
///
/// Serialized as snake_case (e.g., `SelectRepository` -> `"select_repository"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Repository ===
    /// Open the directory picker
    SelectRepository,
    /// Load the changes of the current repository again
    Reload,

    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    /// Jump to the first entry (gg in vim)
    NavigateToTop,
    /// Jump to the last entry (G in vim)
    NavigateToBottom,

    // === General ===
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    /// Convert the command into the action it triggers
    pub fn to_action(self) -> Action {
        match self {
            Self::SelectRepository => Action::Session(SessionAction::SelectRepository),
            Self::Reload => Action::Session(SessionAction::Reload),

            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Whether the command moves a cursor rather than doing work
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateNext
                | Self::NavigatePrevious
                | Self::NavigateToTop
                | Self::NavigateToBottom
        )
    }
}
