//! Application State

use crate::keymap::{default_keymap, Keymap};
use crate::theme::Theme;
use crate::views::{SessionView, View};
use jj_studio_config::AppConfig;

use super::{ChangeListState, DirectoryPickerState, Session, StatusBarState};

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    pub view_stack: Vec<Box<dyn View>>,
    pub session: Session,
    pub change_list: ChangeListState,
    pub directory_picker: DirectoryPickerState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    pub keymap: Keymap,
    pub config: AppConfig,
}

impl AppState {
    /// Initial state for a run with the given configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(SessionView::new())],
            session: Session::default(),
            change_list: ChangeListState::default(),
            directory_picker: DirectoryPickerState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            keymap: default_keymap(),
            config,
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|view| view.as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::ViewId;

    fn assert_shareable<T: Send + Sync>() {}

    #[test]
    fn test_state_can_be_shared_with_the_worker() {
        assert_shareable::<AppState>();
    }

    #[test]
    fn test_initial_view_is_session() {
        let state = AppState::default();
        assert_eq!(state.active_view().map(|v| v.view_id()), Some(ViewId::Session));
    }
}
