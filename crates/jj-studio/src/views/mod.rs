use crate::actions::{Action, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

pub mod directory_picker_view;
pub mod session_view;
pub mod status_bar;

pub use directory_picker_view::DirectoryPickerView;
pub use session_view::SessionView;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Session,
    DirectoryPicker,
}

/// View trait - the interface every entry of the view stack implements
///
/// Must stay object-safe: views travel inside actions as `Box<dyn View>`,
/// actions are sent between threads, and the view stack is read from the
/// shared state by the worker.
pub trait View: std::fmt::Debug + Send + Sync {
    fn view_id(&self) -> ViewId;

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Keyboard capabilities of this view
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box (Clone requires Sized)
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate a generic navigation action to this view's action.
    /// `None` means the view does not navigate.
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate a generic text input action to this view's action.
    /// `None` means the view does not take text.
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Whether a keymap-produced action may run while this view is on top
    fn accepts_action(&self, _action: &Action) -> bool {
        true
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// Views render bottom-up; overlays clear the area they cover.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    for view in &state.view_stack {
        view.render(state, area, f);
    }
}
