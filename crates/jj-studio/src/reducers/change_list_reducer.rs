//! Change List Reducer
//!
//! Moves the cursor through the loaded changes with wrapping.

use crate::actions::ChangeListAction;
use crate::state::ChangeListState;

pub fn reduce_change_list(
    mut state: ChangeListState,
    action: &ChangeListAction,
    len: usize,
) -> ChangeListState {
    if len == 0 {
        state.selected = 0;
        return state;
    }

    state.selected = match action {
        ChangeListAction::NavigateNext => (state.selected + 1) % len,
        ChangeListAction::NavigatePrevious => {
            if state.selected == 0 {
                len - 1
            } else {
                state.selected - 1
            }
        }
        ChangeListAction::NavigateToTop => 0,
        ChangeListAction::NavigateToBottom => len - 1,
    };

    state
}
