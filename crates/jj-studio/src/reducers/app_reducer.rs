use crate::actions::{Action, DirectoryPickerAction, GlobalAction, SessionAction};
use crate::reducers::{
    change_list_reducer::reduce_change_list, directory_picker_reducer::reduce_directory_picker,
    session_reducer::reduce_session, status_bar_reducer::reduce_status_bar,
};
use crate::state::{AppState, ChangeListState};
use crate::views::ViewId;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::Close) => {
            // Pop the top-most view, closing the last one quits
            if state.view_stack.len() > 1 {
                let popped = state.view_stack.pop();
                log::debug!("Closed view: {:?}", popped.map(|v| v.view_id()));
            } else {
                log::debug!("Closing last view - quitting application");
                state.running = false;
            }
        }
        Action::Global(GlobalAction::PushView(view)) => {
            let is_duplicate = state
                .view_stack
                .last()
                .is_some_and(|top| top.view_id() == view.view_id());
            if is_duplicate {
                log::debug!("View {:?} is already on top", view.view_id());
            } else {
                log::debug!("Pushing view onto stack: {:?}", view.view_id());
                state.view_stack.push(view.clone());
            }
        }
        Action::Global(GlobalAction::KeyPressed(_)) => {}

        Action::Session(session_action) => {
            state.session = reduce_session(state.session, session_action);
            // A fresh list (or a cleared one) starts at the top
            if matches!(
                session_action,
                SessionAction::Loaded { .. } | SessionAction::LoadFailed { .. }
            ) {
                state.change_list = ChangeListState::default();
            }
        }

        Action::ChangeList(list_action) => {
            let len = state.session.changes.len();
            state.change_list = reduce_change_list(state.change_list, list_action, len);
        }

        Action::DirectoryPicker(picker_action) => {
            if matches!(picker_action, DirectoryPickerAction::Close)
                && state.active_view().map(|v| v.view_id()) == Some(ViewId::DirectoryPicker)
            {
                state.view_stack.pop();
            }
            state.directory_picker = reduce_directory_picker(state.directory_picker, picker_action);
        }

        Action::StatusBar(status_action) => {
            state.status_bar = reduce_status_bar(state.status_bar, status_action);
        }

        // Generic actions are translated by middleware before reaching here
        Action::Navigate(_) | Action::TextInput(_) => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ChangeListAction;
    use crate::views::DirectoryPickerView;
    use jj_client::Change;

    fn changes(n: usize) -> Vec<Change> {
        (0..n)
            .map(|i| Change::new(format!("c{i}"), format!("m{i}"), "", "Bob", "now"))
            .collect()
    }

    #[test]
    fn test_close_on_last_view_quits() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Close));
        assert!(!state.running);
    }

    #[test]
    fn test_push_view_ignores_duplicates() {
        let push = Action::Global(GlobalAction::PushView(Box::new(DirectoryPickerView::new())));
        let state = reduce(AppState::default(), &push);
        let state = reduce(state, &push);
        assert_eq!(state.view_stack.len(), 2);

        let state = reduce(state, &Action::Global(GlobalAction::Close));
        assert_eq!(state.view_stack.len(), 1);
        assert!(state.running);
    }

    #[test]
    fn test_picker_close_pops_picker_view() {
        let state = reduce(
            AppState::default(),
            &Action::Global(GlobalAction::PushView(Box::new(DirectoryPickerView::new()))),
        );
        let state = reduce(state, &Action::DirectoryPicker(DirectoryPickerAction::Close));
        assert_eq!(state.view_stack.len(), 1);
        assert_eq!(
            state.active_view().map(|v| v.view_id()),
            Some(ViewId::Session)
        );
    }

    #[test]
    fn test_loaded_changes_reset_cursor() {
        let mut state = AppState::default();
        state.session.changes = changes(3);
        let state = reduce(state, &Action::ChangeList(ChangeListAction::NavigateToBottom));
        assert_eq!(state.change_list.selected, 2);

        let state = reduce(
            state,
            &Action::Session(SessionAction::Loaded {
                path: "/repo".to_string(),
                generation: 1,
                changes: changes(5),
            }),
        );
        assert_eq!(state.change_list.selected, 0);
        assert_eq!(state.session.changes.len(), 5);
    }
}
