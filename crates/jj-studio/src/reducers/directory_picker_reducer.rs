//! Directory Picker Reducer
//!
//! Edits the typed path. Resolving the path is a side effect and lives in
//! the directory picker middleware.

use crate::actions::DirectoryPickerAction;
use crate::state::DirectoryPickerState;

pub fn reduce_directory_picker(
    mut state: DirectoryPickerState,
    action: &DirectoryPickerAction,
) -> DirectoryPickerState {
    match action {
        DirectoryPickerAction::Open(config) => {
            state.config = config.clone();
            state.reset();
        }
        DirectoryPickerAction::Char(c) => state.input.push(*c),
        DirectoryPickerAction::Backspace => {
            state.input.pop();
        }
        DirectoryPickerAction::ClearInput | DirectoryPickerAction::Close => state.reset(),
        DirectoryPickerAction::Confirm | DirectoryPickerAction::Cancel => {}
    }
    state
}
