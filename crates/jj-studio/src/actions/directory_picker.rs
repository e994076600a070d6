//! Directory picker popup actions

use crate::state::PickerConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryPickerAction {
    /// Show the picker with a fresh input
    Open(PickerConfig),

    // Text input (translated from TextInputAction)
    Char(char),
    Backspace,
    ClearInput,

    /// Resolve the entered path (Enter)
    Confirm,
    /// Dismiss without a selection (Esc)
    Cancel,
    /// Reset picker state once it has produced its result
    Close,
}
