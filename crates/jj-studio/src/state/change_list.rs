//! Change List State

/// Cursor position in the loaded change list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeListState {
    pub selected: usize,
}
