//! Navigation actions - translated by the active view

/// Generic navigation actions (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// j, down arrow
    Next,
    /// k, up arrow
    Previous,
    /// gg
    ToTop,
    /// G
    ToBottom,
}
