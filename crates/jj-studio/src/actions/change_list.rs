//! Change list cursor actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeListAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
}
