//! Repository session
//!
//! The complete UI-visible state for the currently selected repository.
//! A `Session` is never edited in place by callers: the session reducer
//! returns a new snapshot for every transition.

use jj_client::Change;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Selected repository; empty means none selected yet
    pub repository_path: String,
    /// Changes in backend order
    pub changes: Vec<Change>,
    pub is_loading: bool,
    /// Message of the last failure; empty means no error
    pub error_message: String,
}

impl Session {
    pub fn has_repository(&self) -> bool {
        !self.repository_path.is_empty()
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }
}
