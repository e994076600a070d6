//! Session View Model
//!
//! Decides which of the five session screens is shown and precomputes the
//! display strings for it. The decision is made once per render, in a fixed
//! order, so the view never re-evaluates the session flags on its own.

use jj_client::Change;

use crate::command_id::CommandId;
use crate::formatting::{
    format_timestamp, format_timestamp_with, truncate_identifier, DEFAULT_ID_LENGTH,
};
use crate::state::{AppState, Session};

/// Title shown in the header
pub const APP_TITLE: &str = "JJ Studio";

/// The screen the session is rendered as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionViewMode {
    /// Nothing selected yet
    Welcome,
    /// A backend call is in flight
    Loading,
    /// The last operation failed; the message is shown verbatim
    Error { message: String },
    /// The repository has changes to list
    ChangesLoaded { entries: Vec<ChangeEntryViewModel> },
    /// The repository is selected but has no changes
    EmptyRepository,
}

impl SessionViewMode {
    /// Pick the screen for `session`, first match wins
    pub fn from_session(session: &Session, timestamp_format: &str) -> Self {
        if !session.has_repository() && !session.is_loading && !session.has_error() {
            return Self::Welcome;
        }
        if session.is_loading {
            return Self::Loading;
        }
        if session.has_error() {
            return Self::Error {
                message: session.error_message.clone(),
            };
        }
        if session.has_repository() && !session.changes.is_empty() {
            let entries = session
                .changes
                .iter()
                .enumerate()
                .map(|(index, change)| ChangeEntryViewModel::new(index, change, timestamp_format))
                .collect();
            return Self::ChangesLoaded { entries };
        }
        Self::EmptyRepository
    }
}

/// One row of the change list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEntryViewModel {
    /// Identity of the row: change id plus position, unique even for duplicate ids
    pub key: String,
    pub description: String,
    pub timestamp: String,
    pub change_id: String,
    pub commit_id: String,
    pub author: String,
}

impl ChangeEntryViewModel {
    fn new(index: usize, change: &Change, timestamp_format: &str) -> Self {
        // An empty configured format means the default one
        let timestamp = if timestamp_format.is_empty() {
            format_timestamp(&change.timestamp)
        } else {
            format_timestamp_with(&change.timestamp, timestamp_format)
        };
        Self {
            key: format!("{}-{}", change.change_id, index),
            description: change.description.clone(),
            timestamp,
            change_id: truncate_identifier(&change.change_id, DEFAULT_ID_LENGTH).to_string(),
            commit_id: truncate_identifier(&change.commit_id, DEFAULT_ID_LENGTH).to_string(),
            author: change.author.clone(),
        }
    }
}

/// Header line: title, current repository and the select action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHeaderViewModel {
    pub title: &'static str,
    /// Current repository path, if one is selected
    pub repository_path: Option<String>,
    pub select_label: &'static str,
    pub select_hint: String,
    pub reload_hint: Option<String>,
}

impl SessionHeaderViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let session = &state.session;
        let has_repository = session.has_repository();

        Self {
            title: APP_TITLE,
            repository_path: has_repository.then(|| session.repository_path.clone()),
            select_label: if has_repository {
                "Change Repository"
            } else {
                "Select Repository"
            },
            select_hint: state
                .keymap
                .compact_hint_for_command(CommandId::SelectRepository)
                .unwrap_or_default(),
            reload_hint: has_repository
                .then(|| state.keymap.compact_hint_for_command(CommandId::Reload))
                .flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::DEFAULT_TIMESTAMP_FORMAT;

    fn change(id: &str, commit: &str) -> Change {
        Change::new(id, commit, "Fix parser", "Alice", "not-a-date")
    }

    fn mode(session: &Session) -> SessionViewMode {
        SessionViewMode::from_session(session, DEFAULT_TIMESTAMP_FORMAT)
    }

    #[test]
    fn test_initial_session_is_welcome() {
        assert_eq!(mode(&Session::default()), SessionViewMode::Welcome);
    }

    #[test]
    fn test_loading_wins_over_everything_else() {
        let session = Session {
            repository_path: "/repo".to_string(),
            changes: vec![change("a", "b")],
            is_loading: true,
            error_message: "boom".to_string(),
        };
        assert_eq!(mode(&session), SessionViewMode::Loading);

        let no_path = Session {
            is_loading: true,
            ..Session::default()
        };
        assert_eq!(mode(&no_path), SessionViewMode::Loading);
    }

    #[test]
    fn test_error_wins_over_changes() {
        let session = Session {
            repository_path: "/repo".to_string(),
            changes: vec![change("a", "b")],
            is_loading: false,
            error_message: "Not a valid JJ repository".to_string(),
        };
        assert_eq!(
            mode(&session),
            SessionViewMode::Error {
                message: "Not a valid JJ repository".to_string()
            }
        );
    }

    #[test]
    fn test_error_without_repository_is_not_welcome() {
        let session = Session {
            error_message: "Permission denied".to_string(),
            ..Session::default()
        };
        assert!(matches!(mode(&session), SessionViewMode::Error { .. }));
    }

    #[test]
    fn test_empty_repository() {
        let session = Session {
            repository_path: "/empty".to_string(),
            ..Session::default()
        };
        assert_eq!(mode(&session), SessionViewMode::EmptyRepository);
    }

    #[test]
    fn test_changes_keep_order_and_unique_keys() {
        let session = Session {
            repository_path: "/repo".to_string(),
            changes: vec![change("dup", "c1"), change("dup", "c2"), change("z", "c3")],
            ..Session::default()
        };
        let SessionViewMode::ChangesLoaded { entries } = mode(&session) else {
            panic!("expected a change list");
        };
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["dup-0", "dup-1", "z-2"]);
        let commits: Vec<_> = entries.iter().map(|e| e.commit_id.as_str()).collect();
        assert_eq!(commits, vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_entry_fields_are_formatted() {
        let session = Session {
            repository_path: "/repo".to_string(),
            changes: vec![Change::new(
                "qpvuntsmwlqt1234",
                "abcdef0123456789",
                "",
                "Bob",
                "garbage",
            )],
            ..Session::default()
        };
        let SessionViewMode::ChangesLoaded { entries } = mode(&session) else {
            panic!("expected a change list");
        };
        assert_eq!(entries[0].change_id, "qpvuntsmwlqt");
        assert_eq!(entries[0].commit_id, "abcdef012345");
        assert_eq!(entries[0].timestamp, "garbage");
        assert_eq!(entries[0].description, "");
        assert_eq!(entries[0].author, "Bob");
        assert_eq!(entries[0].key, "qpvuntsmwlqt1234-0");
    }

    #[test]
    fn test_empty_timestamp_format_uses_default() {
        let session = Session {
            repository_path: "/repo".to_string(),
            changes: vec![Change::new("a", "b", "", "", "2024-01-15T10:00:00Z")],
            ..Session::default()
        };
        let SessionViewMode::ChangesLoaded { entries } = SessionViewMode::from_session(&session, "")
        else {
            panic!("expected a change list");
        };
        assert_eq!(
            entries[0].timestamp,
            format_timestamp_with("2024-01-15T10:00:00Z", DEFAULT_TIMESTAMP_FORMAT)
        );
    }

    #[test]
    fn test_header_labels_follow_repository() {
        let mut state = AppState::default();
        let header = SessionHeaderViewModel::from_state(&state);
        assert_eq!(header.title, APP_TITLE);
        assert_eq!(header.select_label, "Select Repository");
        assert_eq!(header.select_hint, "o");
        assert_eq!(header.repository_path, None);
        assert_eq!(header.reload_hint, None);

        state.session.repository_path = "/repo".to_string();
        let header = SessionHeaderViewModel::from_state(&state);
        assert_eq!(header.select_label, "Change Repository");
        assert_eq!(header.repository_path.as_deref(), Some("/repo"));
        assert_eq!(header.reload_hint.as_deref(), Some("r"));
    }
}
