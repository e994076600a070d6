//! Session Reducer
//!
//! Pure transitions of the repository session. Failure handling is
//! deliberately asymmetric:
//! - a failed picker or validation keeps the previously displayed repository
//! - a failed retrieval clears the displayed changes
//!
//! Every route out of a backend call clears `is_loading`.

use crate::actions::SessionAction;
use crate::state::Session;

pub fn reduce_session(mut state: Session, action: &SessionAction) -> Session {
    match action {
        SessionAction::ValidationStarted { path, .. } => {
            log::debug!("Validating repository {}", path);
            state.is_loading = true;
            state.error_message.clear();
        }

        SessionAction::PickerFailed { message } => {
            state.is_loading = false;
            state.error_message = message.clone();
        }

        SessionAction::ValidationFailed { path, message, .. } => {
            log::warn!("Validation of {} failed: {}", path, message);
            state.is_loading = false;
            state.error_message = message.clone();
        }

        SessionAction::ValidationRejected { path, .. } => {
            // Not a repository and no reason given: leave everything as it was
            log::info!("{} is not a repository, keeping current session", path);
            state.is_loading = false;
        }

        SessionAction::ValidationSucceeded { path, .. } => {
            // Loading continues until the change retrieval finishes
            state.repository_path = path.clone();
        }

        SessionAction::LoadStarted { .. } => {
            state.is_loading = true;
        }

        SessionAction::Loaded { changes, .. } => {
            state.changes = changes.clone();
            state.error_message.clear();
            state.is_loading = false;
        }

        SessionAction::LoadFailed { path, message, .. } => {
            log::warn!("Loading changes of {} failed: {}", path, message);
            state.changes.clear();
            state.error_message = message.clone();
            state.is_loading = false;
        }

        // Commands and picker cancellation do not touch the session
        SessionAction::SelectRepository
        | SessionAction::Reload
        | SessionAction::DirectorySelected { .. }
        | SessionAction::PickerCancelled
        | SessionAction::LoadChanges { .. } => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use jj_client::Change;

    fn change(id: &str) -> Change {
        Change::new(id, format!("{id}-commit"), "desc", "Alice", "2024-01-15T10:00:00Z")
    }

    fn loaded_session() -> Session {
        Session {
            repository_path: "/old".to_string(),
            changes: vec![change("a"), change("b")],
            is_loading: false,
            error_message: String::new(),
        }
    }

    fn apply(state: Session, actions: &[SessionAction]) -> Session {
        actions.iter().fold(state, reduce_session)
    }

    #[test]
    fn test_picker_cancel_leaves_session_untouched() {
        let before = loaded_session();
        let after = reduce_session(before.clone(), &SessionAction::PickerCancelled);
        assert_eq!(after, before);

        let welcome = reduce_session(Session::default(), &SessionAction::PickerCancelled);
        assert_eq!(welcome, Session::default());
    }

    #[test]
    fn test_validation_start_enters_loading_and_clears_error() {
        let state = Session {
            error_message: "old failure".to_string(),
            ..loaded_session()
        };
        let state = reduce_session(
            state,
            &SessionAction::ValidationStarted {
                path: "/repo".to_string(),
                generation: 1,
            },
        );
        assert!(state.is_loading);
        assert!(state.error_message.is_empty());
        assert_eq!(state.repository_path, "/old");
    }

    #[test]
    fn test_select_valid_repository_loads_changes_in_order() {
        let state = apply(
            Session::default(),
            &[
                SessionAction::ValidationStarted {
                    path: "/repo".to_string(),
                    generation: 1,
                },
                SessionAction::ValidationSucceeded {
                    path: "/repo".to_string(),
                    generation: 1,
                },
                SessionAction::LoadStarted {
                    path: "/repo".to_string(),
                    generation: 2,
                },
            ],
        );
        assert_eq!(state.repository_path, "/repo");
        assert!(state.is_loading);

        let state = reduce_session(
            state,
            &SessionAction::Loaded {
                path: "/repo".to_string(),
                generation: 2,
                changes: vec![change("x"), change("y")],
            },
        );
        assert!(!state.is_loading);
        assert!(state.error_message.is_empty());
        let ids: Vec<_> = state.changes.iter().map(|c| c.change_id.as_str()).collect();
        assert_eq!(ids, vec!["x", "y"]);
    }

    #[test]
    fn test_rejected_validation_restores_previous_session() {
        let before = loaded_session();
        let after = apply(
            before.clone(),
            &[
                SessionAction::ValidationStarted {
                    path: "/not-a-repo".to_string(),
                    generation: 3,
                },
                SessionAction::ValidationRejected {
                    path: "/not-a-repo".to_string(),
                    generation: 3,
                },
            ],
        );
        assert_eq!(after, before);
    }

    #[test]
    fn test_validation_failure_keeps_repository_and_changes() {
        let before = loaded_session();
        let after = apply(
            before.clone(),
            &[
                SessionAction::ValidationStarted {
                    path: "/broken".to_string(),
                    generation: 4,
                },
                SessionAction::ValidationFailed {
                    path: "/broken".to_string(),
                    generation: 4,
                    message: "Not a valid JJ repository".to_string(),
                },
            ],
        );
        assert_eq!(after.repository_path, before.repository_path);
        assert_eq!(after.changes, before.changes);
        assert!(!after.is_loading);
        assert_eq!(after.error_message, "Not a valid JJ repository");
    }

    #[test]
    fn test_retrieval_failure_clears_changes() {
        let after = apply(
            loaded_session(),
            &[
                SessionAction::LoadStarted {
                    path: "/old".to_string(),
                    generation: 5,
                },
                SessionAction::LoadFailed {
                    path: "/old".to_string(),
                    generation: 5,
                    message: "disk error".to_string(),
                },
            ],
        );
        assert!(after.changes.is_empty());
        assert_eq!(after.error_message, "disk error");
        assert_eq!(after.repository_path, "/old");
        assert!(!after.is_loading);
    }

    #[test]
    fn test_successful_load_clears_previous_error() {
        let state = Session {
            error_message: "disk error".to_string(),
            ..loaded_session()
        };
        let state = reduce_session(
            state,
            &SessionAction::Loaded {
                path: "/old".to_string(),
                generation: 6,
                changes: vec![],
            },
        );
        assert!(state.error_message.is_empty());
        assert!(state.changes.is_empty());
    }

    #[test]
    fn test_picker_failure_surfaces_error_and_keeps_changes() {
        let before = loaded_session();
        let after = reduce_session(
            before.clone(),
            &SessionAction::PickerFailed {
                message: "Permission denied".to_string(),
            },
        );
        assert_eq!(after.error_message, "Permission denied");
        assert_eq!(after.changes, before.changes);
        assert!(!after.is_loading);
    }

    #[test]
    fn test_every_completion_clears_loading() {
        let completions = [
            SessionAction::ValidationRejected {
                path: "/p".to_string(),
                generation: 1,
            },
            SessionAction::ValidationFailed {
                path: "/p".to_string(),
                generation: 1,
                message: "x".to_string(),
            },
            SessionAction::Loaded {
                path: "/p".to_string(),
                generation: 1,
                changes: vec![change("a")],
            },
            SessionAction::LoadFailed {
                path: "/p".to_string(),
                generation: 1,
                message: "x".to_string(),
            },
        ];
        for completion in completions {
            let loading = Session {
                is_loading: true,
                ..Session::default()
            };
            let state = reduce_session(loading, &completion);
            assert!(!state.is_loading, "{:?} left loading set", completion);
        }
    }
}
