//! Session actions
//!
//! Typed transitions of the repository session. The user-facing commands
//! (`SelectRepository`, `Reload`) and the picker outcomes are handled by
//! middleware, which talks to the backend and dispatches the remaining
//! variants as results arrive.
//!
//! Every backend round-trip is tagged with a `generation`. The repository
//! middleware issues a new generation per request and uses it to recognise
//! results of superseded requests.

use jj_client::Change;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    // === User commands ===
    /// Open the directory picker to choose a repository
    SelectRepository,
    /// Load the changes of the current repository again
    Reload,

    // === Picker outcomes ===
    /// The picker returned a directory
    DirectorySelected { path: String },
    /// The picker was dismissed without a selection
    PickerCancelled,
    /// The picker could not produce a directory
    PickerFailed { message: String },

    // === Validation ===
    /// Validation of `path` has been issued
    ValidationStarted { path: String, generation: u64 },
    /// Backend confirmed `path` is a repository
    ValidationSucceeded { path: String, generation: u64 },
    /// Backend answered that `path` is not a repository, without a reason
    ValidationRejected { path: String, generation: u64 },
    /// Backend failed to validate `path`
    ValidationFailed {
        path: String,
        generation: u64,
        message: String,
    },

    // === Change retrieval ===
    /// Request to load the changes of `path`
    LoadChanges { path: String },
    /// Retrieval of `path` has been issued
    LoadStarted { path: String, generation: u64 },
    /// Changes of `path` arrived
    Loaded {
        path: String,
        generation: u64,
        changes: Vec<Change>,
    },
    /// Retrieval of `path` failed
    LoadFailed {
        path: String,
        generation: u64,
        message: String,
    },
}

impl SessionAction {
    /// Generation of the backend request this action reports on, if any
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::ValidationStarted { generation, .. }
            | Self::ValidationSucceeded { generation, .. }
            | Self::ValidationRejected { generation, .. }
            | Self::ValidationFailed { generation, .. }
            | Self::LoadStarted { generation, .. }
            | Self::Loaded { generation, .. }
            | Self::LoadFailed { generation, .. } => Some(*generation),
            _ => None,
        }
    }

    /// Whether this action reports the completion of a backend request
    pub fn is_completion(&self) -> bool {
        matches!(
            self,
            Self::ValidationSucceeded { .. }
                | Self::ValidationRejected { .. }
                | Self::ValidationFailed { .. }
                | Self::Loaded { .. }
                | Self::LoadFailed { .. }
        )
    }
}
