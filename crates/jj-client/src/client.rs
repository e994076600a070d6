//! Backend trait
//!
//! The front-end only ever talks to a repository through `JjBackend`, which
//! keeps the state machine testable against an in-memory implementation.

use crate::error::JjError;
use crate::types::Change;
use async_trait::async_trait;

/// Access to a jj repository on disk
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared with the
/// async tasks that run each request.
#[async_trait]
pub trait JjBackend: Send + Sync {
    /// Check whether `path` is a jj repository
    ///
    /// `Ok(false)` means "not a repository" without a reason to show;
    /// `Err` carries a message for the user.
    async fn validate_repository(&self, path: &str) -> Result<bool, JjError>;

    /// Fetch the change history of the repository at `path`, newest first
    async fn list_changes(&self, path: &str) -> Result<Vec<Change>, JjError>;
}
