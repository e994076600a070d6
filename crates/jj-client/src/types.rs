//! Domain types returned by the backend

/// One historical change in a jj repository
///
/// `change_id` stays stable when the change is rewritten, `commit_id`
/// identifies the concrete snapshot. Both are opaque: no length or format is
/// guaranteed beyond being non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub change_id: String,
    pub commit_id: String,
    /// User-authored summary, may be empty
    pub description: String,
    pub author: String,
    /// Instant as printed by jj; not guaranteed to be parseable
    pub timestamp: String,
}

impl Change {
    pub fn new(
        change_id: impl Into<String>,
        commit_id: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            change_id: change_id.into(),
            commit_id: commit_id.into(),
            description: description.into(),
            author: author.into(),
            timestamp: timestamp.into(),
        }
    }
}
