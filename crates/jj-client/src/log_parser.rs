//! Parser for the `jj log` output produced with `LOG_TEMPLATE`
//!
//! Each change is printed as five newline separated fields followed by a
//! `---` terminator line:
//!
//! ```text
//! change_id
//! commit_id
//! description
//! author
//! timestamp
//! ---
//! ```
//!
//! The description is reduced to its first line by the template. Should more
//! lines arrive anyway, the ids are taken from the top of the entry and the
//! author and timestamp from the bottom.

use crate::error::JjError;
use crate::types::Change;

/// Template passed to `jj log --template`
///
/// `coalesce` fills fields jj would otherwise print empty, so every entry
/// keeps its five lines.
pub const LOG_TEMPLATE: &str = concat!(
    r#"change_id ++ "\n" ++ commit_id ++ "\n" ++ "#,
    r#"coalesce(description.first_line(), "(no description)") ++ "\n" ++ "#,
    r#"coalesce(author.name(), "(unknown)") ++ "\n" ++ "#,
    r#"committer.timestamp() ++ "\n---\n""#,
);

const ENTRY_TERMINATOR: &str = "---\n";
const EXPECTED_FIELDS: usize = 5;

/// Parse log output into changes, preserving jj's order
///
/// Malformed entries are skipped with a warning. Output that is not empty but
/// yields no change at all is reported as `JjError::NoValidChanges`.
pub fn parse_log(output: &str) -> Result<Vec<Change>, JjError> {
    let mut changes = Vec::new();

    for entry in output.split(ENTRY_TERMINATOR) {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let lines: Vec<&str> = entry.lines().collect();
        if lines.len() < EXPECTED_FIELDS {
            log::warn!(
                "Skipping malformed log entry with {} fields (expected {}): {:?}",
                lines.len(),
                EXPECTED_FIELDS,
                lines
            );
            continue;
        }

        let last = lines.len() - 1;
        let change = Change::new(
            lines[0].trim(),
            lines[1].trim(),
            lines[2].trim(),
            lines[last - 1].trim(),
            lines[last].trim(),
        );

        if change.change_id.is_empty() || change.commit_id.is_empty() {
            log::warn!("Skipping log entry with missing change or commit id");
            continue;
        }

        changes.push(change);
    }

    if changes.is_empty() && !output.trim().is_empty() {
        return Err(JjError::NoValidChanges);
    }

    Ok(changes)
}
