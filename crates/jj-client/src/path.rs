//! Repository path checks
//!
//! Every path handed to the backend goes through `canonical_repository_dir`
//! before a jj process is spawned in it.

use crate::error::JjError;
use std::path::{Path, PathBuf};

/// Sanitise `path` and resolve it to a canonical, existing directory
pub fn canonical_repository_dir(path: &str) -> Result<PathBuf, JjError> {
    if path.is_empty() {
        return Err(JjError::EmptyPath);
    }

    if path.contains("..") || path.contains('~') {
        return Err(JjError::UnsafePath);
    }

    if path
        .chars()
        .any(|c| c == '\0' || (c.is_control() && c != '\n' && c != '\r' && c != '\t'))
    {
        return Err(JjError::InvalidCharacters);
    }

    let canonical = Path::new(path)
        .canonicalize()
        .map_err(|_| JjError::Inaccessible)?;

    if !canonical.exists() {
        return Err(JjError::NotFound);
    }

    if !canonical.is_dir() {
        return Err(JjError::NotADirectory);
    }

    Ok(canonical)
}

/// The `.jj` directory of a repository, if present
pub fn jj_dir(repo: &Path) -> Result<PathBuf, JjError> {
    let dir = repo.join(".jj");
    if dir.is_dir() {
        Ok(dir)
    } else {
        Err(JjError::MissingJjDirectory)
    }
}

/// Check the on-disk layout jj creates: `.jj/repo/store`
pub fn check_store_layout(jj_dir: &Path) -> Result<(), JjError> {
    if jj_dir.join("repo").join("store").exists() {
        Ok(())
    } else {
        Err(JjError::InvalidStructure)
    }
}
