//! Backend error type
//!
//! The `Display` text of each variant is what the user sees in the error view,
//! so keep the wording short and actionable.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JjError {
    #[error("Path cannot be empty")]
    EmptyPath,

    #[error("Path contains potentially unsafe patterns")]
    UnsafePath,

    #[error("Path contains invalid characters")]
    InvalidCharacters,

    #[error("Invalid or inaccessible path")]
    Inaccessible,

    #[error("Path does not exist")]
    NotFound,

    #[error("Path is not a directory")]
    NotADirectory,

    #[error("Not a JJ repository (no .jj directory found)")]
    MissingJjDirectory,

    #[error("Invalid JJ repository structure")]
    InvalidStructure,

    #[error("Not a valid JJ repository")]
    NotARepository,

    #[error("JJ command not found. Please ensure Jujutsu is installed and in your PATH")]
    CommandNotFound,

    #[error("Permission denied when accessing the repository")]
    PermissionDenied,

    #[error("JJ command timed out")]
    TimedOut,

    #[error("{command} failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: &'static str,
        code: i32,
        stderr: String,
    },

    #[error("{command} was terminated")]
    Terminated { command: &'static str },

    #[error("Failed to execute {command}: {source}")]
    Spawn {
        command: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("No valid changes found in log output")]
    NoValidChanges,
}

impl JjError {
    /// Map an error from spawning the jj process
    pub fn from_spawn(command: &'static str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::CommandNotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            std::io::ErrorKind::TimedOut => Self::TimedOut,
            _ => Self::Spawn {
                command,
                source: err,
            },
        }
    }
}
