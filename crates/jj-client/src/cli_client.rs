//! `jj` command line backend
//!
//! Implements `JjBackend` by running the jj executable inside the repository
//! directory. Processes are killed if the awaiting task is dropped.

use crate::client::JjBackend;
use crate::error::JjError;
use crate::log_parser::{parse_log, LOG_TEMPLATE};
use crate::path::{canonical_repository_dir, check_store_layout, jj_dir};
use crate::types::Change;
use crate::{DEFAULT_CHANGE_LIMIT, DEFAULT_JJ_COMMAND};
use async_trait::async_trait;
use log::debug;
use std::path::Path;
use std::process::Output;
use tokio::process::Command;

const STATUS_COMMAND: &str = "JJ command";
const LOG_COMMAND: &str = "JJ log command";

/// Backend that shells out to `jj`
#[derive(Debug, Clone)]
pub struct JjCliClient {
    program: String,
    change_limit: usize,
}

impl JjCliClient {
    /// Create a client running `program` and fetching at most `change_limit` changes
    pub fn new(program: impl Into<String>, change_limit: usize) -> Self {
        Self {
            program: program.into(),
            change_limit,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn change_limit(&self) -> usize {
        self.change_limit
    }

    async fn run(
        &self,
        repo: &Path,
        args: &[&str],
        command: &'static str,
    ) -> Result<Output, JjError> {
        debug!("Running {} {:?} in {}", self.program, args, repo.display());

        Command::new(&self.program)
            .args(args)
            .arg("--no-pager")
            .current_dir(repo)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| JjError::from_spawn(command, e))
    }
}

impl Default for JjCliClient {
    fn default() -> Self {
        Self::new(DEFAULT_JJ_COMMAND, DEFAULT_CHANGE_LIMIT)
    }
}

#[async_trait]
impl JjBackend for JjCliClient {
    async fn validate_repository(&self, path: &str) -> Result<bool, JjError> {
        let repo = canonical_repository_dir(path)?;

        // Cheap on-disk checks first, `jj status` last
        let jj = jj_dir(&repo)?;
        check_store_layout(&jj)?;

        let output = self.run(&repo, &["status"], STATUS_COMMAND).await?;
        match output.status.code() {
            Some(0) => Ok(true),
            Some(1) => Err(JjError::NotARepository),
            Some(code) => Err(JjError::CommandFailed {
                command: STATUS_COMMAND,
                code,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }),
            None => Err(JjError::Terminated {
                command: STATUS_COMMAND,
            }),
        }
    }

    async fn list_changes(&self, path: &str) -> Result<Vec<Change>, JjError> {
        let repo = canonical_repository_dir(path)?;
        jj_dir(&repo)?;

        let limit = self.change_limit.to_string();
        let output = self.run(&repo, &log_args(&limit), LOG_COMMAND).await?;

        if !output.status.success() {
            return match output.status.code() {
                Some(code) => Err(JjError::CommandFailed {
                    command: LOG_COMMAND,
                    code,
                    stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
                }),
                None => Err(JjError::Terminated {
                    command: LOG_COMMAND,
                }),
            };
        }

        let changes = parse_log(&String::from_utf8_lossy(&output.stdout))?;
        debug!("Parsed {} changes from {}", changes.len(), repo.display());
        Ok(changes)
    }
}

/// Arguments for `jj log`; the graph is disabled so every line is template output
fn log_args(limit: &str) -> [&str; 6] {
    ["log", "--no-graph", "--template", LOG_TEMPLATE, "--limit", limit]
}
