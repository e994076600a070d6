//! Jujutsu repository backend
//!
//! This crate provides the two operations the front-end needs from a jj
//! repository, behind the `JjBackend` trait:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                JjBackend trait                   │
//! │  - validate_repository()                         │
//! │  - list_changes()                                │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!               ┌─────────────────┐
//!               │   JjCliClient   │
//!               │ (spawns `jj`)   │
//!               └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use jj_client::{JjBackend, JjCliClient};
//!
//! # async fn example() -> Result<(), jj_client::JjError> {
//! let client = JjCliClient::default();
//! if client.validate_repository("/path/to/repo").await? {
//!     let changes = client.list_changes("/path/to/repo").await?;
//!     println!("{} changes", changes.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli_client;
pub mod client;
pub mod error;
pub mod log_parser;
pub mod path;
pub mod types;

/// Default executable used to talk to jj
pub const DEFAULT_JJ_COMMAND: &str = "jj";

/// Default number of changes fetched by `list_changes`
pub const DEFAULT_CHANGE_LIMIT: usize = 100;

pub use cli_client::JjCliClient;
pub use client::JjBackend;
pub use error::JjError;
pub use types::Change;
