//! Configuration and file locations for jj-studio
//!
//! This crate provides:
//! - Directory paths for config, cache and log files
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig)
//!
//! Nothing here is ever written back: the selected repository is not
//! remembered between runs.

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{app_config_path, cache_dir, config_dir};
