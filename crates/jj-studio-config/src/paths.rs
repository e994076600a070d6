//! Configuration and cache directory paths
//!
//! Uses platform directories via the `dirs` crate:
//! - Linux: `~/.config/jj-studio/`, `~/.cache/jj-studio/`
//! - macOS: `~/Library/Application Support/jj-studio/`, `~/Library/Caches/jj-studio/`
//! - Windows: `%APPDATA%\jj-studio\`, `%LOCALAPPDATA%\jj-studio\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "jj-studio";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory (log files live here in release builds)
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create {}", dir.display()))?;
    Ok(dir)
}

/// Get path to the app config file inside the config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_path_name() {
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("config.toml"));
            assert!(path.parent().unwrap().ends_with(APP_NAME));
        }
    }
}
