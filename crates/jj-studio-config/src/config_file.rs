use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = ".jj-studio.toml";

/// Load config file content
///
/// Searches, in order:
/// 1. `.jj-studio.toml` in the current working directory
/// 2. `~/.jj-studio.toml`
/// 3. `config.toml` in the platform config directory
///
/// Returns the content of the first file found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths().iter().find_map(|path| read_config(path))
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_FILE));
    }
    if let Ok(path) = crate::app_config_path() {
        paths.push(path);
    }
    paths
}

fn read_config(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            log::debug!("Loaded config from {}", path.display());
            Some(content)
        }
        Err(_) => None,
    }
}
