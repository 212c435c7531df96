use std::path::PathBuf;

const CONFIG_FILE: &str = ".hn-stories.toml";

/// Load config file content from CWD first, then the config directory
///
/// Searches for the config in:
/// 1. `.hn-stories.toml` in the current working directory
/// 2. `config.toml` in the platform config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    // Try current directory first
    if let Ok(content) = std::fs::read_to_string(CONFIG_FILE) {
        log::debug!("Loaded config from {}", CONFIG_FILE);
        return Some(content);
    }

    // Try the global config location
    if let Some(global_config) = get_global_config_path() {
        if let Ok(content) = std::fs::read_to_string(&global_config) {
            log::debug!("Loaded config from {}", global_config.display());
            return Some(content);
        }
    }

    None
}

/// Get the path to the config file in the config directory
fn get_global_config_path() -> Option<PathBuf> {
    crate::paths::config_dir().ok().map(|d| d.join("config.toml"))
}
