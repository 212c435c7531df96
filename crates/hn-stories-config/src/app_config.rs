//! Application configuration
//!
//! Configuration loaded from .hn-stories.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .hn-stories.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Search endpoint to query (pointable at a test server)
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,

    /// Number of stories to request per search
    #[serde(default = "default_hits_per_page")]
    pub hits_per_page: u32,
}

fn default_search_endpoint() -> String {
    "https://hn.algolia.com/api/v1/search".to_string()
}

fn default_hits_per_page() -> u32 {
    20
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_endpoint: default_search_endpoint(),
            hits_per_page: default_hits_per_page(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }
}
