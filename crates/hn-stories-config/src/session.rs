//! Session state persistence
//!
//! Handles loading and saving the last search term with local/global
//! precedence.
//!
//! # Precedence
//!
//! 1. `$CWD/.hn-stories.session.toml` - Local session (highest priority)
//! 2. `~/.config/hn-stories/session.toml` - Global session (fallback)
//!
//! On save: Use local file if it exists, otherwise use global.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

const SESSION_VERSION: u32 = 1;

/// Session metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// Session data - the actual persisted state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionData {
    /// Last search term the user typed
    pub last_search: Option<String>,
}

/// Complete session with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub meta: SessionMeta,
    #[serde(default)]
    pub session: SessionData,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            meta: SessionMeta {
                last_modified: Utc::now(),
                version: SESSION_VERSION,
            },
            session: SessionData::default(),
        }
    }
}

impl Session {
    /// Load session with precedence: local > global > default
    pub fn load() -> Self {
        // Try local first
        if paths::has_local_session() {
            if let Ok(path) = paths::local_session_path() {
                if let Ok(session) = Self::load_from_path(&path) {
                    log::info!("Loaded local session from {:?}", path);
                    return session;
                }
            }
        }

        // Try global
        if let Ok(path) = paths::global_session_path() {
            if path.exists() {
                if let Ok(session) = Self::load_from_path(&path) {
                    log::info!("Loaded global session from {:?}", path);
                    return session;
                }
            }
        }

        log::info!("No existing session found, using defaults");
        Self::default()
    }

    /// Load session from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", path))
    }

    /// Save session (to local if exists, otherwise global)
    pub fn save(&mut self) -> Result<()> {
        let path = if paths::has_local_session() {
            paths::local_session_path()?
        } else {
            paths::global_session_path()?
        };

        self.save_to_path(&path)
    }

    /// Save session to specific path
    pub fn save_to_path(&mut self, path: &Path) -> Result<()> {
        // Update timestamp
        self.meta.last_modified = Utc::now();

        let content = toml::to_string_pretty(self).context("Failed to serialize session")?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write session file: {:?}", path))?;

        log::debug!("Saved session to {:?}", path);
        Ok(())
    }

    /// Update the persisted search term
    pub fn set_last_search(&mut self, term: &str) {
        self.session.last_search = Some(term.to_string());
    }

    /// Get the persisted search term
    pub fn last_search(&self) -> Option<&str> {
        self.session.last_search.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session() {
        let session = Session::default();
        assert_eq!(session.meta.version, SESSION_VERSION);
        assert!(session.last_search().is_none());
    }

    #[test]
    fn test_set_last_search() {
        let mut session = Session::default();
        session.set_last_search("rust");
        assert_eq!(session.last_search(), Some("rust"));
    }

    #[test]
    fn test_session_serialization() {
        let mut session = Session::default();
        session.set_last_search("erlang");

        let toml_str = toml::to_string_pretty(&session).unwrap();
        assert!(toml_str.contains("[meta]"));
        assert!(toml_str.contains("[session]"));
        assert!(toml_str.contains("erlang"));

        // Round-trip
        let parsed: Session = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.last_search(), Some("erlang"));
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let mut session = Session::default();
        session.set_last_search("haskell");
        session.save_to_path(&path).unwrap();

        let loaded = Session::load_from_path(&path).unwrap();
        assert_eq!(loaded.last_search(), Some("haskell"));
        assert_eq!(loaded.meta.version, SESSION_VERSION);
    }
}
