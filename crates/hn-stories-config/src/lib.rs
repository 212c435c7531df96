//! Configuration and file management for hn-stories
//!
//! This crate provides:
//! - File path utilities for config and session files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Session persistence (last search term)

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod session;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir};
pub use session::Session;
