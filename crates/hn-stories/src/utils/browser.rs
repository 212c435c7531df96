//! Browser utilities

use std::process::Command;

/// Open a URL in the system's default browser
///
/// Fire-and-forget: the spawned process is not waited on, and failure to
/// launch is only logged.
pub fn open_url(url: &str) {
    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(url).spawn();

    #[cfg(target_os = "linux")]
    let result = Command::new("xdg-open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", url]).spawn();

    match result {
        Ok(_) => log::debug!("Opened {} in browser", url),
        Err(e) => log::error!("Failed to open URL in browser: {}", e),
    }
}
