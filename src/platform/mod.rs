// HomeGrid platform abstraction
// Resolves the per-OS directory that holds the persisted collection.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for HomeGrid.
///
/// - **Linux**: `~/.config/homegrid` (or `$XDG_CONFIG_HOME/homegrid`)
/// - **macOS**: `~/Library/Application Support/HomeGrid`
/// - **Windows**: `%APPDATA%/HomeGrid`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}
