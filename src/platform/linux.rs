// HomeGrid platform paths for Linux
// Config: ~/.config/homegrid

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for HomeGrid on Linux.
/// Uses `$XDG_CONFIG_HOME/homegrid` if set, otherwise `~/.config/homegrid`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("homegrid")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("homegrid")
    }
}
