// Zync platform abstraction
// Provides platform-specific config and data paths, selected with
// `cfg(target_os)` at compile time.

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    let home = env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
}

/// Returns the platform-specific configuration directory for Zync.
///
/// - **Linux**: `$XDG_CONFIG_HOME/zync` or `~/.config/zync`
/// - **macOS**: `~/Library/Application Support/Zync`
/// - **Windows**: `%APPDATA%/Zync`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        match env::var("XDG_CONFIG_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join("zync"),
            Err(_) => home_dir().join(".config").join("zync"),
        }
    }
    #[cfg(target_os = "macos")]
    {
        home_dir()
            .join("Library")
            .join("Application Support")
            .join("Zync")
    }
    #[cfg(target_os = "windows")]
    {
        match env::var("APPDATA") {
            Ok(appdata) => PathBuf::from(appdata).join("Zync"),
            Err(_) => home_dir().join("AppData").join("Roaming").join("Zync"),
        }
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        home_dir().join(".zync")
    }
}

/// Returns the platform-specific data directory for Zync.
///
/// - **Linux**: `$XDG_DATA_HOME/zync` or `~/.local/share/zync`
/// - **macOS**: `~/Library/Application Support/Zync`
/// - **Windows**: `%APPDATA%/Zync`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        match env::var("XDG_DATA_HOME") {
            Ok(xdg) => PathBuf::from(xdg).join("zync"),
            Err(_) => home_dir().join(".local").join("share").join("zync"),
        }
    }
    #[cfg(not(target_os = "linux"))]
    {
        get_config_dir()
    }
}
