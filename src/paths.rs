//! Filesystem locations for Ladle's configuration, logs, and favorites.
//!
//! Everything lives under `~/.config/ladle`, falling back to
//! `$XDG_CONFIG_HOME/ladle` when `HOME` is unavailable. Directories are
//! created on first access.

use std::env;
use std::path::{Path, PathBuf};

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/ladle`, ensuring it exists.
///
/// Inputs: none
///
/// Output: `Some(PathBuf)` when HOME is set and the directory can be created;
/// `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("ladle");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// Config directory for Ladle (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    // Prefer HOME ~/.config/ladle first
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    // Fallback: use XDG_CONFIG_HOME (or default to ~/.config) and ensure
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join("ladle");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `~/.config/ladle/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of the persisted favorites list (JSON).
#[must_use]
pub fn favorites_path() -> PathBuf {
    config_dir().join("favorites.json")
}

/// Path of the optional settings file.
#[must_use]
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}
