use crate::{Error, Result};
use std::path::{Path, PathBuf};

pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".cache")))
        .ok_or_else(|| Error::DesktopEnv("Could not find cache directory".to_string()))
}

pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .or_else(|| {
            std::env::var("HOME").ok().map(|home| {
                PathBuf::from(home).join(".config")
            })
        })
        .map(|dir| dir.join(PathBuf::from("wallpicker")))
        .ok_or_else(|| Error::DesktopEnv(
            "Could not find config directory. Please set HOME or XDG_CONFIG_HOME environment variable.".to_string()
        ))
}

/// Replaces a leading `~` with the home directory. Other paths are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
