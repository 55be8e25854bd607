use crate::process::{CommandRunner, ToolCommand};
use log::{debug, info, warn};
use serde::Deserialize;
use std::path::Path;

pub mod hyprland;

/// External programs able to set the desktop background, in default
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallpaperBackend {
    Swww,
    Hyprpaper,
    Swaybg,
    Feh,
}

impl WallpaperBackend {
    pub const ALL: [WallpaperBackend; 4] = [
        WallpaperBackend::Swww,
        WallpaperBackend::Hyprpaper,
        WallpaperBackend::Swaybg,
        WallpaperBackend::Feh,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WallpaperBackend::Swww => "swww",
            WallpaperBackend::Hyprpaper => "hyprpaper",
            WallpaperBackend::Swaybg => "swaybg",
            WallpaperBackend::Feh => "feh",
        }
    }

    pub fn command(&self, path: &Path) -> ToolCommand {
        let path_str = path.to_string_lossy();

        match self {
            WallpaperBackend::Swww => ToolCommand::new("swww")
                .arg("img")
                .arg(path_str)
                .args(["--output", "all"]),
            WallpaperBackend::Hyprpaper => ToolCommand::new("hyprpaper").arg("--set").arg(path_str),
            WallpaperBackend::Swaybg => ToolCommand::new("swaybg").arg("-i").arg(path_str),
            WallpaperBackend::Feh => ToolCommand::new("feh").arg("--bg-scale").arg(path_str),
        }
    }
}

/// Tries `backends` in order and stops at the first one that exits with 0.
///
/// Returns the backend that succeeded, or `None` when every one failed or
/// could not be started.
pub fn set_wallpaper(
    runner: &impl CommandRunner,
    backends: &[WallpaperBackend],
    path: &Path,
) -> Option<WallpaperBackend> {
    for backend in backends {
        match runner.run(&backend.command(path)) {
            Ok(true) => {
                info!("Wallpaper set with {}", backend.name());
                return Some(*backend);
            }
            Ok(false) => debug!("{} exited with an error", backend.name()),
            Err(e) => debug!("{} could not be started: {}", backend.name(), e),
        }
    }

    warn!(
        "Failed to set wallpaper {}. No backend succeeded",
        path.display()
    );
    None
}
