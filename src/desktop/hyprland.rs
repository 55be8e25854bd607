use crate::palette::{Palette, hyprland_color};
use crate::process::{CommandRunner, ToolCommand};
use log::{info, warn};
use std::path::Path;

pub fn border_color_command(color: &str) -> ToolCommand {
    ToolCommand::new("hyprctl").args(["keyword", "col.active_border", color])
}

/// Points Hyprland's active border at one palette slot.
///
/// Reads the palette at `palette_path`; a missing file, bad JSON, an absent
/// slot or a non-hex value skips the update. The `hyprctl` call itself is
/// not awaited. Returns the color token that was sent.
pub fn set_border_from_palette(
    runner: &impl CommandRunner,
    palette_path: &Path,
    slot: &str,
) -> Option<String> {
    let palette = match Palette::load(palette_path) {
        Ok(palette) => palette,
        Err(e) => {
            warn!(
                "Skipping border color, could not read {}: {}",
                palette_path.display(),
                e
            );
            return None;
        }
    };

    let Some(hex) = palette.color(slot) else {
        warn!("Skipping border color, palette has no {slot}");
        return None;
    };

    let color = match hyprland_color(hex) {
        Ok(color) => color,
        Err(e) => {
            warn!("Skipping border color: {e}");
            return None;
        }
    };

    if let Err(e) = runner.launch(&border_color_command(&color)) {
        warn!("Failed to set Hyprland border color: {e}");
        return None;
    }

    info!("Hyprland border set to {color}");
    Some(color)
}
