use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use wallpicker::{PickerConfig, gui};

#[derive(Parser)]
#[command(name = "wallpicker")]
#[command(
    version,
    about = "Wallpaper chooser. Clicking a thumbnail runs pywal, sets the wallpaper and themes Hyprland, Discord and Spotify."
)]
struct Args {
    #[arg(help = "Folder containing wallpapers (defaults to image_dir from the config file)")]
    folder: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match PickerConfig::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring config file ({}), using defaults", e);
            PickerConfig::default()
        }
    }
    .with_image_dir(args.folder);
    info!("Showing wallpapers from {}", config.image_dir.display());

    gui::run_wallpaper_picker(config).map_err(|e| anyhow::anyhow!("GUI error: {e}"))?;
    Ok(())
}
