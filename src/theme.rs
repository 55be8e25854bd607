//! Applies a wallpaper and the theme derived from it across the desktop.

use crate::config::PickerConfig;
use crate::desktop::{WallpaperBackend, hyprland, set_wallpaper};
use crate::process::{CommandRunner, ToolCommand};
use log::{debug, info, warn};
use std::path::Path;

/// What a single [`ThemeDispatcher::apply`] managed to do.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeReport {
    pub palette_launched: bool,
    pub walcord_launched: bool,
    pub wallpaper_backend: Option<WallpaperBackend>,
    pub border_color: Option<String>,
    pub spicetify_launched: bool,
}

pub struct ThemeDispatcher<R> {
    config: PickerConfig,
    runner: R,
}

impl<R: CommandRunner> ThemeDispatcher<R> {
    pub fn new(config: PickerConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Runs every step for `image`. A failing step never stops the ones after it.
    pub fn apply(&self, image: &Path) -> ThemeReport {
        info!("Applying theme from {}", image.display());

        let palette = ToolCommand::new("wal").arg("-i").arg(image.to_string_lossy());
        let palette_launched = match self.runner.launch(&palette) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to start pywal: {e}");
                false
            }
        };

        let walcord_launched =
            self.config.walcord && self.launch_optional(&ToolCommand::new("walcord"));

        let wallpaper_backend = set_wallpaper(&self.runner, &self.config.wallpaper_backends, image);

        let border_color = hyprland::set_border_from_palette(
            &self.runner,
            &self.config.palette_path,
            &self.config.border_color_slot,
        );

        let spicetify_launched = self.config.spicetify
            && self.launch_optional(&ToolCommand::new("spicetify").arg("apply"));

        ThemeReport {
            palette_launched,
            walcord_launched,
            wallpaper_backend,
            border_color,
            spicetify_launched,
        }
    }

    fn launch_optional(&self, command: &ToolCommand) -> bool {
        match self.runner.launch(command) {
            Ok(()) => true,
            Err(e) => {
                debug!("{} not available, skipping: {}", command.program, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::tests::RecorderRunner;
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn palette_file(tag: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wallpicker-theme-{}-{}.json",
            tag,
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ));
        fs::write(&path, content).expect("write palette");
        path
    }

    fn config(palette_path: PathBuf) -> PickerConfig {
        PickerConfig {
            palette_path,
            ..PickerConfig::default()
        }
    }

    fn launched(runner: &RecorderRunner) -> Vec<String> {
        runner
            .launched
            .borrow()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn runs_every_step_in_order() {
        let path = palette_file(
            "runs_every_step_in_order",
            r##"{ "colors": { "color4": "#a1b2c3" } }"##,
        );
        let runner = RecorderRunner {
            succeeding: vec!["swww"],
            ..Default::default()
        };
        let dispatcher = ThemeDispatcher::new(config(path.clone()), runner);

        let report = dispatcher.apply(Path::new("/w/a.png"));
        assert_eq!(
            report,
            ThemeReport {
                palette_launched: true,
                walcord_launched: true,
                wallpaper_backend: Some(WallpaperBackend::Swww),
                border_color: Some("0xA1B2C3".to_string()),
                spicetify_launched: true,
            }
        );
        assert_eq!(
            launched(&dispatcher.runner),
            vec![
                "wal -i /w/a.png",
                "walcord",
                "hyprctl keyword col.active_border 0xA1B2C3",
                "spicetify apply",
            ]
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn failures_do_not_stop_later_steps() {
        let runner = RecorderRunner {
            missing: vec!["wal", "walcord", "swww", "hyprpaper", "swaybg", "feh"],
            ..Default::default()
        };
        let dispatcher = ThemeDispatcher::new(
            config(PathBuf::from("/nonexistent/wal/colors.json")),
            runner,
        );

        let report = dispatcher.apply(Path::new("/w/a.png"));
        assert!(!report.palette_launched);
        assert!(!report.walcord_launched);
        assert_eq!(report.wallpaper_backend, None);
        assert_eq!(report.border_color, None);
        assert!(report.spicetify_launched);
        assert_eq!(launched(&dispatcher.runner), vec!["spicetify apply"]);
    }

    #[test]
    fn missing_slot_skips_only_the_border() {
        let path = palette_file(
            "missing_slot_skips_only_the_border",
            r##"{ "colors": { "color1": "#a1b2c3" } }"##,
        );
        let runner = RecorderRunner {
            succeeding: vec!["feh"],
            ..Default::default()
        };
        let dispatcher = ThemeDispatcher::new(config(path.clone()), runner);

        let report = dispatcher.apply(Path::new("/w/a.png"));
        assert_eq!(report.border_color, None);
        assert_eq!(report.wallpaper_backend, Some(WallpaperBackend::Feh));
        assert!(
            !launched(&dispatcher.runner)
                .iter()
                .any(|c| c.starts_with("hyprctl"))
        );
        assert!(report.spicetify_launched);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn optional_tools_can_be_disabled() {
        let runner = RecorderRunner::default();
        let dispatcher = ThemeDispatcher::new(
            PickerConfig {
                walcord: false,
                spicetify: false,
                ..config(PathBuf::from("/nonexistent/colors.json"))
            },
            runner,
        );

        let report = dispatcher.apply(Path::new("/w/a.png"));
        assert!(report.palette_launched);
        assert!(!report.walcord_launched);
        assert!(!report.spicetify_launched);
        assert_eq!(launched(&dispatcher.runner), vec!["wal -i /w/a.png"]);
    }
}
