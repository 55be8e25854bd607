use crate::desktop::WallpaperBackend;
use crate::utils::{expand_home, get_cache_dir, get_config_dir};
use crate::{Error, Result};
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

/// Startup configuration for the picker.
///
/// Every field has a default, so a config file only needs the keys it wants
/// to change. The file is read, never written.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    pub image_dir: PathBuf,
    pub supported_extensions: Vec<String>,
    pub border_color_slot: String,
    pub palette_path: PathBuf,
    pub wallpaper_backends: Vec<WallpaperBackend>,
    pub margin: u32,
    pub spacing: u32,
    /// Used when the monitor size cannot be queried.
    pub window_side: u32,
    pub walcord: bool,
    pub spicetify: bool,
    pub close_on_select: bool,
    pub theme: String,
}

fn default_image_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("Wallpapers"))
        .unwrap_or_else(|| PathBuf::from("~/Wallpapers"))
}

fn default_palette_path() -> PathBuf {
    get_cache_dir()
        .unwrap_or_else(|_| PathBuf::from("~/.cache"))
        .join("wal")
        .join("colors.json")
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            image_dir: default_image_dir(),
            supported_extensions: ["jpg", "jpeg", "png", "webp", "bmp", "gif"]
                .into_iter()
                .map(String::from)
                .collect(),
            border_color_slot: "color4".to_string(),
            palette_path: default_palette_path(),
            wallpaper_backends: WallpaperBackend::ALL.to_vec(),
            margin: 4,
            spacing: 4,
            window_side: 800,
            walcord: true,
            spicetify: true,
            close_on_select: false,
            theme: "Dark".to_string(),
        }
    }
}

impl PickerConfig {
    /// Reads `config.json` from the config directory, or falls back to defaults
    /// when there is no such file.
    pub fn load_or_default() -> Result<Self> {
        let config_path = get_config_dir()?.join(PathBuf::from("config.json"));

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = read_to_string(path)?;
        let config: Self =
            serde_json::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        Ok(config.normalized())
    }

    /// Lowercases extensions, strips leading dots, expands `~` in paths and
    /// caps `margin`/`spacing` to what the window can pad with.
    pub fn normalized(mut self) -> Self {
        self.margin = self.margin.min(u16::MAX as u32);
        self.spacing = self.spacing.min(u16::MAX as u32);
        self.supported_extensions = self
            .supported_extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        self.supported_extensions.sort();
        self.supported_extensions.dedup();
        self.image_dir = expand_home(&self.image_dir);
        self.palette_path = expand_home(&self.palette_path);
        self
    }

    pub fn with_image_dir(mut self, image_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = image_dir {
            self.image_dir = expand_home(&dir);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_file(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "wallpicker-config-{}-{}.json",
            tag,
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn defaults_match_the_stock_setup() {
        let config = PickerConfig::default();
        assert_eq!(config.border_color_slot, "color4");
        assert_eq!(
            config.supported_extensions,
            vec!["jpg", "jpeg", "png", "webp", "bmp", "gif"]
        );
        assert_eq!(config.wallpaper_backends, WallpaperBackend::ALL.to_vec());
        assert!(config.palette_path.ends_with("wal/colors.json"));
        assert!(config.image_dir.ends_with("Wallpapers"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = unique_temp_file("partial");
        fs::write(
            &path,
            r#"{ "border_color_slot": "color2", "wallpaper_backends": ["feh", "swww"] }"#,
        )
        .expect("write config");

        let config = PickerConfig::load_from(&path).expect("load config");
        assert_eq!(config.border_color_slot, "color2");
        assert_eq!(
            config.wallpaper_backends,
            vec![WallpaperBackend::Feh, WallpaperBackend::Swww]
        );
        assert_eq!(config.spacing, 4);
        assert!(config.spicetify);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let path = unique_temp_file("malformed");
        fs::write(&path, "{ not json").expect("write config");

        let err = PickerConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn oversized_margin_and_spacing_are_capped() {
        let path = unique_temp_file("margin");
        fs::write(&path, r#"{ "margin": 4294967295, "spacing": 70000 }"#).expect("write config");

        let config = PickerConfig::load_from(&path).expect("load config");
        assert_eq!(config.margin, u16::MAX as u32);
        assert_eq!(config.spacing, u16::MAX as u32);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn extensions_are_normalized() {
        let config = PickerConfig {
            supported_extensions: vec![".PNG".into(), "jpg".into(), " png ".into(), "".into()],
            ..PickerConfig::default()
        }
        .normalized();
        assert_eq!(config.supported_extensions, vec!["jpg", "png"]);
    }

    #[test]
    fn cli_folder_overrides_config() {
        let config = PickerConfig::default().with_image_dir(Some(PathBuf::from("/srv/walls")));
        assert_eq!(config.image_dir, PathBuf::from("/srv/walls"));

        let unchanged = PickerConfig::default().with_image_dir(None);
        assert_eq!(unchanged.image_dir, PickerConfig::default().image_dir);
    }
}
