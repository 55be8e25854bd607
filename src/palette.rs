//! Colors produced by pywal (`~/.cache/wal/colors.json`).

use crate::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Palette {
    #[serde(default)]
    pub wallpaper: Option<PathBuf>,
    #[serde(default)]
    pub special: BTreeMap<String, String>,
    pub colors: BTreeMap<String, String>,
}

impl Palette {
    pub fn load(path: &Path) -> Result<Self> {
        let content = read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Palette(e.to_string()))
    }

    pub fn color(&self, slot: &str) -> Option<&str> {
        self.colors.get(slot).map(String::as_str)
    }
}

/// Converts `#rrggbb` (or `#aarrggbb`) into Hyprland's `0xRRGGBB` token.
pub fn hyprland_color(hex: &str) -> Result<String> {
    let digits = hex.trim().trim_start_matches('#');

    if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::Palette(format!("Not a hex color: {hex:?}")));
    }

    Ok(format!("0x{}", digits.to_uppercase()))
}
