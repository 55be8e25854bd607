use crate::utils::expand_home;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Lists the images directly inside `directory`, sorted by file name.
///
/// Only regular files whose extension matches one of `extensions`
/// (case-insensitive, given without the dot) are returned. A missing or
/// unreadable directory yields an empty list.
pub fn find_images(directory: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let directory = expand_home(directory);
    let mut images = Vec::new();

    if !directory.is_dir() {
        debug!("Not a directory: {}", directory.display());
        return images;
    }

    let entries = match fs::read_dir(&directory) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Could not read {}: {}", directory.display(), e);
            return images;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        if let Some(extension) = path.extension() {
            let ext_str = extension.to_string_lossy().to_lowercase();
            if extensions.iter().any(|ext| ext.eq_ignore_ascii_case(&ext_str)) {
                images.push(path);
            }
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    images
}
