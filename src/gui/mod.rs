pub mod image_grid;
pub mod keys;

pub use image_grid::run_wallpaper_picker;
