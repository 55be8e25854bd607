use crate::Result;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// Scales `img` so its shorter edge is `side`, then crops the center to a
/// `side` x `side` square.
pub fn fill_square(img: &DynamicImage, side: u32) -> RgbaImage {
    img.resize_to_fill(side, side, FilterType::Triangle).to_rgba8()
}

pub fn load_square(image_path: &Path, side: u32) -> Result<RgbaImage> {
    let img = image::open(image_path)?;
    Ok(fill_square(&img, side))
}
