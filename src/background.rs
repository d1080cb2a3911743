//! Background photo loading
//!
//! A native open-file dialog picks the photo at startup; the image is then
//! decoded and stretched to the square board size with Lanczos resampling.
//! Both steps run to completion before the window opens, and any failure
//! aborts startup.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;

use crate::display::PixelBuffer;
use crate::render::GRID_SIZE;

/// Ask the user for a background photo. None when the dialog is cancelled.
pub fn pick_background() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select Background")
        .add_filter("Image files", &["jpg", "jpeg", "png"])
        .pick_file()
}

/// Decode the photo and stretch it to the board size (no letterboxing)
pub fn load_background(path: &Path) -> Result<PixelBuffer, String> {
    if !path.is_file() {
        return Err(format!("background image not found: {}", path.display()));
    }

    let img = image::open(path)
        .map_err(|e| format!("could not decode {}: {}", path.display(), e))?
        .resize_exact(GRID_SIZE, GRID_SIZE, FilterType::Lanczos3)
        .to_rgb8();

    let mut buffer = PixelBuffer::with_size(GRID_SIZE, GRID_SIZE);
    for (x, y, pixel) in img.enumerate_pixels() {
        buffer.set_pixel(x as i32, y as i32, pixel[0], pixel[1], pixel[2]);
    }
    Ok(buffer)
}
