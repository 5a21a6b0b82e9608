//! Offline frame export.

use std::path::{Path, PathBuf};

use crate::colors;
use crate::error::RenderResult;
use crate::render::{Renderer, Surface};

/// Convert the ARGB color buffer into an RGBA image.
pub fn to_image(renderer: &Renderer) -> image::RgbaImage {
    image::RgbaImage::from_fn(renderer.width(), renderer.height(), |x, y| {
        let argb = renderer.pixels()[(y * renderer.width() + x) as usize];
        image::Rgba(colors::to_rgba(argb))
    })
}

pub fn save_png(renderer: &Renderer, path: &Path) -> RenderResult<()> {
    to_image(renderer).save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// `dir/frame_0007.png` for frame 7.
pub fn frame_path(dir: &Path, frame: u64) -> PathBuf {
    dir.join(format!("frame_{frame:04}.png"))
}
