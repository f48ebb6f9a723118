//! Greyscale PNG encoding.

use std::path::Path;

use anyhow::{Context, bail};
use image::{GrayImage, ImageBuffer, ImageFormat, Luma};
use noisegen_core::Field;

/// Writes `field` as a greyscale PNG.
///
/// Uses 8 bits per pixel when `target_max` fits a byte and 16 bits otherwise.
pub fn write_png(path: &Path, field: &Field, target_max: u32) -> anyhow::Result<()> {
    let Ok(target_max) = u16::try_from(target_max) else {
        bail!("target max {target_max} does not fit a 16-bit image");
    };
    let width = u32::try_from(field.cols()).context("image too wide")?;
    let height = u32::try_from(field.rows()).context("image too tall")?;
    let levels = field.to_levels(target_max);

    let written = if target_max <= u16::from(u8::MAX) {
        let pixels = levels.into_iter().map(|v| v as u8).collect();
        GrayImage::from_raw(width, height, pixels)
            .context("pixel buffer does not match image size")?
            .save_with_format(path, ImageFormat::Png)
    } else {
        ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(width, height, levels)
            .context("pixel buffer does not match image size")?
            .save_with_format(path, ImageFormat::Png)
    };
    written.with_context(|| format!("failed to write {}", path.display()))
}
