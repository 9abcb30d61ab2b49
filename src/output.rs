use anyhow::{Context, Result};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use log::debug;
use std::path::Path;

/// Encode the canvas as an 8-bit RGB PNG
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)
        .map_err(|e| anyhow::anyhow!("Failed to encode PNG: {}", e))?;

    Ok(bytes)
}

/// Write the canvas as PNG, replacing any existing file, and return its on-disk size
///
/// Encoding happens fully in memory first, so a failed encode never touches the file.
pub fn write_png(img: &RgbImage, path: &Path) -> Result<u64> {
    let bytes = encode_png(img)?;
    std::fs::write(path, &bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let size = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();
    debug!("Wrote {} bytes to {}", size, path.display());

    Ok(size)
}

/// Confirmation line printed after a successful write
pub fn report_line(path: &Path, size: u64) -> String {
    format!("generated {} {}", path.display(), size)
}
