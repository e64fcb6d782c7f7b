//! Image normalizer
//!
//! Decodes raw image bytes and rescales to the configured working width,
//! preserving aspect ratio. Every downstream pixel-size heuristic (bubble
//! size bands, gap thresholds, ink counts) is calibrated against that
//! width, so resolution-independent input must be normalized before any
//! geometric reasoning happens.

use crate::config::SheetConfig;
use crate::error::GradeError;
use crate::models::Raster;
use crate::utils::grayscale::rgb_to_grayscale;
use image::imageops::FilterType;

/// Decode, resize to the target width, and convert to grayscale.
///
/// The returned raster is owned by this invocation; the caller-supplied
/// bytes are not referenced after decoding.
pub fn normalize(image_bytes: &[u8], config: &SheetConfig) -> Result<Raster, GradeError> {
    let decoded = image::load_from_memory(image_bytes)?;

    let src_w = decoded.width().max(1);
    let src_h = decoded.height().max(1);
    let target_w = config.target_width.max(1);
    let target_h = ((src_h as f64 * target_w as f64 / src_w as f64).round() as u32).max(1);

    let resized = decoded.resize_exact(target_w, target_h, FilterType::Triangle);
    let rgb = resized.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    let gray = rgb_to_grayscale(rgb.as_raw(), width, height);

    Ok(Raster::from_raw(gray, width, height))
}
