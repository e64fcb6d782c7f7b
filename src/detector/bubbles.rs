//! Bubble detector
//!
//! Finds shape candidates that are plausibly answer bubbles in the
//! header-stripped image. Binarization is adaptive (local mean over a
//! large neighborhood) so shadows and uneven lighting across a
//! photographed sheet do not swallow half the marks the way a single
//! global threshold would. Candidates are then filtered by size and
//! aspect ratio: bubbles are small and roughly square, which rejects
//! leftover header fragments, thin rule lines, and noise specks.

use crate::config::SheetConfig;
use crate::detector::components::find_components;
use crate::error::GradeError;
use crate::models::{Candidate, Raster};
use crate::utils::binarization::adaptive_binarize_inv;

/// Detect bubble candidates in a header-stripped raster.
///
/// Each candidate carries the ink pixel count of its connected component,
/// which is the measurement the mark reader ranks options by: a filled
/// bubble is a solid blob, an empty one only a thin outline.
pub fn detect_bubbles(raster: &Raster, config: &SheetConfig) -> Result<Vec<Candidate>, GradeError> {
    let width = raster.width();
    let height = raster.height();

    let ink = adaptive_binarize_inv(
        raster.as_slice(),
        width,
        height,
        config.adaptive_block_px(),
        config.adaptive_offset(),
    );

    let min_side = config.bubble_min_px();
    let max_side = config.bubble_max_px();
    let (aspect_lo, aspect_hi) = config.bubble_aspect_range();

    let mut candidates: Vec<Candidate> = find_components(&ink)
        .into_iter()
        .filter_map(|component| {
            let w = component.width();
            let h = component.height();
            if w < min_side || h < min_side || w > max_side || h > max_side {
                return None;
            }
            let candidate = Candidate {
                x: component.min_x,
                y: component.min_y,
                width: w,
                height: h,
                ink_pixels: component.pixels,
            };
            let aspect = candidate.aspect_ratio();
            if aspect < aspect_lo || aspect > aspect_hi {
                return None;
            }
            Some(candidate)
        })
        .collect();

    if candidates.is_empty() {
        return Err(GradeError::NoBubblesDetected);
    }

    // HashMap iteration order is arbitrary; give callers a stable order.
    candidates.sort_by_key(|c| (c.y, c.x));
    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_raster(width: usize, height: usize) -> Vec<u8> {
        vec![255u8; width * height]
    }

    fn fill_rect(data: &mut [u8], img_w: usize, x0: usize, y0: usize, w: usize, h: usize) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                data[y * img_w + x] = 10;
            }
        }
    }

    #[test]
    fn test_square_mark_is_detected() {
        let (w, h) = (200, 200);
        let mut data = white_raster(w, h);
        fill_rect(&mut data, w, 80, 80, 10, 10);
        let raster = Raster::from_raw(data, w, h);
        let config = SheetConfig::with_target_width(400); // min side 6, max 20

        let candidates = detect_bubbles(&raster, &config).unwrap();
        assert_eq!(candidates.len(), 1);
        let c = candidates[0];
        assert_eq!((c.x, c.y, c.width, c.height), (80, 80, 10, 10));
        assert_eq!(c.ink_pixels, 100);
    }

    #[test]
    fn test_wide_bar_is_rejected() {
        // A header-like bar: right height, far too wide.
        let (w, h) = (400, 200);
        let mut data = white_raster(w, h);
        fill_rect(&mut data, w, 50, 80, 300, 12);
        fill_rect(&mut data, w, 60, 150, 10, 10); // one genuine mark
        let raster = Raster::from_raw(data, w, h);
        let config = SheetConfig::with_target_width(400);

        let candidates = detect_bubbles(&raster, &config).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].y, 150);
    }

    #[test]
    fn test_noise_specks_are_rejected() {
        let (w, h) = (200, 200);
        let mut data = white_raster(w, h);
        fill_rect(&mut data, w, 30, 30, 2, 2); // speck below min side
        fill_rect(&mut data, w, 100, 100, 10, 10);
        let raster = Raster::from_raw(data, w, h);
        let config = SheetConfig::with_target_width(400);

        let candidates = detect_bubbles(&raster, &config).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].x, 100);
    }

    #[test]
    fn test_blank_sheet_is_a_hard_failure() {
        let (w, h) = (200, 200);
        let raster = Raster::from_raw(white_raster(w, h), w, h);
        let config = SheetConfig::with_target_width(400);

        let err = detect_bubbles(&raster, &config).unwrap_err();
        assert!(matches!(err, GradeError::NoBubblesDetected));
    }

    #[test]
    fn test_candidates_in_stable_order() {
        let (w, h) = (300, 200);
        let mut data = white_raster(w, h);
        fill_rect(&mut data, w, 150, 50, 10, 10);
        fill_rect(&mut data, w, 40, 50, 10, 10);
        fill_rect(&mut data, w, 40, 120, 10, 10);
        let raster = Raster::from_raw(data, w, h);
        let config = SheetConfig::with_target_width(400);

        let candidates = detect_bubbles(&raster, &config).unwrap();
        let origins: Vec<(usize, usize)> = candidates.iter().map(|c| (c.y, c.x)).collect();
        assert_eq!(origins, vec![(50, 40), (50, 150), (120, 40)]);
    }
}
