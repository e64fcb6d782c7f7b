//! Binarization with inverted convention: dark ink becomes foreground.
//!
//! Two strategies: a global Otsu threshold for the header scan (bimodal
//! printed content on paper) and a local adaptive threshold for bubble
//! detection, which tolerates uneven lighting and shadow across a
//! photographed sheet where a single global cutoff fails.

use crate::models::BinaryMask;

/// Binarize grayscale data using Otsu's method, inverted.
/// Returns a BinaryMask where true = ink (darker than the threshold).
pub fn otsu_binarize_inv(gray: &[u8], width: usize, height: usize) -> BinaryMask {
    let threshold = calculate_otsu_threshold(gray);
    let mut mask = BinaryMask::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            mask.set(x, y, gray[idx] < threshold);
        }
    }

    mask
}

/// Calculate Otsu's optimal threshold
fn calculate_otsu_threshold(gray: &[u8]) -> u8 {
    // Build histogram
    let mut histogram = [0u32; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }

    let total_pixels = gray.len() as f64;
    let mut max_variance = 0.0;
    let mut optimal_threshold = 128u8;

    for threshold in 0..=255u8 {
        let mut class1_pixels = 0u32;
        let mut class1_sum = 0u64;
        let mut class2_pixels = 0u32;
        let mut class2_sum = 0u64;

        for intensity in 0..=255u8 {
            let count = histogram[intensity as usize];
            if intensity < threshold {
                class1_pixels += count;
                class1_sum += count as u64 * intensity as u64;
            } else {
                class2_pixels += count;
                class2_sum += count as u64 * intensity as u64;
            }
        }

        if class1_pixels == 0 || class2_pixels == 0 {
            continue;
        }

        let class1_mean = class1_sum as f64 / class1_pixels as f64;
        let class2_mean = class2_sum as f64 / class2_pixels as f64;

        let weight1 = class1_pixels as f64 / total_pixels;
        let weight2 = class2_pixels as f64 / total_pixels;

        let variance = weight1 * weight2 * (class1_mean - class2_mean).powi(2);

        if variance > max_variance {
            max_variance = variance;
            optimal_threshold = threshold;
        }
    }

    optimal_threshold
}

/// Adaptive local-mean threshold, inverted.
///
/// A pixel is ink when it is darker than the mean of its `block`-sided
/// neighborhood minus `offset`. The local mean is computed with an
/// integral image, so the cost is independent of the block size.
/// `block` should be odd; the neighborhood is clamped at the borders.
pub fn adaptive_binarize_inv(
    gray: &[u8],
    width: usize,
    height: usize,
    block: usize,
    offset: i32,
) -> BinaryMask {
    let mut mask = BinaryMask::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }

    // Integral image with a one-row/one-column zero border.
    let iw = width + 1;
    let mut integral = vec![0i64; iw * (height + 1)];
    for y in 0..height {
        let mut row_sum = 0i64;
        for x in 0..width {
            row_sum += gray[y * width + x] as i64;
            integral[(y + 1) * iw + (x + 1)] = row_sum + integral[y * iw + (x + 1)];
        }
    }

    let radius = block / 2;
    for y in 0..height {
        let y0 = y.saturating_sub(radius);
        let y1 = (y + radius + 1).min(height);
        for x in 0..width {
            let x0 = x.saturating_sub(radius);
            let x1 = (x + radius + 1).min(width);
            let area = ((y1 - y0) * (x1 - x0)) as i64;
            let sum = integral[y1 * iw + x1] - integral[y0 * iw + x1] - integral[y1 * iw + x0]
                + integral[y0 * iw + x0];
            let local_mean = sum / area;
            let is_ink = (gray[y * width + x] as i64) < local_mean - offset as i64;
            mask.set(x, y, is_ink);
        }
    }

    mask
}
