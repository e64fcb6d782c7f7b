//! Binary dilation with a rectangular structuring element.
//!
//! Used by the header stripper to merge nearby text strokes and box lines
//! into single wide blobs. The rectangular kernel is separable, so the
//! dilation runs as a horizontal then a vertical sliding-window maximum,
//! making the cost independent of kernel size.

use crate::models::BinaryMask;

/// Dilate `mask` with a `kernel_w` x `kernel_h` rectangle, `iterations` times.
pub fn dilate(mask: &BinaryMask, kernel_w: usize, kernel_h: usize, iterations: usize) -> BinaryMask {
    let width = mask.width();
    let height = mask.height();
    if width == 0 || height == 0 {
        return mask.clone();
    }

    let mut buf = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            if mask.get(x, y) {
                buf[y * width + x] = 1;
            }
        }
    }

    let mut tmp = vec![0u8; width * height];
    for _ in 0..iterations {
        dilate_horizontal(&buf, &mut tmp, width, height, kernel_w);
        dilate_vertical(&tmp, &mut buf, width, height, kernel_h);
    }

    let mut out = BinaryMask::new(width, height);
    for y in 0..height {
        for x in 0..width {
            if buf[y * width + x] != 0 {
                out.set(x, y, true);
            }
        }
    }
    out
}

/// Horizontal sliding-window maximum: output is set when any input pixel
/// in the window `[x - r_left, x + r_right]` is set.
fn dilate_horizontal(input: &[u8], output: &mut [u8], w: usize, h: usize, kernel_w: usize) {
    if kernel_w <= 1 {
        output.copy_from_slice(input);
        return;
    }
    let r_left = (kernel_w - 1) / 2;
    let r_right = kernel_w / 2;

    for y in 0..h {
        let row = y * w;
        let mut count = 0usize;

        // Initialize window covering [0, min(r_right, w-1)].
        for x in 0..=r_right.min(w - 1) {
            if input[row + x] != 0 {
                count += 1;
            }
        }

        for x in 0..w {
            output[row + x] = if count > 0 { 1 } else { 0 };

            // Pixel entering right edge of next window.
            let enter = x + r_right + 1;
            if enter < w && input[row + enter] != 0 {
                count += 1;
            }

            // Pixel leaving left edge of current window.
            if x >= r_left && input[row + x - r_left] != 0 {
                count -= 1;
            }
        }
    }
}

/// Vertical sliding-window maximum.
fn dilate_vertical(input: &[u8], output: &mut [u8], w: usize, h: usize, kernel_h: usize) {
    if kernel_h <= 1 {
        output.copy_from_slice(input);
        return;
    }
    let r_top = (kernel_h - 1) / 2;
    let r_bot = kernel_h / 2;

    for x in 0..w {
        let mut count = 0usize;

        // Initialize window covering [0, min(r_bot, h-1)].
        for y in 0..=r_bot.min(h - 1) {
            if input[y * w + x] != 0 {
                count += 1;
            }
        }

        for y in 0..h {
            output[y * w + x] = if count > 0 { 1 } else { 0 };

            let enter = y + r_bot + 1;
            if enter < h && input[enter * w + x] != 0 {
                count += 1;
            }

            if y >= r_top && input[(y - r_top) * w + x] != 0 {
                count -= 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_kernel_bridges_horizontal_gap() {
        // Two dots 6 px apart merge under a 9-wide kernel.
        let mut mask = BinaryMask::new(20, 5);
        mask.set(5, 2, true);
        mask.set(11, 2, true);

        let dilated = dilate(&mask, 9, 1, 1);
        for x in 5..=11 {
            assert!(dilated.get(x, 2), "gap pixel {} not bridged", x);
        }
        // A tall kernel was not requested, rows above stay empty at the edges
        assert!(!dilated.get(0, 0));
    }

    #[test]
    fn test_vertical_growth_limited_to_kernel() {
        let mut mask = BinaryMask::new(7, 9);
        mask.set(3, 4, true);

        let dilated = dilate(&mask, 1, 3, 1);
        assert!(dilated.get(3, 3));
        assert!(dilated.get(3, 5));
        assert!(!dilated.get(3, 2));
        assert!(!dilated.get(2, 4));
    }

    #[test]
    fn test_iterations_compound() {
        let mut mask = BinaryMask::new(30, 3);
        mask.set(15, 1, true);

        let once = dilate(&mask, 5, 1, 1);
        let twice = dilate(&mask, 5, 1, 2);
        assert!(!once.get(11, 1));
        assert!(twice.get(11, 1));
    }

    #[test]
    fn test_unit_kernel_is_identity() {
        let mut mask = BinaryMask::new(4, 4);
        mask.set(1, 2, true);
        let dilated = dilate(&mask, 1, 1, 3);
        assert!(dilated.get(1, 2));
        assert_eq!(dilated.count_ink(), 1);
    }
}
