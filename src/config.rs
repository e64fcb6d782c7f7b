//! Pipeline configuration
//!
//! Every pixel threshold in the pipeline is calibrated against one
//! normalization width. `SheetConfig` holds that single constant and
//! derives all thresholds from it, so the pipeline stays correct if the
//! target width is ever changed. Stages receive the config explicitly;
//! there are no scattered literals and no module-level globals.

/// The normalization width the base thresholds were tuned against.
const BASE_WIDTH: f32 = 1600.0;

/// Configuration for one grading invocation.
///
/// All derived thresholds scale linearly with `target_width` (areas scale
/// quadratically). The default of 1600 px matches the tuning baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    /// Width every input image is resized to before any geometric reasoning.
    pub target_width: u32,
}

impl SheetConfig {
    /// Create a config for a non-default normalization width.
    pub fn with_target_width(target_width: u32) -> Self {
        Self { target_width }
    }

    /// Linear scale factor relative to the tuning baseline.
    fn scale(&self) -> f32 {
        self.target_width as f32 / BASE_WIDTH
    }

    fn px(&self, base: f32) -> usize {
        (base * self.scale()).round().max(1.0) as usize
    }

    /// Fraction of image height scanned for the registration header.
    pub fn header_scan_frac(&self) -> f32 {
        0.35
    }

    /// A blob must span this fraction of the image width to count as header.
    pub fn header_min_width_frac(&self) -> f32 {
        0.30
    }

    /// Safety margin added below the detected header before cropping.
    pub fn header_margin_px(&self) -> usize {
        self.px(30.0)
    }

    /// Detected header must end below this line to be trusted.
    pub fn header_min_crop_px(&self) -> usize {
        self.px(50.0)
    }

    /// Fallback crop fraction when no header blob is found.
    pub fn header_blind_crop_frac(&self) -> f32 {
        0.20
    }

    /// Crop lines at or beyond this fraction of image height are rejected.
    pub fn header_max_crop_frac(&self) -> f32 {
        0.80
    }

    /// Structuring element (width, height) for the header-merging dilation.
    /// Much wider than tall: header content is wide horizontal structure.
    pub fn header_dilate_kernel(&self) -> (usize, usize) {
        (self.px(20.0), self.px(3.0))
    }

    /// Dilation passes applied with the header kernel.
    pub fn header_dilate_iterations(&self) -> usize {
        2
    }

    /// Neighborhood side length for the adaptive threshold (forced odd).
    pub fn adaptive_block_px(&self) -> usize {
        let block = self.px(51.0);
        if block % 2 == 0 { block + 1 } else { block }
    }

    /// Constant subtracted from the local mean by the adaptive threshold.
    pub fn adaptive_offset(&self) -> i32 {
        15
    }

    /// Minimum bubble bounding-box side.
    pub fn bubble_min_px(&self) -> usize {
        self.px(25.0)
    }

    /// Maximum bubble bounding-box side.
    pub fn bubble_max_px(&self) -> usize {
        self.px(80.0)
    }

    /// Accepted bubble aspect-ratio band (roughly square or circular).
    pub fn bubble_aspect_range(&self) -> (f32, f32) {
        (0.75, 1.25)
    }

    /// Horizontal gap that separates physically distinct answer columns.
    pub fn column_gap_px(&self) -> usize {
        self.px(120.0)
    }

    /// Vertical gap that separates consecutive question rows.
    pub fn row_gap_px(&self) -> usize {
        self.px(30.0)
    }

    /// Rows with fewer candidates than this are dropped as noise.
    pub fn min_row_len(&self) -> usize {
        4
    }

    /// Minimum ink pixel count for a bubble to count as marked.
    /// An area threshold, so it scales with the square of the width ratio.
    pub fn min_ink_px(&self) -> u32 {
        let s = self.scale();
        (450.0 * s * s).round().max(1.0) as u32
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self { target_width: 1600 }
    }
}
