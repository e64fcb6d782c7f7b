//! Header stripper
//!
//! Answer sheets carry a registration block at the top (name/ID boxes,
//! printed labels) that produces large rectangular blobs above the answer
//! grid. This stage finds the dominant wide structures in the top 35% of
//! the normalized image and crops below them, so the header can never be
//! mistaken for answer bubbles. It never fails: when no header blob is
//! found, a blind 20% crop is applied instead, and an implausibly deep
//! crop line cancels cropping entirely.

use crate::config::SheetConfig;
use crate::detector::components::find_components;
use crate::models::Raster;
use crate::utils::binarization::otsu_binarize_inv;
use crate::utils::morphology::dilate;

/// Remove the registration header, returning the sub-image below it.
pub fn strip_header(raster: &Raster, config: &SheetConfig) -> Raster {
    let img_w = raster.width();
    let img_h = raster.height();
    if img_w == 0 || img_h == 0 {
        return raster.clone();
    }

    let crop_y = find_crop_line(raster, config);
    raster.crop_rows(crop_y, img_h)
}

/// Locate the row below which the answer grid starts.
fn find_crop_line(raster: &Raster, config: &SheetConfig) -> usize {
    let img_w = raster.width();
    let img_h = raster.height();

    // Only the top part of the sheet is analyzed for header content.
    let top_limit = (img_h as f32 * config.header_scan_frac()) as usize;
    if top_limit == 0 {
        return 0;
    }
    let top = raster.crop_rows(0, top_limit);

    // Global threshold is fine here: printed headers on paper are bimodal.
    let ink = otsu_binarize_inv(top.as_slice(), img_w, top.height());

    // Wide horizontal dilation merges text and box strokes into blobs.
    let (kernel_w, kernel_h) = config.header_dilate_kernel();
    let merged = dilate(&ink, kernel_w, kernel_h, config.header_dilate_iterations());

    // Only blobs spanning a large share of the width look like a header.
    let min_width = (img_w as f32 * config.header_min_width_frac()) as usize;
    let mut max_y = 0usize;
    let mut found = false;
    for component in find_components(&merged) {
        if component.width() > min_width {
            max_y = max_y.max(component.max_y + 1);
            found = true;
        }
    }

    let crop_y = if found && max_y > config.header_min_crop_px() {
        max_y + config.header_margin_px()
    } else {
        // Fallback: no clear header block, blind-crop the top.
        (img_h as f32 * config.header_blind_crop_frac()) as usize
    };

    // Safety bound: never crop most of the sheet away.
    if crop_y >= (img_h as f32 * config.header_max_crop_frac()) as usize {
        0
    } else {
        crop_y
    }
}
