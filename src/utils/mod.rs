//! Classical image-processing primitives
//!
//! This module provides the pixel-level building blocks of the pipeline:
//! - Grayscale conversion (RGB to luminance)
//! - Binarization (Otsu's method and local adaptive thresholding)
//! - Morphology (separable binary dilation)

pub mod binarization;
pub mod grayscale;
pub mod morphology;
