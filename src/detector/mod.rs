//! Answer-sheet structure detection
//!
//! This module contains the geometric stages of the pipeline:
//! - Connected-component extraction over a binary ink mask
//! - Header stripping (remove the registration block at the top)
//! - Bubble detection (size/shape filtered ink components)
//! - Grid clustering (columns by x-gaps, rows by y-gaps)
//! - Mark reading (darkest bubble above the ink threshold per row)

/// Connected components with bounding boxes and ink counts
pub mod components;
/// Registration-header location and removal
pub mod header;
/// Bubble candidate detection via adaptive threshold and shape filters
pub mod bubbles;
/// Template-free grid recovery from candidate geometry
pub mod grid;
/// Per-row marked-option selection
pub mod marks;
