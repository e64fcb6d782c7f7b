/// A detected shape considered a possible answer bubble.
///
/// The bounding box is in pixel coordinates of the header-stripped image.
/// `ink_pixels` is the number of foreground pixels in the shape's
/// connected component, i.e. the ink measurement the mark reader ranks
/// bubbles by. Candidates are transient: produced by the bubble detector,
/// consumed by the grid clusterer, not retained after scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Left edge of the bounding box.
    pub x: usize,
    /// Top edge of the bounding box.
    pub y: usize,
    /// Bounding box width.
    pub width: usize,
    /// Bounding box height.
    pub height: usize,
    /// Foreground pixel count of the component.
    pub ink_pixels: u32,
}

impl Candidate {
    /// Width-over-height ratio of the bounding box.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f32 / self.height as f32
    }
}
