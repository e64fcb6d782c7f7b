//! Error taxonomy for the grading pipeline
//!
//! Only two conditions are fatal for a call: undecodable input bytes and a
//! sheet with zero surviving bubble candidates. Everything else (noisy
//! rows, unmarked questions) is an expected outcome, not an error, and is
//! represented in the result instead.

/// Fatal errors a grading or scanning call can surface.
#[derive(Debug, thiserror::Error)]
pub enum GradeError {
    /// The input bytes were not a decodable raster image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Geometric filtering yielded zero bubble candidates after header
    /// removal: a blank page, the wrong artifact, or a very poor photo.
    #[error("no answer bubbles detected after header removal")]
    NoBubblesDetected,
}

impl GradeError {
    /// Human-readable recovery hint for the caller.
    ///
    /// The most common real-world failure is a bad photograph, not a code
    /// defect, so every fatal error carries advice the end user can act on.
    pub fn hint(&self) -> &'static str {
        match self {
            GradeError::Decode(_) => "upload the sheet as a JPEG or PNG photo",
            GradeError::NoBubblesDetected => {
                "make sure the photo shows the entire answer sheet with even lighting"
            }
        }
    }
}
