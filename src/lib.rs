//! OmrScan - template-free optical answer-sheet grading
//!
//! A pure Rust pipeline that takes a photographed multiple-choice answer
//! sheet (arbitrary layout, lighting, and orientation, with no fixed
//! template or fiducial markers) and extracts which option the student
//! marked for each question, then scores the sheet against an answer key.
//!
//! The pipeline runs strictly forward: normalize the image to a fixed
//! working width, strip the registration header, detect bubble-shaped ink
//! components under an adaptive threshold, cluster them into a grid of
//! answer rows by gap heuristics, read the darkest bubble per row, and
//! score against the key. Each invocation owns its buffers; calls are
//! pure, synchronous, and safe to run in parallel.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Pipeline configuration derived from one normalization width
pub mod config;
/// Answer-sheet structure detection (header, bubbles, grid, marks)
pub mod detector;
/// Fatal error taxonomy with user-facing hints
pub mod error;
/// Core data structures (Raster, BinaryMask, Candidate, results)
pub mod models;
/// Image normalization (decode, resize, grayscale)
pub mod pipeline;
/// Answer-key comparison and feedback generation
pub mod scoring;
/// Image-processing primitives (grayscale, thresholds, morphology)
pub mod utils;

pub use config::SheetConfig;
pub use error::GradeError;
pub use models::{
    AnswerStatus, Candidate, GradingResult, KeyEntry, QuestionDetail, ScanResult,
};

use detector::bubbles::detect_bubbles;
use detector::grid::cluster_grid;
use detector::header::strip_header;
use detector::marks::read_marks;
use pipeline::normalize;
use scoring::score_answers;

/// Grade a photographed answer sheet against an answer key.
///
/// # Arguments
/// * `image_bytes` - Encoded image data (JPEG, PNG, ...)
/// * `key` - Expected correct option per question, indices or letters
///
/// # Errors
/// [`GradeError::Decode`] when the bytes are not a decodable image,
/// [`GradeError::NoBubblesDetected`] when no answer bubbles survive
/// geometric filtering (blank page, wrong artifact, very poor photo).
pub fn grade(image_bytes: &[u8], key: &[KeyEntry]) -> Result<GradingResult, GradeError> {
    Grader::new().grade(image_bytes, key)
}

/// Scan a sheet without scoring: detected answers only.
///
/// The key-less variant of [`grade`], used to extract an answer key from
/// a specimen sheet. Shares every detection stage, skips the scorer.
pub fn scan(image_bytes: &[u8]) -> Result<ScanResult, GradeError> {
    Grader::new().scan(image_bytes)
}

/// Grading pipeline with configuration options.
#[derive(Debug, Clone, Default)]
pub struct Grader {
    config: SheetConfig,
}

impl Grader {
    /// Create a grader with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grader with a specific configuration.
    pub fn with_config(config: SheetConfig) -> Self {
        Self { config }
    }

    /// Grade an answer sheet against a key. See [`grade`].
    pub fn grade(&self, image_bytes: &[u8], key: &[KeyEntry]) -> Result<GradingResult, GradeError> {
        let detected = self.detect_answers(image_bytes)?;
        Ok(score_answers(&detected, key))
    }

    /// Scan an answer sheet without scoring. See [`scan`].
    pub fn scan(&self, image_bytes: &[u8]) -> Result<ScanResult, GradeError> {
        let detected = self.detect_answers(image_bytes)?;
        Ok(ScanResult {
            answers: detected
                .iter()
                .map(|a| a.map(String::from).unwrap_or_default())
                .collect(),
        })
    }

    /// Run stages 1-5: one detected letter (or unanswered) per question.
    fn detect_answers(&self, image_bytes: &[u8]) -> Result<Vec<Option<char>>, GradeError> {
        let raster = normalize(image_bytes, &self.config)?;
        let roi = strip_header(&raster, &self.config);
        let candidates = detect_bubbles(&roi, &self.config)?;
        let rows = cluster_grid(candidates, &self.config);
        Ok(read_marks(&rows, &self.config))
    }
}
