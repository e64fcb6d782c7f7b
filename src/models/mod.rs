//! Core data structures shared across pipeline stages

/// Bubble-candidate shape record
pub mod candidate;
/// Packed binary ink mask
pub mod mask;
/// Owned grayscale pixel grid
pub mod raster;
/// Result records and answer-key entries
pub mod result;

pub use candidate::Candidate;
pub use mask::BinaryMask;
pub use raster::Raster;
pub use result::{
    AnswerStatus, GradingResult, KeyEntry, OPTION_LETTERS, QuestionDetail, ScanResult,
};
