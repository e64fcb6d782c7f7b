//! Result and answer-key types
//!
//! Everything here is serde-serializable: the grading result is consumed
//! by external collaborators as a JSON mapping, and the answer key arrives
//! as a JSON array that may mix 0-based indices and letters per element.

use serde::{Deserialize, Serialize};

/// Option letters in index order: A=0 through E=4.
pub const OPTION_LETTERS: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

/// One entry of an answer key: a 0-based option index or a letter.
///
/// Both forms are semantically equivalent and are normalized to a letter
/// internally. Untagged so `[0, "B", 2]` deserializes per-element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyEntry {
    /// 0-based option index (A=0, B=1, C=2, D=3, E=4).
    Index(u8),
    /// Option letter, case-insensitive.
    Letter(String),
}

impl KeyEntry {
    /// Normalize to an uppercase option letter.
    ///
    /// Out-of-range indices and empty strings become '?', which matches
    /// no detected answer and therefore scores as wrong.
    pub fn as_letter(&self) -> char {
        match self {
            KeyEntry::Index(i) => OPTION_LETTERS.get(*i as usize).copied().unwrap_or('?'),
            KeyEntry::Letter(s) => s
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('?'),
        }
    }
}

impl From<u8> for KeyEntry {
    fn from(index: u8) -> Self {
        KeyEntry::Index(index)
    }
}

impl From<char> for KeyEntry {
    fn from(letter: char) -> Self {
        KeyEntry::Letter(letter.to_string())
    }
}

/// Per-question correctness status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerStatus {
    /// Detected answer matches the key.
    Correct,
    /// Detected answer differs from the key (including unanswered).
    Wrong,
}

/// Per-question detail record in the grading result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDetail {
    /// 1-based question number.
    pub no: usize,
    /// Detected answer letter, or empty string when unanswered.
    pub student_ans: String,
    /// Normalized key letter.
    pub key: String,
    /// Whether the answer matched the key.
    pub status: AnswerStatus,
}

/// Result of grading one answer sheet against a key.
///
/// Created once per grading call and returned; never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    /// Percentage score, 0-100, rounded to two decimals.
    pub score: f64,
    /// Maximum attainable score (always 100).
    pub max_score: u32,
    /// Number of questions answered correctly.
    pub correct_count: usize,
    /// Number of questions in the key.
    pub total_questions: usize,
    /// Detected answers, one per key entry, empty string when unanswered
    /// or undetected; always `total_questions` long.
    pub answers: Vec<String>,
    /// Per-question detail up to min(detected, key) positions.
    pub details: Vec<QuestionDetail>,
    /// Human-readable summary naming wrong question numbers.
    pub feedback: String,
}

/// Result of the key-less scan variant: detected answers only, no score.
///
/// Used to extract an answer key from a specimen sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Detected answer letters in question order, empty string when
    /// unanswered.
    pub answers: Vec<String>,
}
