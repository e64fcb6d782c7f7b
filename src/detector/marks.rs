//! Mark reader
//!
//! Decides, per answer row, which option the student marked. The bubble
//! with the most ink wins, but only above a minimum ink count: a lightly
//! smudged or accidentally touched bubble must not be forced into an
//! answer, so below the threshold the row is recorded as unanswered.

use crate::config::SheetConfig;
use crate::models::{Candidate, OPTION_LETTERS};

/// Read one answer per row: `Some(letter)` or `None` for unanswered.
pub fn read_marks(rows: &[Vec<Candidate>], config: &SheetConfig) -> Vec<Option<char>> {
    let min_ink = config.min_ink_px();
    rows.iter()
        .map(|row| {
            let (index, best) = darkest(row)?;
            if best.ink_pixels < min_ink {
                return None;
            }
            // Rows longer than the option table read as unanswered rather
            // than inventing a letter.
            OPTION_LETTERS.get(index).copied()
        })
        .collect()
}

/// Index and candidate with the maximum ink count; first wins ties.
fn darkest(row: &[Candidate]) -> Option<(usize, &Candidate)> {
    let mut best: Option<(usize, &Candidate)> = None;
    for (index, candidate) in row.iter().enumerate() {
        match best {
            Some((_, b)) if candidate.ink_pixels <= b.ink_pixels => {}
            _ => best = Some((index, candidate)),
        }
    }
    best
}
