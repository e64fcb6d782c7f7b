//! Grid clusterer
//!
//! Recovers the logical (column, row, option-position) structure of the
//! sheet purely from candidate geometry, with no prior template: columns
//! split on large horizontal gaps, rows within a column split on vertical
//! gaps, and each row's left-to-right order defines the option indices.
//! Gap thresholds are fixed constants of the normalization width, not
//! adaptive to detected bubble spacing.

use crate::config::SheetConfig;
use crate::models::Candidate;

/// Group candidates into answer rows, in question order.
///
/// Question order is column-major: all rows of the leftmost column top to
/// bottom, then the next column, matching how multi-column sheets are
/// numbered. Rows with fewer than `min_row_len` candidates are dropped as
/// noise: too few shapes to represent a 4/5-option question reliably.
/// This trades a little recall for precision and is documented behavior,
/// not an error.
pub fn cluster_grid(mut candidates: Vec<Candidate>, config: &SheetConfig) -> Vec<Vec<Candidate>> {
    if candidates.is_empty() {
        return Vec::new();
    }

    // Split into columns on large horizontal gaps.
    candidates.sort_by_key(|c| c.x);
    let column_gap = config.column_gap_px();
    let mut columns: Vec<Vec<Candidate>> = Vec::new();
    let mut current_column: Vec<Candidate> = Vec::new();
    for candidate in candidates {
        if let Some(prev) = current_column.last() {
            if candidate.x.saturating_sub(prev.x) > column_gap {
                columns.push(std::mem::take(&mut current_column));
            }
        }
        current_column.push(candidate);
    }
    columns.push(current_column);

    // Within each column, split into rows on vertical gaps.
    let row_gap = config.row_gap_px();
    let min_row_len = config.min_row_len();
    let mut rows: Vec<Vec<Candidate>> = Vec::new();
    for mut column in columns {
        column.sort_by_key(|c| c.y);
        let mut current_row: Vec<Candidate> = Vec::new();
        for candidate in column {
            if let Some(prev) = current_row.last() {
                if candidate.y.abs_diff(prev.y) >= row_gap {
                    rows.push(std::mem::take(&mut current_row));
                }
            }
            current_row.push(candidate);
        }
        rows.push(current_row);
    }

    // Left-to-right order within a row defines option indices A, B, C...
    let mut grid: Vec<Vec<Candidate>> = Vec::new();
    for mut row in rows {
        if row.len() < min_row_len {
            continue;
        }
        row.sort_by_key(|c| c.x);
        grid.push(row);
    }
    grid
}
