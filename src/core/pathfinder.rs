//! Path finder module - recover the displayed path of a found word
//!
//! Display-only: gameplay validation never calls this. When a word occurs
//! more than once in the grid, the path sharing the most already-solved
//! cells wins, so re-derived highlights line up with what the player
//! actually selected. Ties keep the first candidate in row-major, then
//! direction order.

use std::collections::BTreeSet;

use crate::core::word::normalize;
use crate::core::Grid;
use crate::types::{Direction, GridPosition};

/// Every straight in-bounds run whose letters spell `word`.
///
/// A reversed occurrence is the forward occurrence scanned from its far
/// end in the opposite direction, so matching forward text across all 8
/// directions covers both orientations.
pub fn candidate_paths(word: &str, grid: &Grid) -> Vec<Vec<GridPosition>> {
    let letters: Vec<char> = normalize(word).chars().collect();
    if letters.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::new();
    for row in 0..grid.row_count() as i32 {
        for col in 0..grid.col_count() as i32 {
            let start = GridPosition::new(row, col);
            for dir in Direction::ALL {
                if let Some(path) = run_at(&letters, grid, start, dir) {
                    candidates.push(path);
                }
            }
        }
    }
    candidates
}

fn run_at(
    letters: &[char],
    grid: &Grid,
    start: GridPosition,
    dir: Direction,
) -> Option<Vec<GridPosition>> {
    let mut path = Vec::with_capacity(letters.len());
    for (i, &expected) in letters.iter().enumerate() {
        let pos = start.stepped(dir, i as i32);
        if grid.letter(pos)? != expected {
            return None;
        }
        path.push(pos);
    }
    Some(path)
}

/// Best display path for a found word: maximize overlap with the solved
/// set, first-seen candidate wins ties
pub fn find_path(
    word: &str,
    grid: &Grid,
    solved: &BTreeSet<GridPosition>,
) -> Option<Vec<GridPosition>> {
    let mut best: Option<(usize, Vec<GridPosition>)> = None;
    for path in candidate_paths(word, grid) {
        let overlap = path.iter().filter(|pos| solved.contains(pos)).count();
        let better = match &best {
            Some((best_overlap, _)) => overlap > *best_overlap,
            None => true,
        };
        if better {
            best = Some((overlap, path));
        }
    }
    best.map(|(_, path)| path)
}
