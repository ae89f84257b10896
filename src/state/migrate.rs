//! Migration module - one-time import of prior on-disk schemas
//!
//! Runs only while no current-format record exists; the presence of the
//! current key is itself the "already migrated" marker. Sources are tried
//! in a fixed order, each decode/validate/convert step side-effect-free
//! until one succeeds - only then are all legacy keys deleted. A blob
//! that fails to decode or validate is left in place and skipped.

use serde::Deserialize;

use crate::core::{normalize, Grid};
use crate::state::shared::SharedPuzzleState;
use crate::store::SharedStateRepository;
use crate::types::{GridPosition, MIN_WORD_LEN};

/// Newer legacy shape: three per-slot records, each self-contained
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacySlotRecord {
    grid: Vec<Vec<String>>,
    words: Vec<String>,
    #[serde(default)]
    found_words: Vec<String>,
    #[serde(default)]
    solved_positions: Vec<GridPosition>,
    #[serde(default)]
    puzzle_index: u64,
}

/// Oldest legacy shape: one record, no positions or index
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacySingleRecord {
    grid: Vec<Vec<String>>,
    words: Vec<String>,
    #[serde(default)]
    found_words: Vec<String>,
}

const SLOT_COUNT: usize = 3;

/// Try each legacy source in order; first success converts and deletes
/// every legacy key
pub fn run<R: SharedStateRepository>(repo: &mut R) -> Option<SharedPuzzleState> {
    for slot in 0..SLOT_COUNT {
        let Some(json) = repo.legacy_slot(slot) else {
            continue;
        };
        match convert_slot(&json) {
            Some(state) => {
                repo.delete_legacy_records();
                return Some(state);
            }
            None => {
                eprintln!("[store] legacy slot {} unreadable, skipping", slot);
            }
        }
    }

    if let Some(json) = repo.legacy_single() {
        match convert_single(&json) {
            Some(state) => {
                repo.delete_legacy_records();
                return Some(state);
            }
            None => {
                eprintln!("[store] legacy single record unreadable, skipping");
            }
        }
    }

    None
}

fn convert_slot(json: &str) -> Option<SharedPuzzleState> {
    let record: LegacySlotRecord = serde_json::from_str(json).ok()?;
    build_state(
        &record.grid,
        &record.words,
        &record.found_words,
        record.solved_positions,
        record.puzzle_index,
    )
}

fn convert_single(json: &str) -> Option<SharedPuzzleState> {
    let record: LegacySingleRecord = serde_json::from_str(json).ok()?;
    build_state(&record.grid, &record.words, &record.found_words, Vec::new(), 0)
}

/// Revalidate a legacy payload: grid must re-derive square and non-empty,
/// words are re-normalized and re-filtered to those that fit
fn build_state(
    letters: &[Vec<String>],
    words: &[String],
    found: &[String],
    solved: Vec<GridPosition>,
    puzzle_index: u64,
) -> Option<SharedPuzzleState> {
    let grid = Grid::from_letters(letters)?;
    if grid.is_empty() || !grid.is_square() {
        return None;
    }
    let size = grid.size();

    let words: Vec<String> = words
        .iter()
        .map(|w| normalize(w))
        .filter(|w| (MIN_WORD_LEN..=size).contains(&w.chars().count()))
        .collect();

    let found = found
        .iter()
        .map(|w| normalize(w))
        .filter(|w| words.contains(w))
        .collect();

    let solved = solved
        .into_iter()
        .filter(|pos| grid.contains(*pos))
        .collect();

    Some(SharedPuzzleState {
        grid,
        words,
        grid_size: size,
        anchor: None,
        found_words: found,
        solved_positions: solved,
        puzzle_index,
        is_help_visible: false,
        feedback: None,
        pending_word: None,
        pending_solved_positions: Vec::new(),
        next_hint_word: None,
        hint_expires_at: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot_json() -> String {
        r#"{
            "grid": [["C","A","T"],["X","X","X"],["X","X","X"]],
            "words": ["cat", "toolongword"],
            "foundWords": ["CAT"],
            "solvedPositions": [
                {"row": 0, "col": 0}, {"row": 0, "col": 9}
            ],
            "puzzleIndex": 5
        }"#
        .to_string()
    }

    #[test]
    fn test_convert_slot_revalidates() {
        let state = convert_slot(&slot_json()).unwrap();
        assert_eq!(state.grid_size, 3);
        assert_eq!(state.puzzle_index, 5);
        // Over-long word filtered out, survivor normalized
        assert_eq!(state.words, vec!["CAT".to_string()]);
        assert!(state.found_words.contains("CAT"));
        // Out-of-bounds solved position dropped
        assert_eq!(state.solved_positions.len(), 1);
    }

    #[test]
    fn test_convert_rejects_non_square_grid() {
        let json = r#"{"grid": [["A","B"],["C","D"],["E","F"]], "words": []}"#;
        assert!(convert_slot(json).is_none());
    }

    #[test]
    fn test_convert_rejects_garbage() {
        assert!(convert_slot("not json").is_none());
        assert!(convert_slot(r#"{"grid": [["AB"]], "words": []}"#).is_none());
    }

    #[test]
    fn test_convert_single_defaults() {
        let json = r#"{
            "grid": [["C","A","T"],["X","X","X"],["X","X","X"]],
            "words": ["CAT"],
            "foundWords": []
        }"#;
        let state = convert_single(json).unwrap();
        assert_eq!(state.puzzle_index, 0);
        assert!(state.solved_positions.is_empty());
    }
}
