//! Selection tests - the reference validation scenarios

use std::collections::BTreeSet;

use wordgrid::core::selection::{path, selection_path, snapped_direction, validate};
use wordgrid::core::{Grid, Puzzle, Word};
use wordgrid::types::{DayKey, Direction, GridPosition};

fn reference_puzzle() -> Puzzle {
    let grid = Grid::new(vec![
        vec!['C', 'A', 'T', 'X'],
        vec!['X', 'X', 'X', 'X'],
        vec!['X', 'X', 'X', 'X'],
        vec!['X', 'X', 'X', 'X'],
    ]);
    Puzzle::new(1, DayKey::new(0), grid, vec![Word::new("CAT")])
}

#[test]
fn test_forward_selection_matches() {
    let puzzle = reference_puzzle();
    let selection = [
        GridPosition::new(0, 0),
        GridPosition::new(0, 1),
        GridPosition::new(0, 2),
    ];
    assert_eq!(
        validate(&selection, &puzzle, &BTreeSet::new()).as_deref(),
        Some("CAT")
    );
}

#[test]
fn test_reversed_selection_matches() {
    let puzzle = reference_puzzle();
    let selection = [
        GridPosition::new(0, 2),
        GridPosition::new(0, 1),
        GridPosition::new(0, 0),
    ];
    assert_eq!(
        validate(&selection, &puzzle, &BTreeSet::new()).as_deref(),
        Some("CAT")
    );
}

#[test]
fn test_diagonal_mismatch_is_no_match() {
    let puzzle = reference_puzzle();
    let selection = [GridPosition::new(0, 0), GridPosition::new(1, 1)];
    assert_eq!(validate(&selection, &puzzle, &BTreeSet::new()), None);
}

#[test]
fn test_found_word_cannot_be_found_again() {
    let puzzle = reference_puzzle();
    let found: BTreeSet<String> = ["CAT".to_string()].into();

    let forward = [
        GridPosition::new(0, 0),
        GridPosition::new(0, 1),
        GridPosition::new(0, 2),
    ];
    let reversed = [
        GridPosition::new(0, 2),
        GridPosition::new(0, 1),
        GridPosition::new(0, 0),
    ];
    assert_eq!(validate(&forward, &puzzle, &found), None);
    assert_eq!(validate(&reversed, &puzzle, &found), None);
}

#[test]
fn test_strict_path_between_taps() {
    let puzzle = reference_puzzle();
    let grid = puzzle.grid();

    let horizontal = path(GridPosition::new(0, 0), GridPosition::new(0, 3), grid).unwrap();
    assert_eq!(horizontal.len(), 4);

    // Non-collinear tap pair resolves to no path
    assert!(path(GridPosition::new(0, 0), GridPosition::new(2, 1), grid).is_none());
    // Paths may not leave the board
    assert!(path(GridPosition::new(0, 0), GridPosition::new(0, 4), grid).is_none());
}

#[test]
fn test_live_selection_tolerates_overshoot() {
    let puzzle = reference_puzzle();
    let grid = puzzle.grid();

    let start = GridPosition::new(3, 0);
    let end = GridPosition::new(3, 9); // drag ran off the board
    let dir = snapped_direction(start, end);
    assert_eq!(dir, Direction::East);

    let live = selection_path(start, end, dir, grid);
    assert_eq!(live.len(), 4);
    for pos in live {
        assert!(grid.contains(pos));
    }
}

#[test]
fn test_selection_normalizes_letters() {
    // Lowercase/accents in the grid still match the normalized word set
    let grid = Grid::new(vec![
        vec!['c', 'á', 't'],
        vec!['x', 'x', 'x'],
        vec!['x', 'x', 'x'],
    ]);
    let puzzle = Puzzle::new(1, DayKey::new(0), grid, vec![Word::new("CAT")]);
    let selection = [
        GridPosition::new(0, 0),
        GridPosition::new(0, 1),
        GridPosition::new(0, 2),
    ];
    assert_eq!(
        validate(&selection, &puzzle, &BTreeSet::new()).as_deref(),
        Some("CAT")
    );
}
