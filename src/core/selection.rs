//! Selection module - turning a drag or tap pair into a matched word
//!
//! Two path flavors with different tolerance:
//! - `selection_path` is lossy and used for live drag display; it snaps to
//!   the nearest octant and silently drops steps that overshoot the board.
//! - `path` is strict and used for tap-to-tap resolution; it requires exact
//!   collinearity in one of the 8 directions and full in-bounds coverage.

use std::collections::BTreeSet;
use std::f64::consts::FRAC_PI_4;

use crate::core::puzzle::Puzzle;
use crate::core::word::normalize;
use crate::core::Grid;
use crate::types::{Direction, GridPosition};

/// Snap the start->end angle to the nearest 45-degree direction, so a
/// slightly off-axis drag still resolves to a straight line.
///
/// `Direction::ALL` is laid out in `atan2` octant order from angle 0
/// going clockwise (rows grow downward, so positive angles point south).
pub fn snapped_direction(start: GridPosition, end: GridPosition) -> Direction {
    let dy = (end.row - start.row) as f64;
    let dx = (end.col - start.col) as f64;
    let angle = dy.atan2(dx);
    let octant = (angle / FRAC_PI_4).round() as i32;
    Direction::ALL[octant.rem_euclid(8) as usize]
}

/// Walk from `start` along `direction` for max(|dr|, |dc|) steps inclusive,
/// dropping steps that fall outside the grid (gesture may overshoot)
pub fn selection_path(
    start: GridPosition,
    end: GridPosition,
    direction: Direction,
    grid: &Grid,
) -> Vec<GridPosition> {
    let steps = (end.row - start.row).abs().max((end.col - start.col).abs());
    (0..=steps)
        .map(|i| start.stepped(direction, i))
        .filter(|pos| grid.contains(*pos))
        .collect()
}

/// Strict straight path between two taps.
///
/// Requires exact horizontal, vertical, or diagonal alignment and every
/// cell in bounds; otherwise there is no path.
pub fn path(start: GridPosition, end: GridPosition, grid: &Grid) -> Option<Vec<GridPosition>> {
    let dr = end.row - start.row;
    let dc = end.col - start.col;
    if !(dr == 0 || dc == 0 || dr.abs() == dc.abs()) {
        return None;
    }

    let steps = dr.abs().max(dc.abs());
    let direction = Direction::from_deltas(dr, dc);

    let mut positions = Vec::with_capacity(steps as usize + 1);
    for i in 0..=steps {
        let pos = match direction {
            Some(dir) => start.stepped(dir, i),
            None => start, // start == end
        };
        if !grid.contains(pos) {
            return None;
        }
        positions.push(pos);
    }
    Some(positions)
}

/// Match a position sequence against a word set, excluding found words.
///
/// Both the forward reading and its character reversal are legal finds;
/// the returned word is the orientation present in `words`.
pub fn match_in_grid(
    selection: &[GridPosition],
    grid: &Grid,
    words: &BTreeSet<String>,
    found: &BTreeSet<String>,
) -> Option<String> {
    if selection.len() < 2 {
        return None;
    }
    let text = normalize(&grid.word_along(selection)?);
    if words.contains(&text) && !found.contains(&text) {
        return Some(text);
    }
    let reversed: String = text.chars().rev().collect();
    if words.contains(&reversed) && !found.contains(&reversed) {
        return Some(reversed);
    }
    None
}

/// Validate a selection against a puzzle's word set
pub fn validate(
    selection: &[GridPosition],
    puzzle: &Puzzle,
    found: &BTreeSet<String>,
) -> Option<String> {
    match_in_grid(selection, puzzle.grid(), &puzzle.word_set(), found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid4() -> Grid {
        Grid::new(vec![
            vec!['C', 'A', 'T', 'X'],
            vec!['X', 'X', 'X', 'X'],
            vec!['X', 'X', 'X', 'X'],
            vec!['X', 'X', 'X', 'X'],
        ])
    }

    #[test]
    fn test_snapped_direction_octants() {
        let o = GridPosition::new(5, 5);
        assert_eq!(snapped_direction(o, GridPosition::new(5, 9)), Direction::East);
        assert_eq!(snapped_direction(o, GridPosition::new(9, 5)), Direction::South);
        assert_eq!(snapped_direction(o, GridPosition::new(1, 5)), Direction::North);
        assert_eq!(snapped_direction(o, GridPosition::new(5, 1)), Direction::West);
        assert_eq!(snapped_direction(o, GridPosition::new(9, 9)), Direction::SouthEast);
        assert_eq!(snapped_direction(o, GridPosition::new(1, 1)), Direction::NorthWest);
        assert_eq!(snapped_direction(o, GridPosition::new(9, 1)), Direction::SouthWest);
        assert_eq!(snapped_direction(o, GridPosition::new(1, 9)), Direction::NorthEast);
    }

    #[test]
    fn test_snapped_direction_tolerates_off_axis() {
        // One row of drift over a long horizontal drag still snaps east
        let dir = snapped_direction(GridPosition::new(5, 0), GridPosition::new(6, 9));
        assert_eq!(dir, Direction::East);
    }

    #[test]
    fn test_selection_path_drops_overshoot() {
        let grid = grid4();
        // Drag overshoots past the right edge; out-of-bounds steps are dropped
        let path = selection_path(
            GridPosition::new(0, 2),
            GridPosition::new(0, 6),
            Direction::East,
            &grid,
        );
        assert_eq!(path, vec![GridPosition::new(0, 2), GridPosition::new(0, 3)]);
    }

    #[test]
    fn test_strict_path_requires_collinearity() {
        let grid = grid4();
        // Knight-move offset is not one of the 8 directions
        assert!(path(GridPosition::new(0, 0), GridPosition::new(1, 2), &grid).is_none());

        let diag = path(GridPosition::new(0, 0), GridPosition::new(2, 2), &grid).unwrap();
        assert_eq!(
            diag,
            vec![
                GridPosition::new(0, 0),
                GridPosition::new(1, 1),
                GridPosition::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_strict_path_rejects_out_of_bounds() {
        let grid = grid4();
        assert!(path(GridPosition::new(0, 0), GridPosition::new(0, 4), &grid).is_none());
        assert!(path(GridPosition::new(-1, 0), GridPosition::new(2, 0), &grid).is_none());
    }

    #[test]
    fn test_match_forward_and_reversed() {
        let grid = grid4();
        let words: BTreeSet<String> = ["CAT".to_string()].into();
        let none = BTreeSet::new();

        let forward = [
            GridPosition::new(0, 0),
            GridPosition::new(0, 1),
            GridPosition::new(0, 2),
        ];
        assert_eq!(
            match_in_grid(&forward, &grid, &words, &none).as_deref(),
            Some("CAT")
        );

        let backward = [
            GridPosition::new(0, 2),
            GridPosition::new(0, 1),
            GridPosition::new(0, 0),
        ];
        assert_eq!(
            match_in_grid(&backward, &grid, &words, &none).as_deref(),
            Some("CAT")
        );
    }

    #[test]
    fn test_match_excludes_found_words() {
        let grid = grid4();
        let words: BTreeSet<String> = ["CAT".to_string()].into();
        let found: BTreeSet<String> = ["CAT".to_string()].into();

        let forward = [
            GridPosition::new(0, 0),
            GridPosition::new(0, 1),
            GridPosition::new(0, 2),
        ];
        // Neither orientation validates once the word is found
        assert_eq!(match_in_grid(&forward, &grid, &words, &found), None);
        let backward = [
            GridPosition::new(0, 2),
            GridPosition::new(0, 1),
            GridPosition::new(0, 0),
        ];
        assert_eq!(match_in_grid(&backward, &grid, &words, &found), None);
    }

    #[test]
    fn test_match_requires_two_positions() {
        let grid = grid4();
        let words: BTreeSet<String> = ["C".to_string()].into();
        let single = [GridPosition::new(0, 0)];
        assert_eq!(match_in_grid(&single, &grid, &words, &BTreeSet::new()), None);
    }
}
