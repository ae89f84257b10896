//! Core types shared across the application
//! This module contains pure data types with no external dependencies
//! beyond serde (persisted positions are part of the wire contract).

use serde::{Deserialize, Serialize};

/// Grid size clamp applied at every boundary that accepts an external size
pub const MIN_GRID_SIZE: usize = 7;
pub const MAX_GRID_SIZE: usize = 12;

/// Shortest word eligible for placement
pub const MIN_WORD_LEN: usize = 3;

/// Random placement attempts per word before it is skipped
pub const PLACEMENT_ATTEMPTS: u32 = 300;

/// A puzzle with fewer placed words than this triggers the retry ladder
pub const MIN_PLACED_WORDS: usize = 4;

/// Candidate-list reductions tried by the retry ladder (always keeping >= 4)
pub const REDUCTION_STEPS: [usize; 3] = [2, 4, 6];

/// How long correct/incorrect feedback stays visible (seconds)
pub const FEEDBACK_DURATION_SECS: f64 = 0.4;

/// How long a revealed hint stays visible (seconds)
pub const HINT_VISIBLE_SECS: f64 = 15.0;

/// Maximum banked hints
pub const HINT_MAX: u32 = 3;

/// Fixed day length for rotation-boundary math (seconds)
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Safety valve for day-by-day rotation catch-up
pub const ROTATION_CATCHUP_CAP: u64 = 10_000;

/// Sentinel for "never" in day-offset bookkeeping (streak/hints)
pub const DAY_NEVER: i64 = -1;

/// Zero-based day offset from installation, clamped to >= 0 at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(u32);

impl DayKey {
    /// Negative offsets (clock skew around install time) clamp to day zero
    pub fn new(offset: i64) -> Self {
        Self(offset.max(0) as u32)
    }

    pub fn offset(self) -> u32 {
        self.0
    }
}

/// Zero-based (row, col) cell address; signed so direction walks can
/// leave the board and be bounds-checked by the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: i32,
    pub col: i32,
}

impl GridPosition {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position after `steps` unit moves along `direction`
    pub fn stepped(self, direction: Direction, steps: i32) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr * steps,
            col: self.col + dc * steps,
        }
    }
}

/// The 8 straight placement/selection directions.
///
/// Index order matters twice: the placement engine draws directions by
/// index from the seeded stream, and the path finder's tie-break walks
/// them in this order. Rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// (d_row, d_col) unit step
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
        }
    }

    /// Direction whose unit step is (signum(dr), signum(dc)); None for (0, 0)
    pub fn from_deltas(dr: i32, dc: i32) -> Option<Self> {
        let key = (dr.signum(), dc.signum());
        Direction::ALL.iter().copied().find(|d| d.delta() == key)
    }
}

/// Visual feedback category attached to a resolved tap pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Correct,
    Incorrect,
}

/// Clamp an externally supplied grid size into the supported range
pub fn clamp_grid_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}
