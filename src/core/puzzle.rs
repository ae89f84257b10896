//! Puzzle module - the immutable generated puzzle value
//!
//! Created once by the factory for a (day, grid size) pair and never
//! mutated; play-time progress lives in the shared state record instead.

use std::collections::BTreeSet;

use crate::core::word::Word;
use crate::core::Grid;
use crate::types::DayKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    number: u32,
    day: DayKey,
    grid: Grid,
    words: Vec<Word>,
}

impl Puzzle {
    pub fn new(number: u32, day: DayKey, grid: Grid, words: Vec<Word>) -> Self {
        Self {
            number,
            day,
            grid,
            words,
        }
    }

    /// Display number (theme index + 1)
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn day(&self) -> DayKey {
        self.day
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Set of normalized word texts, the match target for validation
    pub fn word_set(&self) -> BTreeSet<String> {
        self.words.iter().map(|w| w.text().to_string()).collect()
    }
}
