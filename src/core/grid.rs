//! Grid module - the letter board
//!
//! A rectangular sequence of rows of single letters. The grid itself only
//! guarantees rectangularity; squareness is enforced by the callers that
//! build puzzles. All cell access is bounds-checked.
//!
//! Serialized form is arrays of one-letter strings - this is the persisted
//! wire shape shared with the widget process and must not change.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use crate::types::GridPosition;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build from rows of letters. Callers are expected to pass
    /// rectangular data; see [`Grid::is_rectangular`].
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Build from rows of single-letter strings (untrusted persisted data).
    /// Returns None if any cell is not exactly one letter.
    pub fn from_letters(rows: &[Vec<String>]) -> Option<Self> {
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let mut letters = Vec::with_capacity(row.len());
            for cell in row {
                let mut chars = cell.chars();
                let letter = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                letters.push(letter);
            }
            out.push(letters);
        }
        Some(Self { rows: out })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// max(rows, cols) - callers keep the grid square, so normally both
    pub fn size(&self) -> usize {
        self.row_count().max(self.col_count())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_rectangular(&self) -> bool {
        let cols = self.col_count();
        self.rows.iter().all(|row| row.len() == cols)
    }

    pub fn is_square(&self) -> bool {
        self.is_rectangular() && self.row_count() == self.col_count()
    }

    pub fn contains(&self, pos: GridPosition) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.row_count()
            && (pos.col as usize) < self.col_count()
    }

    /// Letter at a position, None when out of bounds
    pub fn letter(&self, pos: GridPosition) -> Option<char> {
        if !self.contains(pos) {
            return None;
        }
        Some(self.rows[pos.row as usize][pos.col as usize])
    }

    /// Concatenate the letters along a position sequence.
    /// Fails if any position is out of bounds.
    pub fn word_along(&self, positions: &[GridPosition]) -> Option<String> {
        let mut text = String::with_capacity(positions.len());
        for &pos in positions {
            text.push(self.letter(pos)?);
        }
        Some(text)
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            seq.serialize_element(&cells)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V;
        impl<'de> Visitor<'de> for V {
            type Value = Grid;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "an array of rows of one-letter strings")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut rows: Vec<Vec<String>> = Vec::new();
                while let Some(row) = seq.next_element::<Vec<String>>()? {
                    rows.push(row);
                }
                Grid::from_letters(&rows)
                    .ok_or_else(|| de::Error::custom("grid cell is not a single letter"))
            }
        }

        deserializer.deserialize_seq(V)
    }
}
