//! Core module - pure engine logic with no I/O dependencies
//!
//! Everything here is deterministic and synchronous: the seeded bit
//! stream, word normalization, the letter grid, the immutable puzzle
//! value, selection validation, and path recovery.

pub mod grid;
pub mod pathfinder;
pub mod puzzle;
pub mod rng;
pub mod selection;
pub mod word;

// Re-export commonly used types
pub use grid::Grid;
pub use puzzle::Puzzle;
pub use rng::SeededRng;
pub use word::{normalize, Word};
