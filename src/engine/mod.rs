//! Engine module - procedural puzzle generation
//!
//! - [`placement`]: seeded word placement with the retry/fallback ladder
//! - [`factory`]: per-day seed derivation, theme selection, puzzle assembly
//! - [`themes`]: embedded word pools

pub mod factory;
pub mod placement;
pub mod themes;

pub use factory::make_puzzle;
pub use placement::{place_words, PlacementResult};
