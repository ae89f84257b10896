//! wordgrid - deterministic daily word-search engine
//!
//! Generates a seeded letter grid with hidden words for each day,
//! validates player selections against it, and maintains the single
//! shared puzzle record that the app and the home-screen widget read and
//! mutate through a common persisted store.
//!
//! # Module structure
//!
//! - [`core`]: seeded RNG, word normalization, grid, puzzle, selection
//!   validation, path recovery
//! - [`engine`]: word placement and the per-day puzzle factory
//! - [`state`]: the shared record, its state machine, migration, and
//!   durable progress/streak/hint bookkeeping
//! - [`store`]: the key/value persistence seam shared by both processes
//! - [`types`]: pure shared types and tuning constants

pub mod core;
pub mod engine;
pub mod state;
pub mod store;
pub mod types;
