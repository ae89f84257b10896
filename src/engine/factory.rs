//! Factory module - derive the day's puzzle deterministically
//!
//! The seed derivation and salts below are a contract with persisted
//! player progress: the same (day, grid size) must reproduce the same
//! grid on every process and every version.

use crate::core::{normalize, Puzzle, SeededRng, Word};
use crate::engine::placement;
use crate::engine::themes::{SAFE_WORDS, THEMES};
use crate::types::{clamp_grid_size, DayKey, MIN_GRID_SIZE, MIN_WORD_LEN};

/// splitmix64 finalization constants, fixed forever
const SEED_MIX_A: u64 = 0x9E37_79B9_7F4A_7C15;
const SEED_MIX_B: u64 = 0xBF58_476D_1CE4_E5B9;
const SEED_MIX_C: u64 = 0x94D0_49BB_1331_11EB;

/// Salt separating the word-selection stream from the grid-fill stream
const WORD_STREAM_SALT: u64 = 0xA076_1D64_78BD_642F;

pub fn theme_count() -> usize {
    THEMES.len()
}

/// Per-(day, grid size) seed; fixed bit mix, part of the persisted contract
pub fn derive_seed(day: DayKey, grid_size: usize) -> u64 {
    let mut z = (day.offset() as u64)
        .wrapping_add((grid_size as u64) << 32)
        .wrapping_add(SEED_MIX_A);
    z = (z ^ (z >> 30)).wrapping_mul(SEED_MIX_B);
    z = (z ^ (z >> 27)).wrapping_mul(SEED_MIX_C);
    z ^ (z >> 31)
}

/// How many words a grid of this size should carry
pub fn target_word_count(grid_size: usize) -> usize {
    (5 + grid_size.saturating_sub(MIN_GRID_SIZE)).clamp(5, 10)
}

/// Theme index for a day, wrapping over the available pools
pub fn theme_index(day: DayKey) -> usize {
    day.offset() as usize % THEMES.len()
}

/// Build the immutable puzzle for a day at a grid size (clamped)
pub fn make_puzzle(day: DayKey, grid_size: usize) -> Puzzle {
    let size = clamp_grid_size(grid_size);
    let seed = derive_seed(day, size);
    let theme = theme_index(day);

    let candidates = candidate_words(THEMES[theme].words, size);
    let selection = select_words(candidates, size, seed);

    let result = placement::place_words(size, &selection, seed);
    Puzzle::new(theme as u32 + 1, day, result.grid, result.placed)
}

/// Normalize and length-filter a pool, deduping on normalized identity;
/// falls back to the safe list if the filter empties the pool
fn candidate_words(pool: &[&str], size: usize) -> Vec<Word> {
    let filtered = filter_pool(pool, size);
    if !filtered.is_empty() {
        return filtered;
    }
    filter_pool(SAFE_WORDS, size)
}

fn filter_pool(pool: &[&str], size: usize) -> Vec<Word> {
    let mut seen = std::collections::BTreeSet::new();
    pool.iter()
        .map(|raw| Word::new(raw))
        .filter(|word| (MIN_WORD_LEN..=size).contains(&word.len()))
        .filter(|word| seen.insert(normalize(word.text())))
        .collect()
}

/// Seeded shuffle (salted stream) then a target-count prefix
fn select_words(mut candidates: Vec<Word>, size: usize, seed: u64) -> Vec<Word> {
    let mut rng = SeededRng::new(seed ^ WORD_STREAM_SALT);
    rng.shuffle(&mut candidates);
    candidates.truncate(target_word_count(size));
    candidates
}
