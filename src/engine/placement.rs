//! Placement module - fit words into a letter grid
//!
//! Longest words go first since they are the hardest to fit. Each word
//! gets a fixed budget of random placement attempts; words may cross
//! wherever their letters agree. A word that exhausts its budget is
//! skipped, and if too few words land at all, the retry ladder re-runs
//! with a shorter candidate list and a deterministically derived seed.
//! Placement never fails: the worst case is a fully random grid with no
//! placed words, which callers treat as a soft degenerate puzzle.

use arrayvec::ArrayVec;

use crate::core::{Grid, SeededRng, Word};
use crate::types::{
    clamp_grid_size, Direction, MIN_PLACED_WORDS, PLACEMENT_ATTEMPTS, REDUCTION_STEPS,
};

/// Mixed into retry seeds so reduced runs get an independent stream
const RETRY_SEED_SALT: u64 = 0x5851_F42D_4C95_7F2D;

const ALPHABET_LEN: u64 = 26;

/// Grid plus the subset of candidates that actually landed
#[derive(Debug, Clone)]
pub struct PlacementResult {
    pub grid: Grid,
    pub placed: Vec<Word>,
}

/// A single seeded run over one candidate list, before letter fill
struct Attempt {
    cells: Vec<Vec<Option<char>>>,
    placed: Vec<Word>,
    rng: SeededRng,
}

/// Place `candidates` into a size x size grid (size clamped like every
/// other external-size boundary), filling leftover cells with random
/// letters; words longer than the clamped size are skipped
pub fn place_words(size: usize, candidates: &[Word], seed: u64) -> PlacementResult {
    let size = clamp_grid_size(size);
    let mut ordered: Vec<Word> = candidates.to_vec();
    // Stable sort keeps equal-length candidates in pool order for
    // reproducibility
    ordered.sort_by_key(|w| std::cmp::Reverse(w.len()));

    let mut best = run_attempt(size, &ordered, seed);

    if best.placed.len() < MIN_PLACED_WORDS {
        for reduction in REDUCTION_STEPS {
            let keep = ladder_keep(ordered.len(), reduction);
            if keep >= ordered.len() {
                continue;
            }
            let reduced = &ordered[..keep];
            let retry_seed = seed ^ reduction as u64 ^ RETRY_SEED_SALT;
            let attempt = run_attempt(size, reduced, retry_seed);

            // "Most words placed" for this list size ends the ladder early
            if attempt.placed.len() >= accept_threshold(reduced.len()) {
                best = attempt;
                break;
            }
            if attempt.placed.len() > best.placed.len() {
                best = attempt;
            }
        }
    }

    finish(best)
}

/// Candidate count kept for a ladder pass; never drops below the
/// minimum word target
fn ladder_keep(candidate_count: usize, reduction: usize) -> usize {
    candidate_count
        .saturating_sub(reduction)
        .max(MIN_PLACED_WORDS)
}

/// Placed-word count that ends the ladder early: all but one of the
/// reduced list, floored at the minimum word target
fn accept_threshold(reduced_count: usize) -> usize {
    MIN_PLACED_WORDS.max(reduced_count.saturating_sub(1))
}

fn run_attempt(size: usize, words: &[Word], seed: u64) -> Attempt {
    let mut rng = SeededRng::new(seed);
    let mut cells: Vec<Vec<Option<char>>> = vec![vec![None; size]; size];
    let mut placed = Vec::new();

    for word in words {
        let letters: Vec<char> = word.text().chars().collect();
        if letters.len() < 2 || letters.len() > size {
            continue;
        }
        if try_place(&mut cells, &mut rng, &letters, size) {
            placed.push(word.clone());
        }
    }

    Attempt { cells, placed, rng }
}

/// Up to PLACEMENT_ATTEMPTS random (direction, start) draws for one word
fn try_place(
    cells: &mut [Vec<Option<char>>],
    rng: &mut SeededRng,
    letters: &[char],
    size: usize,
) -> bool {
    for _ in 0..PLACEMENT_ATTEMPTS {
        let dir = Direction::ALL[rng.int_below(8) as usize];
        let (dr, dc) = dir.delta();
        let row = random_start(rng, size, letters.len(), dr);
        let col = random_start(rng, size, letters.len(), dc);

        let mut path: ArrayVec<(usize, usize), { crate::types::MAX_GRID_SIZE }> = ArrayVec::new();
        let mut fits = true;
        for (i, &letter) in letters.iter().enumerate() {
            let r = (row + dr * i as i32) as usize;
            let c = (col + dc * i as i32) as usize;
            // Start cell choice guarantees bounds; only letter conflicts
            // can reject
            match cells[r][c] {
                None => path.push((r, c)),
                Some(existing) if existing == letter => path.push((r, c)),
                Some(_) => {
                    fits = false;
                    break;
                }
            }
        }
        if !fits {
            continue;
        }

        for (&(r, c), &letter) in path.iter().zip(letters.iter()) {
            cells[r][c] = Some(letter);
        }
        return true;
    }
    false
}

/// Random legal start coordinate along one axis so the whole word stays
/// on-grid when walking `delta`
fn random_start(rng: &mut SeededRng, size: usize, len: usize, delta: i32) -> i32 {
    let span = len as i32 - 1;
    let size = size as i32;
    let (lo, hi) = match delta {
        1 => (0, size - 1 - span),
        -1 => (span, size - 1),
        _ => (0, size - 1),
    };
    lo + rng.int_below((hi - lo + 1) as u64) as i32
}

/// Fill leftover cells from the same stream and freeze the grid
fn finish(attempt: Attempt) -> PlacementResult {
    let Attempt {
        cells,
        placed,
        mut rng,
    } = attempt;

    let rows = cells
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| {
                    cell.unwrap_or_else(|| (b'A' + rng.int_below(ALPHABET_LEN) as u8) as char)
                })
                .collect()
        })
        .collect();

    PlacementResult {
        grid: Grid::new(rows),
        placed,
    }
}
