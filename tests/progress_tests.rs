//! Progress tests - durable record bookkeeping through the store seam

use wordgrid::state::progress::{record_for, record_found_word, record_key};
use wordgrid::state::shared::SharedPuzzleState;
use wordgrid::store::{HintRepository, LocalStore, MemoryStore, ProgressRepository, StreakRepository};
use wordgrid::types::{DayKey, GridPosition};

fn store() -> LocalStore<MemoryStore> {
    LocalStore::new(MemoryStore::new())
}

/// Minimal one-word state at a given completion stage
fn one_word_state(found: bool) -> SharedPuzzleState {
    let mut state = SharedPuzzleState::fresh(0, 7);
    state.words = vec!["CAT".to_string()];
    state.found_words.clear();
    if found {
        state.found_words.insert("CAT".to_string());
    }
    state
}

fn cat_positions() -> Vec<GridPosition> {
    vec![
        GridPosition::new(0, 0),
        GridPosition::new(0, 1),
        GridPosition::new(0, 2),
    ]
}

#[test]
fn test_first_find_creates_record() {
    let mut repo = store();
    let state = one_word_state(false);

    record_found_word(&mut repo, DayKey::new(3), &state, "CAT", &cat_positions(), 100.0);

    let map = repo.progress_map();
    let record = &map[&record_key(DayKey::new(3), 7)];
    assert!(record.found_words.contains("CAT"));
    assert_eq!(record.solved_positions.len(), 3);
    assert_eq!(record.started_at, 100.0);
    assert_eq!(record.updated_at, 100.0);
    assert_eq!(record.ended_at, None);
    // Incomplete puzzle: no streak or hint side effects
    assert_eq!(repo.streak().current, 0);
    assert_eq!(repo.hint_state().available, 1);
}

#[test]
fn test_completion_stamps_end_streak_and_hint_once() {
    let mut repo = store();
    let state = one_word_state(true);
    let day = DayKey::new(3);

    record_found_word(&mut repo, day, &state, "CAT", &cat_positions(), 100.0);

    let map = repo.progress_map();
    let record = &map[&record_key(day, 7)];
    assert_eq!(record.ended_at, Some(100.0));
    assert_eq!(repo.streak().current, 1);
    assert_eq!(repo.streak().last_completed_day, 3);
    // Default 1 banked hint plus the completion reward
    assert_eq!(repo.hint_state().available, 2);

    // A repeat write on the finished record only bumps activity
    record_found_word(&mut repo, day, &state, "CAT", &cat_positions(), 200.0);
    let map = repo.progress_map();
    let record = &map[&record_key(day, 7)];
    assert_eq!(record.ended_at, Some(100.0));
    assert_eq!(record.updated_at, 200.0);
    assert_eq!(repo.streak().current, 1);
    assert_eq!(repo.hint_state().available, 2);
}

#[test]
fn test_consecutive_days_advance_streak_and_gaps_reset() {
    let mut repo = store();
    let state = one_word_state(true);

    record_found_word(&mut repo, DayKey::new(3), &state, "CAT", &cat_positions(), 100.0);
    record_found_word(&mut repo, DayKey::new(4), &state, "CAT", &cat_positions(), 200.0);
    assert_eq!(repo.streak().current, 2);

    record_found_word(&mut repo, DayKey::new(7), &state, "CAT", &cat_positions(), 300.0);
    assert_eq!(repo.streak().current, 1);
    assert_eq!(repo.streak().last_completed_day, 7);
}

#[test]
fn test_records_accumulate_across_days_and_sizes() {
    let mut repo = store();
    let small = one_word_state(false);
    let mut large = one_word_state(false);
    large.grid_size = 9;

    record_found_word(&mut repo, DayKey::new(3), &small, "CAT", &cat_positions(), 100.0);
    record_found_word(&mut repo, DayKey::new(3), &large, "CAT", &cat_positions(), 150.0);
    record_found_word(&mut repo, DayKey::new(4), &small, "CAT", &cat_positions(), 200.0);

    let map = repo.progress_map();
    assert_eq!(map.len(), 3);

    // Exact-size lookup, then latest-activity fallback for a size with
    // no record of its own
    let (size, _) = record_for(&map, DayKey::new(3), 7).unwrap();
    assert_eq!(size, 7);
    let (size, record) = record_for(&map, DayKey::new(3), 12).unwrap();
    assert_eq!(size, 9);
    assert_eq!(record.updated_at, 150.0);
}
