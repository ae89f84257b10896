//! Shared state module - the canonical puzzle record and its state machine
//!
//! One record, one store key, two writers: the app and the home-screen
//! widget run in separate OS processes and both call `load`/`save` against
//! the same backing store with no lock or compare-and-swap. The discipline
//! is "load snapshot, compute pure next snapshot, save snapshot", which
//! keeps the race window small but does not close it: when both processes
//! write concurrently the later save silently wins. That last-writer-wins
//! outcome is an accepted property of the design (single user, low-stakes
//! state, infrequent writes) - do not add locking here.
//!
//! Timers are lazy. Feedback and hint expiries are timestamps compared
//! against a caller-supplied "now" on the next call; nothing here
//! schedules background work.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::{normalize, pathfinder, selection};
use crate::core::Grid;
use crate::engine::factory;
use crate::state::hints::HintState;
use crate::state::migrate;
use crate::store::SharedStateRepository;
use crate::types::{
    clamp_grid_size, DayKey, FeedbackKind, GridPosition, FEEDBACK_DURATION_SECS,
    HINT_VISIBLE_SECS, ROTATION_CATCHUP_CAP, SECONDS_PER_DAY,
};

/// Timed visual feedback for a resolved tap pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub kind: FeedbackKind,
    pub positions: Vec<GridPosition>,
    /// Unix epoch seconds
    pub expires_at: f64,
}

/// The single shared puzzle record, persisted as one JSON blob.
/// Field names are the cross-process wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedPuzzleState {
    pub grid: Grid,
    /// Normalized word texts in puzzle order
    pub words: Vec<String>,
    pub grid_size: usize,
    /// First tap of an in-progress two-tap selection
    #[serde(default)]
    pub anchor: Option<GridPosition>,
    #[serde(default)]
    pub found_words: BTreeSet<String>,
    #[serde(default)]
    pub solved_positions: BTreeSet<GridPosition>,
    /// Theme/day index; advances on rotation, wraps modulo theme count
    /// only when picking content
    pub puzzle_index: u64,
    #[serde(default)]
    pub is_help_visible: bool,
    #[serde(default)]
    pub feedback: Option<Feedback>,
    /// Word whose found-effect is deferred until feedback expiry
    /// (populated by the widget path, not by `apply_tap`)
    #[serde(default)]
    pub pending_word: Option<String>,
    #[serde(default)]
    pub pending_solved_positions: Vec<GridPosition>,
    #[serde(default)]
    pub next_hint_word: Option<String>,
    #[serde(default)]
    pub hint_expires_at: Option<f64>,
}

impl SharedPuzzleState {
    /// Generate a brand-new record for a puzzle index at a grid size
    pub fn fresh(puzzle_index: u64, grid_size: usize) -> Self {
        let size = clamp_grid_size(grid_size);
        let puzzle = factory::make_puzzle(DayKey::new(puzzle_index as i64), size);
        Self {
            grid: puzzle.grid().clone(),
            words: puzzle.words().iter().map(|w| w.text().to_string()).collect(),
            grid_size: size,
            anchor: None,
            found_words: BTreeSet::new(),
            solved_positions: BTreeSet::new(),
            puzzle_index,
            is_help_visible: false,
            feedback: None,
            pending_word: None,
            pending_solved_positions: Vec::new(),
            next_hint_word: None,
            hint_expires_at: None,
        }
    }

    pub fn word_set(&self) -> BTreeSet<String> {
        self.words.iter().cloned().collect()
    }

    pub fn is_complete(&self) -> bool {
        !self.words.is_empty() && self.words.iter().all(|w| self.found_words.contains(w))
    }

    /// Commit a found word and its cells, then drop any hint that
    /// pointed at it
    fn commit_find(&mut self, word: String, positions: &[GridPosition]) {
        self.solved_positions.extend(positions.iter().copied());
        self.found_words.insert(word);
        if let Some(hint) = &self.next_hint_word {
            if self.found_words.contains(hint) {
                self.next_hint_word = None;
                self.hint_expires_at = None;
            }
        }
    }

    fn clear_pending(&mut self) {
        self.pending_word = None;
        self.pending_solved_positions.clear();
    }
}

/// Most recent wall-clock instant at `minutes` past midnight that is <= now
pub(crate) fn rotation_boundary(now: f64, minutes_from_midnight: u32) -> f64 {
    let offset = minutes_from_midnight as f64 * 60.0;
    ((now - offset) / SECONDS_PER_DAY).floor() * SECONDS_PER_DAY + offset
}

/// State machine over the shared record. Owns all mutation; callers get
/// snapshots from `load` and hand mutated snapshots back to `save`.
pub struct SharedPuzzleStateMachine<R: SharedStateRepository> {
    repo: R,
    rotation_minutes: u32,
    on_change: Option<Box<dyn Fn(&SharedPuzzleState)>>,
}

impl<R: SharedStateRepository> SharedPuzzleStateMachine<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            rotation_minutes: 0,
            on_change: None,
        }
    }

    /// Daily refresh instant, minutes past midnight
    pub fn with_rotation_minutes(mut self, minutes: u32) -> Self {
        self.rotation_minutes = minutes;
        self
    }

    /// External change notification invoked after every save
    /// (the app uses it to poke the widget timeline)
    pub fn set_change_listener(&mut self, listener: Box<dyn Fn(&SharedPuzzleState)>) {
        self.on_change = Some(listener);
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn repo_mut(&mut self) -> &mut R {
        &mut self.repo
    }

    /// Load the up-to-date state: run one-time migration, normalize grid
    /// size, apply any external reset, roll the day forward, and resolve
    /// expired timers. Persists only when something changed.
    pub fn load(&mut self, now: f64, preferred_grid_size: usize) -> SharedPuzzleState {
        if self.repo.load_state().is_none() {
            if let Some(migrated) = migrate::run(&mut self.repo) {
                self.repo.save_state(&migrated);
            }
        }

        let decoded = self.repo.load_state();
        let size = clamp_grid_size(preferred_grid_size);
        let mut state = decoded
            .clone()
            .unwrap_or_else(|| SharedPuzzleState::fresh(0, size));

        // Can't resize in place: a stored record at another size is
        // rebuilt from scratch, discarding its progress
        if state.grid_size != size
            || state.grid.row_count() != size
            || state.grid.col_count() != size
        {
            state = SharedPuzzleState::fresh(state.puzzle_index, size);
        }

        self.apply_reset_token(&mut state, size);
        self.apply_rotation(&mut state, now, size);
        self.resolve_expired_feedback(&mut state, now);

        if decoded.as_ref() != Some(&state) {
            self.save(&state);
        }
        state
    }

    /// Serialize and write the full state blob, then notify
    pub fn save(&mut self, state: &SharedPuzzleState) {
        self.repo.save_state(state);
        if let Some(listener) = &self.on_change {
            listener(state);
        }
    }

    /// Ask both processes to discard progress on their next load
    pub fn request_reset(&mut self, now: f64) {
        self.repo.set_reset_requested_at(now);
    }

    /// Monotonic reset token: a requested-at newer than the last applied
    /// value clears progress exactly once across both processes
    fn apply_reset_token(&mut self, state: &mut SharedPuzzleState, size: usize) {
        let Some(requested) = self.repo.reset_requested_at() else {
            return;
        };
        let applied = self.repo.reset_applied_at().unwrap_or(0.0);
        if requested > applied {
            *state = SharedPuzzleState::fresh(state.puzzle_index, size);
            self.repo.set_reset_applied_at(requested);
        }
    }

    /// Advance the puzzle index by the number of daily boundaries crossed
    /// since the stored boundary, regenerating the puzzle. A new day
    /// always discards in-progress state.
    fn apply_rotation(&mut self, state: &mut SharedPuzzleState, now: f64, size: usize) {
        let current = rotation_boundary(now, self.rotation_minutes);
        match self.repo.rotation_boundary() {
            None => self.repo.set_rotation_boundary(current),
            Some(stored) if stored < current => {
                let mut crossed: u64 = 0;
                let mut at = stored;
                // Day-by-day walk with a finite safety valve
                while at + SECONDS_PER_DAY <= current && crossed < ROTATION_CATCHUP_CAP {
                    at += SECONDS_PER_DAY;
                    crossed += 1;
                }
                if crossed > 0 {
                    *state = SharedPuzzleState::fresh(state.puzzle_index + crossed, size);
                }
                self.repo.set_rotation_boundary(current);
            }
            Some(_) => {}
        }
    }

    /// Tap state machine: anchor, cancel, or resolve a two-tap pair
    pub fn apply_tap(&self, state: &mut SharedPuzzleState, row: i32, col: i32, now: f64) {
        self.resolve_expired_feedback(state, now);

        let pos = GridPosition::new(row, col);
        if !state.grid.contains(pos) || state.is_complete() {
            return;
        }

        match state.anchor {
            None => {
                state.anchor = Some(pos);
                state.feedback = None;
                state.clear_pending();
            }
            Some(anchor) if anchor == pos => {
                // Tapping the anchor again cancels the selection silently
                state.anchor = None;
            }
            Some(anchor) => {
                self.resolve_pair(state, anchor, pos, now);
                state.anchor = None;
            }
        }
    }

    fn resolve_pair(&self, state: &mut SharedPuzzleState, anchor: GridPosition, pos: GridPosition, now: f64) {
        let strict = selection::path(anchor, pos, &state.grid);
        let matched = strict.as_ref().and_then(|path| {
            selection::match_in_grid(path, &state.grid, &state.word_set(), &state.found_words)
        });

        match (matched, strict) {
            (Some(word), Some(path)) => {
                // The app path commits immediately; feedback is purely
                // visual here, so pending fields stay cleared
                state.commit_find(word, &path);
                state.feedback = Some(Feedback {
                    kind: FeedbackKind::Correct,
                    positions: path,
                    expires_at: now + FEEDBACK_DURATION_SECS,
                });
                state.clear_pending();
            }
            (_, strict) => {
                let preview = strict.unwrap_or_else(|| vec![anchor, pos]);
                state.feedback = Some(Feedback {
                    kind: FeedbackKind::Incorrect,
                    positions: preview,
                    expires_at: now + FEEDBACK_DURATION_SECS,
                });
            }
        }
    }

    /// Widget path: record a find whose state change is deferred until
    /// the feedback window elapses, instead of committing immediately
    pub fn stage_found_word(&self, state: &mut SharedPuzzleState, word: &str, now: f64) -> bool {
        let word = normalize(word);
        if !state.word_set().contains(&word) || state.found_words.contains(&word) {
            return false;
        }
        let Some(path) = pathfinder::find_path(&word, &state.grid, &state.solved_positions) else {
            return false;
        };
        state.feedback = Some(Feedback {
            kind: FeedbackKind::Correct,
            positions: path.clone(),
            expires_at: now + FEEDBACK_DURATION_SECS,
        });
        state.pending_word = Some(word);
        state.pending_solved_positions = path;
        true
    }

    /// Lazily expire feedback and hint timers. An expired correct
    /// feedback first commits any pending word (the deferred widget
    /// path); the two expirations are independent.
    pub fn resolve_expired_feedback(&self, state: &mut SharedPuzzleState, now: f64) {
        if let Some(feedback) = &state.feedback {
            if feedback.expires_at <= now {
                if feedback.kind == FeedbackKind::Correct {
                    if let Some(word) = state.pending_word.take() {
                        let positions = std::mem::take(&mut state.pending_solved_positions);
                        state.commit_find(word, &positions);
                    }
                }
                state.feedback = None;
                state.clear_pending();
            }
        }

        if let Some(expires) = state.hint_expires_at {
            if expires <= now {
                state.next_hint_word = None;
                state.hint_expires_at = None;
            }
        }
    }

    /// Spend a hint and point the record at the first unfound word
    pub fn take_hint(
        &self,
        state: &mut SharedPuzzleState,
        hints: &mut HintState,
        now: f64,
    ) -> Option<String> {
        let target = state
            .words
            .iter()
            .find(|w| !state.found_words.contains(*w))
            .cloned()?;
        if !hints.spend() {
            return None;
        }
        state.next_hint_word = Some(target.clone());
        state.hint_expires_at = Some(now + HINT_VISIBLE_SECS);
        Some(target)
    }

    pub fn set_help_visible(&self, state: &mut SharedPuzzleState, visible: bool) {
        state.is_help_visible = visible;
    }
}
