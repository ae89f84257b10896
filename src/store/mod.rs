//! Store module - the persistence seam shared by app and widget
//!
//! The real backing store is an external, crash-safe, per-key blob store
//! reachable from both OS processes. This module only defines the seam:
//! a raw key/value trait the host adapts, plus per-concern repository
//! traits the engine logic talks to. There is no cross-process lock or
//! transaction; see [`crate::state::SharedPuzzleStateMachine`] for the
//! accepted last-writer-wins consequence.

pub mod local;
pub mod memory;

use std::collections::BTreeMap;

use crate::state::hints::HintState;
use crate::state::progress::AppProgressRecord;
use crate::state::shared::SharedPuzzleState;
use crate::state::streak::Streak;

pub use local::LocalStore;
pub use memory::MemoryStore;

/// Raw key-indexed store: opaque string blobs plus scalar convenience
/// types, addressable by stable string keys
pub trait KeyValueStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: &str);
    fn get_f64(&self, key: &str) -> Option<f64>;
    fn set_f64(&mut self, key: &str, value: f64);
    fn get_i64(&self, key: &str) -> Option<i64>;
    fn set_i64(&mut self, key: &str, value: i64);
    fn remove(&mut self, key: &str);
}

/// Stable store keys. These are a cross-process and cross-version wire
/// contract; renaming one requires a migration path.
pub mod keys {
    /// Current-format shared-state blob (JSON)
    pub const STATE: &str = "wordgrid.state.v2";
    pub const ROTATION_BOUNDARY: &str = "wordgrid.rotation.lastBoundary";
    pub const RESET_REQUESTED_AT: &str = "wordgrid.reset.requestedAt";
    pub const RESET_APPLIED_AT: &str = "wordgrid.reset.appliedAt";
    /// Map of "{day}-{size}" -> progress record (JSON)
    pub const PROGRESS_RECORDS: &str = "wordgrid.progress.records";
    pub const STREAK_CURRENT: &str = "wordgrid.streak.current";
    pub const STREAK_LAST_COMPLETED: &str = "wordgrid.streak.lastCompletedDay";
    pub const HINTS_AVAILABLE: &str = "wordgrid.hints.available";
    pub const HINTS_LAST_RECHARGE: &str = "wordgrid.hints.lastRechargeDay";
    pub const HINTS_LAST_REWARD: &str = "wordgrid.hints.lastRewardDay";
    /// Legacy sources, read once during migration then deleted
    pub const LEGACY_SLOTS: [&str; 3] = [
        "wordgrid.slot.0",
        "wordgrid.slot.1",
        "wordgrid.slot.2",
    ];
    pub const LEGACY_SINGLE: &str = "wordgrid.legacy.state";
}

/// Repository for the single canonical shared puzzle record and its
/// rotation/reset bookkeeping
pub trait SharedStateRepository {
    /// Decode the current-format record; decode failures log and read as
    /// absent, never as errors
    fn load_state(&self) -> Option<SharedPuzzleState>;
    fn save_state(&mut self, state: &SharedPuzzleState);
    fn rotation_boundary(&self) -> Option<f64>;
    fn set_rotation_boundary(&mut self, at: f64);
    fn reset_requested_at(&self) -> Option<f64>;
    fn set_reset_requested_at(&mut self, at: f64);
    fn reset_applied_at(&self) -> Option<f64>;
    fn set_reset_applied_at(&mut self, at: f64);
    /// Raw legacy blobs for the migration chain
    fn legacy_slot(&self, index: usize) -> Option<String>;
    fn legacy_single(&self) -> Option<String>;
    fn delete_legacy_records(&mut self);
}

/// Repository for per-(day, grid size) durable progress records
pub trait ProgressRepository {
    fn progress_map(&self) -> BTreeMap<String, AppProgressRecord>;
    fn set_progress_map(&mut self, map: &BTreeMap<String, AppProgressRecord>);
}

/// Repository for streak counters
pub trait StreakRepository {
    fn streak(&self) -> Streak;
    fn set_streak(&mut self, streak: &Streak);
}

/// Repository for hint counters
pub trait HintRepository {
    fn hint_state(&self) -> HintState;
    fn set_hint_state(&mut self, hints: &HintState);
}
