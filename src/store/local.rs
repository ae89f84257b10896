//! Local store adapter - typed repositories over the raw key/value seam
//!
//! Blobs are JSON strings; scalar counters use the store's native
//! integer/double slots. Decode failures are logged and read as absent
//! so every caller falls back to a synthesized default, never an error.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::state::hints::HintState;
use crate::state::progress::AppProgressRecord;
use crate::state::shared::SharedPuzzleState;
use crate::state::streak::Streak;
use crate::store::{
    keys, HintRepository, KeyValueStore, ProgressRepository, SharedStateRepository,
    StreakRepository,
};
use crate::types::DAY_NEVER;

pub struct LocalStore<S: KeyValueStore> {
    inner: S,
}

impl<S: KeyValueStore> LocalStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    fn decode<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let json = self.inner.get_string(key)?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(err) => {
                eprintln!("[store] failed to decode {}: {}", key, err);
                None
            }
        }
    }

    fn encode_into<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.inner.set_string(key, &json),
            Err(err) => eprintln!("[store] failed to encode {}: {}", key, err),
        }
    }
}

impl<S: KeyValueStore> SharedStateRepository for LocalStore<S> {
    fn load_state(&self) -> Option<SharedPuzzleState> {
        self.decode(keys::STATE)
    }

    fn save_state(&mut self, state: &SharedPuzzleState) {
        self.encode_into(keys::STATE, state);
    }

    fn rotation_boundary(&self) -> Option<f64> {
        self.inner.get_f64(keys::ROTATION_BOUNDARY)
    }

    fn set_rotation_boundary(&mut self, at: f64) {
        self.inner.set_f64(keys::ROTATION_BOUNDARY, at);
    }

    fn reset_requested_at(&self) -> Option<f64> {
        self.inner.get_f64(keys::RESET_REQUESTED_AT)
    }

    fn set_reset_requested_at(&mut self, at: f64) {
        self.inner.set_f64(keys::RESET_REQUESTED_AT, at);
    }

    fn reset_applied_at(&self) -> Option<f64> {
        self.inner.get_f64(keys::RESET_APPLIED_AT)
    }

    fn set_reset_applied_at(&mut self, at: f64) {
        self.inner.set_f64(keys::RESET_APPLIED_AT, at);
    }

    fn legacy_slot(&self, index: usize) -> Option<String> {
        let key = keys::LEGACY_SLOTS.get(index)?;
        self.inner.get_string(key)
    }

    fn legacy_single(&self) -> Option<String> {
        self.inner.get_string(keys::LEGACY_SINGLE)
    }

    fn delete_legacy_records(&mut self) {
        for key in keys::LEGACY_SLOTS {
            self.inner.remove(key);
        }
        self.inner.remove(keys::LEGACY_SINGLE);
    }
}

impl<S: KeyValueStore> ProgressRepository for LocalStore<S> {
    fn progress_map(&self) -> BTreeMap<String, AppProgressRecord> {
        self.decode(keys::PROGRESS_RECORDS).unwrap_or_default()
    }

    fn set_progress_map(&mut self, map: &BTreeMap<String, AppProgressRecord>) {
        self.encode_into(keys::PROGRESS_RECORDS, map);
    }
}

impl<S: KeyValueStore> StreakRepository for LocalStore<S> {
    fn streak(&self) -> Streak {
        Streak {
            current: self
                .inner
                .get_i64(keys::STREAK_CURRENT)
                .unwrap_or(0)
                .max(0) as u32,
            last_completed_day: self
                .inner
                .get_i64(keys::STREAK_LAST_COMPLETED)
                .unwrap_or(DAY_NEVER),
        }
    }

    fn set_streak(&mut self, streak: &Streak) {
        self.inner
            .set_i64(keys::STREAK_CURRENT, streak.current as i64);
        self.inner
            .set_i64(keys::STREAK_LAST_COMPLETED, streak.last_completed_day);
    }
}

impl<S: KeyValueStore> HintRepository for LocalStore<S> {
    fn hint_state(&self) -> HintState {
        match self.inner.get_i64(keys::HINTS_AVAILABLE) {
            None => HintState::default(),
            Some(available) => HintState {
                available: available.max(0) as u32,
                last_recharge_day: self
                    .inner
                    .get_i64(keys::HINTS_LAST_RECHARGE)
                    .unwrap_or(DAY_NEVER),
                last_reward_day: self
                    .inner
                    .get_i64(keys::HINTS_LAST_REWARD)
                    .unwrap_or(DAY_NEVER),
            },
        }
    }

    fn set_hint_state(&mut self, hints: &HintState) {
        self.inner
            .set_i64(keys::HINTS_AVAILABLE, hints.available as i64);
        self.inner
            .set_i64(keys::HINTS_LAST_RECHARGE, hints.last_recharge_day);
        self.inner
            .set_i64(keys::HINTS_LAST_REWARD, hints.last_reward_day);
    }
}
