//! Hint bookkeeping - daily recharge, spend, completion reward
//!
//! Counters are clamped to [0, HINT_MAX] after every operation; day
//! offsets use -1 as the "never" sentinel.

use serde::{Deserialize, Serialize};

use crate::types::{DayKey, DAY_NEVER, HINT_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintState {
    pub available: u32,
    pub last_recharge_day: i64,
    pub last_reward_day: i64,
}

impl Default for HintState {
    fn default() -> Self {
        Self {
            available: 1,
            last_recharge_day: DAY_NEVER,
            last_reward_day: DAY_NEVER,
        }
    }
}

impl HintState {
    /// One free hint per calendar day, up to the cap
    pub fn recharge(&mut self, day: DayKey) {
        let day = day.offset() as i64;
        if day > self.last_recharge_day {
            self.available = (self.available + 1).min(HINT_MAX);
            self.last_recharge_day = day;
        }
    }

    /// Returns false when no hint is banked
    pub fn spend(&mut self) -> bool {
        if self.available == 0 {
            return false;
        }
        self.available -= 1;
        true
    }

    /// One bonus hint for finishing a day's puzzle, once per day
    pub fn reward_completion(&mut self, day: DayKey) {
        let day = day.offset() as i64;
        if day > self.last_reward_day {
            self.available = (self.available + 1).min(HINT_MAX);
            self.last_reward_day = day;
        }
    }
}
