//! Streak bookkeeping - consecutive completed days
//!
//! `last_completed_day` uses -1 as the "never" sentinel; the counter
//! never goes negative.

use serde::{Deserialize, Serialize};

use crate::types::{DayKey, DAY_NEVER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    pub current: u32,
    pub last_completed_day: i64,
}

impl Default for Streak {
    fn default() -> Self {
        Self {
            current: 0,
            last_completed_day: DAY_NEVER,
        }
    }
}

impl Streak {
    /// Record a completed day. Consecutive days extend the streak, a gap
    /// restarts it at 1, repeats and out-of-order days are ignored.
    pub fn record_completion(&mut self, day: DayKey) {
        let day = day.offset() as i64;
        if day <= self.last_completed_day {
            return;
        }
        if self.last_completed_day != DAY_NEVER && day == self.last_completed_day + 1 {
            self.current += 1;
        } else {
            self.current = 1;
        }
        self.last_completed_day = day;
    }
}
