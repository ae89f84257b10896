//! Progress module - durable per-(day, grid size) completion records
//!
//! Many records accumulate over time (history across days and grid-size
//! changes). Lookup is by exact "{day}-{size}" key with a fallback search
//! for "best record for this day" when the preferred size has none.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::state::shared::SharedPuzzleState;
use crate::store::{HintRepository, ProgressRepository, StreakRepository};
use crate::types::{DayKey, GridPosition};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppProgressRecord {
    #[serde(default)]
    pub found_words: BTreeSet<String>,
    #[serde(default)]
    pub solved_positions: BTreeSet<GridPosition>,
    /// Unix epoch seconds
    pub started_at: f64,
    pub updated_at: f64,
    #[serde(default)]
    pub ended_at: Option<f64>,
}

impl AppProgressRecord {
    pub fn started(now: f64) -> Self {
        Self {
            found_words: BTreeSet::new(),
            solved_positions: BTreeSet::new(),
            started_at: now,
            updated_at: now,
            ended_at: None,
        }
    }
}

/// Store key for one (day, grid size) pair
pub fn record_key(day: DayKey, grid_size: usize) -> String {
    format!("{}-{}", day.offset(), grid_size)
}

fn parse_key(key: &str) -> Option<(u32, usize)> {
    let (day, size) = key.split_once('-')?;
    Some((day.parse().ok()?, size.parse().ok()?))
}

/// Exact-key lookup with the best-for-day fallback when the preferred
/// grid size has no record
pub fn record_for(
    map: &BTreeMap<String, AppProgressRecord>,
    day: DayKey,
    preferred_size: usize,
) -> Option<(usize, AppProgressRecord)> {
    if let Some(record) = map.get(&record_key(day, preferred_size)) {
        return Some((preferred_size, record.clone()));
    }
    best_for_day(map, day)
}

/// Best record for a day regardless of grid size. Tie-break: latest
/// activity, then latest end timestamp, then larger grid size.
pub fn best_for_day(
    map: &BTreeMap<String, AppProgressRecord>,
    day: DayKey,
) -> Option<(usize, AppProgressRecord)> {
    let mut best: Option<(usize, &AppProgressRecord)> = None;
    for (key, record) in map {
        let Some((record_day, size)) = parse_key(key) else {
            continue;
        };
        if record_day != day.offset() {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_size, current)) => {
                let lhs = (
                    record.updated_at,
                    record.ended_at.unwrap_or(f64::NEG_INFINITY),
                    size,
                );
                let rhs = (
                    current.updated_at,
                    current.ended_at.unwrap_or(f64::NEG_INFINITY),
                    best_size,
                );
                lhs.partial_cmp(&rhs) == Some(std::cmp::Ordering::Greater)
            }
        };
        if better {
            best = Some((size, record));
        }
    }
    best.map(|(size, record)| (size, record.clone()))
}

/// Mirror a found word into the durable record; on completion, stamp the
/// end time, advance the streak, and reward a hint (each once per day)
pub fn record_found_word<R>(
    repo: &mut R,
    day: DayKey,
    state: &SharedPuzzleState,
    word: &str,
    positions: &[GridPosition],
    now: f64,
) where
    R: ProgressRepository + StreakRepository + HintRepository,
{
    let mut map = repo.progress_map();
    let key = record_key(day, state.grid_size);
    let record = map
        .entry(key)
        .or_insert_with(|| AppProgressRecord::started(now));
    record.found_words.insert(word.to_string());
    record.solved_positions.extend(positions.iter().copied());
    record.updated_at = now;

    if state.is_complete() && record.ended_at.is_none() {
        record.ended_at = Some(now);
        let mut streak = repo.streak();
        streak.record_completion(day);
        repo.set_streak(&streak);
        let mut hints = repo.hint_state();
        hints.reward_completion(day);
        repo.set_hint_state(&hints);
    }

    repo.set_progress_map(&map);
}
