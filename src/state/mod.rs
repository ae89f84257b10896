//! State module - the shared puzzle record and its durable bookkeeping
//!
//! - [`shared`]: the canonical cross-process record and its state machine
//! - [`migrate`]: one-time import of prior on-disk schemas
//! - [`progress`]: per-(day, grid size) durable history
//! - [`streak`] / [`hints`]: small day-keyed counters

pub mod hints;
pub mod migrate;
pub mod progress;
pub mod shared;
pub mod streak;

pub use hints::HintState;
pub use progress::AppProgressRecord;
pub use shared::{Feedback, SharedPuzzleState, SharedPuzzleStateMachine};
pub use streak::Streak;
