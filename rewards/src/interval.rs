//! Reward interval clock

use serde::{Deserialize, Serialize};

/// Tracks the current reward interval index and its start time
///
/// Advanced only by the payout executor, once per executed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalClock {
    reward_index: u64,
    interval_start: u64,
}

impl IntervalClock {
    pub fn new(interval_start: u64) -> Self {
        Self {
            reward_index: 0,
            interval_start,
        }
    }

    /// Index the next valid submission must target
    pub fn current_index(&self) -> u64 {
        self.reward_index
    }

    /// Unix time at which the current interval started
    pub fn interval_start(&self) -> u64 {
        self.interval_start
    }

    /// Whole intervals elapsed since the current interval started.
    /// Informational only; does not gate submission validity.
    pub fn intervals_elapsed(&self, now: u64, interval_duration: u64) -> u64 {
        if interval_duration == 0 || now <= self.interval_start {
            return 0;
        }
        (now - self.interval_start) / interval_duration
    }

    /// Close out `intervals_passed` intervals as a single accounting event:
    /// the start time moves by the full span, the index by exactly 1.
    pub(crate) fn advance(&mut self, intervals_passed: u64, interval_duration: u64) {
        self.interval_start += intervals_passed * interval_duration;
        self.reward_index += 1;
    }
}
