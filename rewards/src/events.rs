//! Audit events
//!
//! Two events cover the subsystem's externally visible history: one per
//! accepted vote, one per executed snapshot. Events are appended only
//! when the operation that produced them fully commits.

use crate::submission::RewardSubmission;
use beacon_core::types::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RewardsEvent {
    /// An oracle's vote was accepted into the ledger
    VoteRecorded {
        oracle: Address,
        reward_index: u64,
        digest: String,
        submission: RewardSubmission,
        timestamp: u64,
    },
    /// A reward snapshot executed; emitted exactly once per interval
    SnapshotExecuted {
        reward_index: u64,
        submission: RewardSubmission,
        /// Interval boundary before the clock advanced
        interval_start: u64,
        /// Interval boundary after the clock advanced
        interval_end: u64,
        timestamp: u64,
    },
}
