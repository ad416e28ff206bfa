//! Submission vote ledger
//!
//! Persists vote counts per distinct submission content and "already
//! voted" flags per (oracle, content) and per (oracle, interval). The
//! duplicate check and the count increment happen under one `&mut self`
//! borrow, so no two callers can both observe "not yet voted" for the
//! same pair.

use crate::error::{Result, RewardsError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionLedger {
    /// Submission digest -> vote count. Counts for stale indices are kept;
    /// validation pins submissions to the live index, so they become
    /// permanently unreachable instead of being reset.
    vote_counts: HashMap<String, u64>,
    /// Write-once (oracle, digest) pairs
    voted: HashSet<(String, String)>,
    /// (oracle, reward index) participation flags. Written on every vote,
    /// surfaced for reporting, never read back to block a second,
    /// different submission in the same interval.
    interval_voted: HashSet<(String, u64)>,
}

impl SubmissionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_voted(&self, oracle: &str, digest: &str) -> bool {
        self.voted
            .contains(&(oracle.to_string(), digest.to_string()))
    }

    pub fn has_voted_in_interval(&self, oracle: &str, reward_index: u64) -> bool {
        self.interval_voted
            .contains(&(oracle.to_string(), reward_index))
    }

    pub fn vote_count(&self, digest: &str) -> u64 {
        self.vote_counts.get(digest).copied().unwrap_or(0)
    }

    /// Record one vote; returns the new count for this content
    pub fn record_vote(&mut self, oracle: &str, digest: &str, reward_index: u64) -> Result<u64> {
        if !self
            .voted
            .insert((oracle.to_string(), digest.to_string()))
        {
            return Err(RewardsError::DuplicateSubmission {
                oracle: oracle.to_string(),
            });
        }
        self.interval_voted.insert((oracle.to_string(), reward_index));

        let count = self.vote_counts.entry(digest.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }
}
