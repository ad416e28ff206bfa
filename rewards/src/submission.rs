//! Reward submission value type

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A complete reward-distribution proposal for one accounting interval
///
/// Submissions are transient: callers construct them, the ledger only
/// keeps their canonical digest and vote count. Two submissions are the
/// same proposal iff every field is equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardSubmission {
    /// Accounting interval this submission targets
    pub reward_index: u64,
    /// Number of intervals this submission closes out (> 0)
    pub intervals_passed: u64,
    /// Opaque digest of the off-network proof structure, handed to relays
    pub merkle_root: String,
    /// BCN to ordinary node operators, one entry per relay network
    pub node_bcn: Vec<u64>,
    /// BCN to trusted node operators, one entry per relay network
    pub trusted_node_bcn: Vec<u64>,
    /// Native value to node operators, one entry per relay network
    pub node_native: Vec<u64>,
    /// BCN routed to the network treasury
    pub treasury_bcn: u64,
}

impl RewardSubmission {
    /// Number of relay networks this submission covers
    pub fn network_count(&self) -> usize {
        self.node_bcn.len()
    }

    /// Canonical content digest; the ledger key for this submission
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();

        hasher.update(self.reward_index.to_le_bytes());
        hasher.update(self.intervals_passed.to_le_bytes());
        hasher.update((self.merkle_root.len() as u64).to_le_bytes());
        hasher.update(self.merkle_root.as_bytes());
        for amounts in [&self.node_bcn, &self.trusted_node_bcn, &self.node_native] {
            hasher.update((amounts.len() as u64).to_le_bytes());
            for amount in amounts.iter() {
                hasher.update(amount.to_le_bytes());
            }
        }
        hasher.update(self.treasury_bcn.to_le_bytes());

        hex::encode(hasher.finalize())
    }
}
