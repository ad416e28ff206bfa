//! Rewards subsystem errors
//!
//! Every variant is a synchronous rejection of one call; no error leaves
//! a partial effect behind.

use beacon_core::error::VaultError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewardsError {
    #[error("Reward submissions are currently disabled")]
    SubmissionsDisabled,

    #[error("This rewards pool instance has been retired")]
    InactivePool,

    #[error("Caller is not a trusted oracle: {0}")]
    NotTrustedOracle(String),

    #[error("Submission targets interval {submitted}, current interval is {expected}")]
    IndexMismatch { submitted: u64, expected: u64 },

    #[error("Submission must close out at least one interval")]
    ZeroIntervalsPassed,

    #[error(
        "Per-network arrays differ in length: bcn {bcn}, trusted bcn {trusted_bcn}, native {native}"
    )]
    NetworkCountMismatch {
        bcn: usize,
        trusted_bcn: usize,
        native: usize,
    },

    #[error("Reward amounts overflow")]
    AmountOverflow,

    #[error("Insufficient BCN in rewards pool: requested {requested}, available {available}")]
    InsufficientBcn { requested: u64, available: u64 },

    #[error("Insufficient native value: requested {requested}, available {available}")]
    InsufficientNative { requested: u64, available: u64 },

    #[error("Oracle {oracle} already voted for this submission")]
    DuplicateSubmission { oracle: String },

    #[error("Consensus not reached: {votes} of {members} trusted oracles")]
    ConsensusNotReached { votes: u64, members: u64 },

    #[error("No relay registered for network {0}")]
    UnknownRelayNetwork(u64),

    #[error("Vault error: {0}")]
    Vault(#[from] VaultError),

    #[error("Relay for network {network} rejected distribution: {reason}")]
    RelayRejected { network: u64, reason: String },
}

pub type Result<T> = std::result::Result<T, RewardsError>;
