//! Beacon Network reward snapshots
//!
//! Quorum-based reward accounting and payout. Trusted oracles compute
//! reward distributions off-network and submit identical snapshots; once
//! a configured fraction of the trusted set has submitted the same
//! content, the snapshot executes exactly once: pending BCN inflation is
//! settled, the accounting interval advances, and treasury and per-relay
//! payouts are dispatched atomically.

pub mod calculator;
pub mod consensus;
pub mod error;
pub mod events;
pub mod executor;
pub mod interval;
pub mod ledger;
pub mod pending;
pub mod submission;

pub use calculator::RewardCalculator;
pub use consensus::{has_consensus, required_votes};
pub use error::{Result, RewardsError};
pub use events::RewardsEvent;
pub use executor::{Collaborators, ExecutedSnapshot, RewardsPool, SubmitOutcome};
pub use interval::IntervalClock;
pub use ledger::SubmissionLedger;
pub use pending::{pending_bcn, pending_native};
pub use submission::RewardSubmission;
