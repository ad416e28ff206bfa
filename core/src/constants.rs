//! Network-wide constants

/// BCN token unit (8 decimal places)
pub const BCN_UNIT: u64 = 100_000_000;

/// Scale for fixed-point fractions (thresholds, claimer percentages)
///
/// A fraction f is stored as `f * FRACTION_SCALE`, e.g. two thirds as
/// 666_666 parts per million.
pub const FRACTION_SCALE: u64 = 1_000_000;

/// Escrow holder tag for the rewards pool balance
pub const REWARDS_POOL_TAG: &str = "rewards-pool";

/// Escrow holder tag for the network treasury
pub const TREASURY_TAG: &str = "treasury";

/// Default consensus threshold (two thirds of the trusted set)
pub const DEFAULT_CONSENSUS_THRESHOLD: u64 = 666_666;

/// Default reward interval duration (one day)
pub const DEFAULT_INTERVAL_SECS: u64 = 86_400;
