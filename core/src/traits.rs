//! Collaborator interfaces consumed by the rewards subsystem
//!
//! The rewards pool never owns network membership, settings, or funds; it
//! reads and moves them through these traits. Every read is taken fresh at
//! the point of use so validity always reflects live state.

use crate::error::{RelayError, VaultError};
use crate::types::{Address, Amount, Asset};

/// The fixed set of trusted oracles authorized to submit reward snapshots
pub trait TrustedOracleSet {
    fn member_count(&self) -> u64;

    fn is_member(&self, address: &str) -> bool;
}

/// Network-level switches and consensus parameters
pub trait NetworkSettings {
    /// Whether reward submissions are currently accepted
    fn submissions_enabled(&self) -> bool;

    /// Fraction of the trusted set required for consensus,
    /// in parts per [`crate::FRACTION_SCALE`]
    fn consensus_threshold(&self) -> u64;
}

/// Reward accounting parameters
pub trait RewardsSettings {
    /// Duration of one reward interval in seconds
    fn interval_duration(&self) -> u64;

    /// Share of rewards attributed to a named claimer,
    /// in parts per [`crate::FRACTION_SCALE`]; zero if unknown
    fn claimer_percentage(&self, claimer: &str) -> u64;
}

/// Escrow vault holding balances keyed by holder tag and asset
pub trait Vault {
    fn balance_of(&self, holder: &str, asset: Asset) -> Amount;

    /// Move funds between two holder tags inside the vault
    fn transfer(
        &mut self,
        from: &str,
        to: &str,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), VaultError>;

    /// Pay funds out of a holder tag to an external address
    fn withdraw_to(
        &mut self,
        from: &str,
        address: &str,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), VaultError>;
}

/// BCN token inflation mechanics
pub trait GovernanceToken {
    /// Amount the minting policy would release if settled at `now`.
    /// Estimate only; the realized amount is fixed by `settle_inflation`.
    fn pending_inflation(&self, now: u64) -> Amount;

    /// Realize pending inflation: mint into the rewards pool escrow and
    /// return the minted amount
    fn settle_inflation(&mut self, now: u64) -> Amount;
}

/// Pool of incoming native-asset value awaiting distribution
pub trait ValuePool {
    fn balance(&self) -> Amount;

    fn withdraw_to(&mut self, address: &str, amount: Amount) -> Result<(), VaultError>;
}

/// Per-sub-network relay endpoints, resolved by network index
pub trait RelayRegistry {
    /// Registered relay address for a network index, if any
    fn relay_address(&self, network: u64) -> Option<Address>;

    /// Hand a distribution over to the relay for the given network
    fn distribute(
        &mut self,
        network: u64,
        reward_index: u64,
        merkle_root: &str,
        bcn: Amount,
        native: Amount,
    ) -> Result<(), RelayError>;
}

/// Transactional boundary over collaborator state
///
/// Execution stages all fund movement behind a checkpoint; any failing
/// step restores it so no partial effect is ever observable.
pub trait Checkpointed {
    type Snapshot;

    fn checkpoint(&self) -> Self::Snapshot;

    fn restore(&mut self, snapshot: Self::Snapshot);
}
