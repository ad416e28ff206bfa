//! Currently distributable reward amounts
//!
//! Read-only estimates taken fresh from the collaborators at every call.
//! The BCN figure includes inflation that has accrued but not yet been
//! settled; the realized mint at execution time may differ if time has
//! passed, which is accepted rather than corrected.

use beacon_core::traits::{GovernanceToken, ValuePool, Vault};
use beacon_core::types::{Amount, Asset};
use beacon_core::REWARDS_POOL_TAG;

/// Escrowed BCN plus the amount a settlement at `now` would mint
pub fn pending_bcn<C>(ctx: &C, now: u64) -> Amount
where
    C: Vault + GovernanceToken,
{
    ctx.balance_of(REWARDS_POOL_TAG, Asset::Bcn)
        .saturating_add(ctx.pending_inflation(now))
}

/// Current balance of the native value pool
pub fn pending_native<C: ValuePool>(ctx: &C) -> Amount {
    ctx.balance()
}
