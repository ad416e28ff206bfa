//! Submission validation and amount summation

use crate::error::{Result, RewardsError};
use crate::pending;
use crate::submission::RewardSubmission;
use beacon_core::traits::{GovernanceToken, ValuePool, Vault};
use beacon_core::types::Amount;

pub struct RewardCalculator;

impl RewardCalculator {
    /// Structural validation: live index, at least one interval closed,
    /// per-network arrays of equal length
    pub fn validate(submission: &RewardSubmission, current_index: u64) -> Result<()> {
        if submission.reward_index != current_index {
            return Err(RewardsError::IndexMismatch {
                submitted: submission.reward_index,
                expected: current_index,
            });
        }
        if submission.intervals_passed == 0 {
            return Err(RewardsError::ZeroIntervalsPassed);
        }
        let bcn = submission.node_bcn.len();
        let trusted_bcn = submission.trusted_node_bcn.len();
        let native = submission.node_native.len();
        if bcn != trusted_bcn || bcn != native {
            return Err(RewardsError::NetworkCountMismatch {
                bcn,
                trusted_bcn,
                native,
            });
        }
        Ok(())
    }

    /// Treasury share plus every node and trusted-node entry
    pub fn total_bcn(submission: &RewardSubmission) -> Result<Amount> {
        let mut total = submission.treasury_bcn;
        for amount in submission
            .node_bcn
            .iter()
            .chain(submission.trusted_node_bcn.iter())
        {
            total = total
                .checked_add(*amount)
                .ok_or(RewardsError::AmountOverflow)?;
        }
        Ok(total)
    }

    pub fn total_native(submission: &RewardSubmission) -> Result<Amount> {
        let mut total: Amount = 0;
        for amount in submission.node_native.iter() {
            total = total
                .checked_add(*amount)
                .ok_or(RewardsError::AmountOverflow)?;
        }
        Ok(total)
    }

    /// Combined BCN payout for one relay network
    pub fn network_bcn(submission: &RewardSubmission, index: usize) -> Result<Amount> {
        submission.node_bcn[index]
            .checked_add(submission.trusted_node_bcn[index])
            .ok_or(RewardsError::AmountOverflow)
    }

    /// Check both asset sums against the currently distributable amounts,
    /// read fresh from the collaborators at call time
    pub fn check_availability<C>(submission: &RewardSubmission, ctx: &C, now: u64) -> Result<()>
    where
        C: Vault + GovernanceToken + ValuePool,
    {
        let total_bcn = Self::total_bcn(submission)?;
        let available_bcn = pending::pending_bcn(ctx, now);
        if total_bcn > available_bcn {
            return Err(RewardsError::InsufficientBcn {
                requested: total_bcn,
                available: available_bcn,
            });
        }

        let total_native = Self::total_native(submission)?;
        let available_native = pending::pending_native(ctx);
        if total_native > available_native {
            return Err(RewardsError::InsufficientNative {
                requested: total_native,
                available: available_native,
            });
        }
        Ok(())
    }
}
