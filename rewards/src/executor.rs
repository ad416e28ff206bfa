//! Payout executor
//!
//! `RewardsPool` owns the interval clock, the vote ledger, and the audit
//! log. Oracles drive it through `submit`; anyone may drive `execute`
//! once consensus already exists, decoupling voting from finalization.
//! Every mutating call either fully commits or leaves no trace: fund
//! movement is staged behind a collaborator checkpoint, and a failed
//! execution inside `submit` rolls the triggering vote back too.

use crate::calculator::RewardCalculator;
use crate::consensus;
use crate::error::{Result, RewardsError};
use crate::events::RewardsEvent;
use crate::interval::IntervalClock;
use crate::ledger::SubmissionLedger;
use crate::pending;
use crate::submission::RewardSubmission;
use beacon_core::traits::{
    Checkpointed, GovernanceToken, NetworkSettings, RelayRegistry, RewardsSettings,
    TrustedOracleSet, ValuePool, Vault,
};
use beacon_core::types::{Address, Amount, Asset};
use beacon_core::{REWARDS_POOL_TAG, TREASURY_TAG};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// The full set of collaborators a rewards operation runs against
pub trait Collaborators:
    TrustedOracleSet
    + NetworkSettings
    + RewardsSettings
    + Vault
    + GovernanceToken
    + ValuePool
    + RelayRegistry
    + Checkpointed
{
}

impl<T> Collaborators for T where
    T: TrustedOracleSet
        + NetworkSettings
        + RewardsSettings
        + Vault
        + GovernanceToken
        + ValuePool
        + RelayRegistry
        + Checkpointed
{
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    /// Vote count for this content after the submission
    pub votes: u64,
    /// Whether the submission tipped consensus and executed the snapshot
    pub executed: bool,
}

/// Summary of one executed reward snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutedSnapshot {
    pub reward_index: u64,
    /// BCN realized by settling inflation during this execution
    pub minted: Amount,
    pub total_bcn: Amount,
    pub total_native: Amount,
    pub interval_start: u64,
    pub interval_end: u64,
}

struct RelayPayout {
    network: u64,
    address: Address,
    bcn: Amount,
    native: Amount,
}

struct PayoutPlan {
    total_bcn: Amount,
    total_native: Amount,
    relays: Vec<RelayPayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardsPool {
    clock: IntervalClock,
    ledger: SubmissionLedger,
    events: Vec<RewardsEvent>,
    /// Canonical-instance guard; a retired instance rejects everything
    active: bool,
}

impl RewardsPool {
    pub fn new(genesis_start: u64) -> Self {
        Self {
            clock: IntervalClock::new(genesis_start),
            ledger: SubmissionLedger::new(),
            events: Vec::new(),
            active: true,
        }
    }

    /// Index the next valid submission must target
    pub fn current_index(&self) -> u64 {
        self.clock.current_index()
    }

    pub fn interval_start(&self) -> u64 {
        self.clock.interval_start()
    }

    pub fn interval_duration<C: RewardsSettings>(&self, ctx: &C) -> u64 {
        ctx.interval_duration()
    }

    pub fn intervals_elapsed<C: RewardsSettings>(&self, ctx: &C, now: u64) -> u64 {
        self.clock.intervals_elapsed(now, ctx.interval_duration())
    }

    /// BCN currently escrowed for this pool
    pub fn bcn_balance<C: Vault>(&self, ctx: &C) -> Amount {
        ctx.balance_of(REWARDS_POOL_TAG, Asset::Bcn)
    }

    /// Distributable BCN: escrowed balance plus unsettled inflation
    pub fn pending_bcn<C: Vault + GovernanceToken>(&self, ctx: &C, now: u64) -> Amount {
        pending::pending_bcn(ctx, now)
    }

    /// Distributable native value
    pub fn pending_native<C: ValuePool>(&self, ctx: &C) -> Amount {
        pending::pending_native(ctx)
    }

    pub fn claimer_percentage<C: RewardsSettings>(&self, ctx: &C, claimer: &str) -> u64 {
        ctx.claimer_percentage(claimer)
    }

    pub fn claimer_percentages<C: RewardsSettings>(&self, ctx: &C, claimers: &[&str]) -> Vec<u64> {
        claimers
            .iter()
            .map(|claimer| ctx.claimer_percentage(claimer))
            .collect()
    }

    /// Whether an oracle has submitted anything for an interval.
    /// Reporting only; it does not block further submissions.
    pub fn has_voted(&self, oracle: &str, reward_index: u64) -> bool {
        self.ledger.has_voted_in_interval(oracle, reward_index)
    }

    pub fn vote_count(&self, submission: &RewardSubmission) -> u64 {
        self.ledger.vote_count(&submission.digest())
    }

    pub fn events(&self) -> &[RewardsEvent] {
        &self.events
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Retire this instance; all further submissions and executions fail
    pub fn retire(&mut self) {
        self.active = false;
    }

    /// Record one oracle's reward submission; executes the snapshot
    /// immediately if this vote reaches consensus
    pub fn submit<C: Collaborators>(
        &mut self,
        ctx: &mut C,
        oracle: &str,
        submission: &RewardSubmission,
        now: u64,
    ) -> Result<SubmitOutcome> {
        if !self.active {
            return Err(RewardsError::InactivePool);
        }
        if !ctx.submissions_enabled() {
            return Err(RewardsError::SubmissionsDisabled);
        }
        if !ctx.is_member(oracle) {
            return Err(RewardsError::NotTrustedOracle(oracle.to_string()));
        }
        RewardCalculator::validate(submission, self.clock.current_index())?;
        RewardCalculator::check_availability(submission, ctx, now)?;

        let digest = submission.digest();
        let ledger_before = self.ledger.clone();
        let events_before = self.events.len();

        let votes = self.ledger.record_vote(oracle, &digest, submission.reward_index)?;
        self.events.push(RewardsEvent::VoteRecorded {
            oracle: oracle.to_string(),
            reward_index: submission.reward_index,
            digest,
            submission: submission.clone(),
            timestamp: now,
        });
        debug!(
            "vote recorded: oracle={} interval={} votes={}",
            oracle, submission.reward_index, votes
        );

        // Consensus is evaluated against the live trusted-set size and
        // threshold, not values cached at any earlier submission.
        if consensus::has_consensus(votes, ctx.member_count(), ctx.consensus_threshold()) {
            if let Err(e) = self.execute_snapshot(ctx, submission, now) {
                // The whole call is atomic: a failed execution takes the
                // triggering vote and its event with it.
                self.ledger = ledger_before;
                self.events.truncate(events_before);
                return Err(e);
            }
            return Ok(SubmitOutcome {
                votes,
                executed: true,
            });
        }

        Ok(SubmitOutcome {
            votes,
            executed: false,
        })
    }

    /// Finalize a submission that already has consensus. Callable by
    /// anyone; the vote count and trusted-set parameters are re-read
    /// fresh, since membership or threshold may have changed since the
    /// votes were cast.
    pub fn execute<C: Collaborators>(
        &mut self,
        ctx: &mut C,
        submission: &RewardSubmission,
        now: u64,
    ) -> Result<ExecutedSnapshot> {
        if !self.active {
            return Err(RewardsError::InactivePool);
        }
        RewardCalculator::validate(submission, self.clock.current_index())?;

        let votes = self.ledger.vote_count(&submission.digest());
        let members = ctx.member_count();
        if !consensus::has_consensus(votes, members, ctx.consensus_threshold()) {
            return Err(RewardsError::ConsensusNotReached { votes, members });
        }

        self.execute_snapshot(ctx, submission, now)
    }

    /// Resolve everything fallible that does not move funds: totals and
    /// the relay address for every network with a non-zero payout
    fn payout_plan<C: Collaborators>(
        &self,
        ctx: &C,
        submission: &RewardSubmission,
    ) -> Result<PayoutPlan> {
        let total_bcn = RewardCalculator::total_bcn(submission)?;
        let total_native = RewardCalculator::total_native(submission)?;

        let mut relays = Vec::new();
        for index in 0..submission.network_count() {
            let network = index as u64;
            let bcn = RewardCalculator::network_bcn(submission, index)?;
            let native = submission.node_native[index];
            if bcn == 0 && native == 0 {
                continue;
            }
            let address = ctx
                .relay_address(network)
                .ok_or(RewardsError::UnknownRelayNetwork(network))?;
            relays.push(RelayPayout {
                network,
                address,
                bcn,
                native,
            });
        }

        Ok(PayoutPlan {
            total_bcn,
            total_native,
            relays,
        })
    }

    /// Single entry point for both call paths. Stages all fund movement
    /// behind a collaborator checkpoint: any failing step restores the
    /// checkpoint and the clock, so execution runs to full completion or
    /// not at all.
    fn execute_snapshot<C: Collaborators>(
        &mut self,
        ctx: &mut C,
        submission: &RewardSubmission,
        now: u64,
    ) -> Result<ExecutedSnapshot> {
        let plan = self.payout_plan(ctx, submission)?;

        let checkpoint = ctx.checkpoint();
        let clock_before = self.clock;

        match self.apply_snapshot(ctx, submission, &plan, now) {
            Ok(executed) => {
                self.events.push(RewardsEvent::SnapshotExecuted {
                    reward_index: executed.reward_index,
                    submission: submission.clone(),
                    interval_start: executed.interval_start,
                    interval_end: executed.interval_end,
                    timestamp: now,
                });
                info!(
                    "reward snapshot executed: interval={} bcn={} native={} minted={}",
                    executed.reward_index, executed.total_bcn, executed.total_native,
                    executed.minted
                );
                Ok(executed)
            }
            Err(e) => {
                ctx.restore(checkpoint);
                self.clock = clock_before;
                warn!(
                    "reward snapshot aborted: interval={} reason={}",
                    submission.reward_index, e
                );
                Err(e)
            }
        }
    }

    fn apply_snapshot<C: Collaborators>(
        &mut self,
        ctx: &mut C,
        submission: &RewardSubmission,
        plan: &PayoutPlan,
        now: u64,
    ) -> Result<ExecutedSnapshot> {
        // Realize pending inflation first; the minted amount supersedes
        // the estimate the submission was validated against.
        let minted = ctx.settle_inflation(now);

        let interval_start = self.clock.interval_start();
        self.clock
            .advance(submission.intervals_passed, ctx.interval_duration());
        let interval_end = self.clock.interval_start();

        if submission.treasury_bcn > 0 {
            Vault::transfer(
                ctx,
                REWARDS_POOL_TAG,
                TREASURY_TAG,
                Asset::Bcn,
                submission.treasury_bcn,
            )?;
        }

        for payout in &plan.relays {
            if payout.bcn > 0 {
                Vault::withdraw_to(
                    ctx,
                    REWARDS_POOL_TAG,
                    &payout.address,
                    Asset::Bcn,
                    payout.bcn,
                )?;
            }
            if payout.native > 0 {
                ValuePool::withdraw_to(ctx, &payout.address, payout.native)?;
            }
            ctx.distribute(
                payout.network,
                submission.reward_index,
                &submission.merkle_root,
                payout.bcn,
                payout.native,
            )
            .map_err(|e| RewardsError::RelayRejected {
                network: payout.network,
                reason: e.to_string(),
            })?;
        }

        Ok(ExecutedSnapshot {
            reward_index: submission.reward_index,
            minted,
            total_bcn: plan.total_bcn,
            total_native: plan.total_native,
            interval_start,
            interval_end,
        })
    }
}
