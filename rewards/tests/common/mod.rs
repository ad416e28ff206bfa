//! Shared harness: an in-memory network implementing every collaborator
//! interface the rewards pool consumes.

#![allow(dead_code)]

use beacon_core::error::{RelayError, VaultError};
use beacon_core::traits::{
    Checkpointed, GovernanceToken, NetworkSettings, RelayRegistry, RewardsSettings,
    TrustedOracleSet, ValuePool, Vault,
};
use beacon_core::types::{Address, Amount, Asset};
use beacon_core::{OracleRegistry, StaticNetworkSettings, StaticRewardsSettings, REWARDS_POOL_TAG};
use rewards::RewardSubmission;
use std::collections::HashMap;
use vault::{BcnToken, Escrow, InflationSchedule, NativePool};

/// One relay endpoint: its registered address and every distribution it
/// has received as (reward_index, merkle_root, bcn, native)
#[derive(Debug, Clone)]
pub struct RelayEndpoint {
    pub address: Address,
    pub received: Vec<(u64, String, Amount, Amount)>,
    pub reject: bool,
}

impl RelayEndpoint {
    pub fn new(address: impl Into<Address>) -> Self {
        Self {
            address: address.into(),
            received: Vec::new(),
            reject: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TestNetwork {
    pub oracles: OracleRegistry,
    pub network_settings: StaticNetworkSettings,
    pub rewards_settings: StaticRewardsSettings,
    pub escrow: Escrow,
    pub token: BcnToken,
    pub value_pool: NativePool,
    pub relays: HashMap<u64, RelayEndpoint>,
}

impl TestNetwork {
    /// Network with the given trusted oracles, a 2/3 threshold, one-hour
    /// intervals, no inflation accruing, and relay 0 registered
    pub fn with_oracles(oracle_addresses: &[&str]) -> Self {
        let mut oracles = OracleRegistry::new();
        for address in oracle_addresses {
            oracles.add(*address, 0);
        }

        let mut relays = HashMap::new();
        relays.insert(0, RelayEndpoint::new("relay-0"));

        Self {
            oracles,
            network_settings: StaticNetworkSettings {
                submissions_enabled: true,
                consensus_threshold: 666_666,
            },
            rewards_settings: StaticRewardsSettings {
                interval_duration: 3600,
                claimer_percentages: HashMap::new(),
            },
            escrow: Escrow::new(),
            token: BcnToken::new(InflationSchedule {
                rate_per_interval: 0,
                interval_secs: 3600,
                last_settled: 0,
            }),
            value_pool: NativePool::new(),
            relays,
        }
    }

    pub fn fund_bcn(&mut self, amount: Amount) {
        self.escrow.deposit(REWARDS_POOL_TAG, Asset::Bcn, amount);
    }

    pub fn fund_native(&mut self, amount: Amount) {
        self.value_pool.deposit(amount);
    }

    pub fn add_relay(&mut self, network: u64, address: &str) {
        self.relays.insert(network, RelayEndpoint::new(address));
    }

    pub fn relay(&self, network: u64) -> &RelayEndpoint {
        &self.relays[&network]
    }
}

impl TrustedOracleSet for TestNetwork {
    fn member_count(&self) -> u64 {
        self.oracles.member_count()
    }

    fn is_member(&self, address: &str) -> bool {
        self.oracles.is_member(address)
    }
}

impl NetworkSettings for TestNetwork {
    fn submissions_enabled(&self) -> bool {
        self.network_settings.submissions_enabled()
    }

    fn consensus_threshold(&self) -> u64 {
        self.network_settings.consensus_threshold()
    }
}

impl RewardsSettings for TestNetwork {
    fn interval_duration(&self) -> u64 {
        self.rewards_settings.interval_duration()
    }

    fn claimer_percentage(&self, claimer: &str) -> u64 {
        self.rewards_settings.claimer_percentage(claimer)
    }
}

impl Vault for TestNetwork {
    fn balance_of(&self, holder: &str, asset: Asset) -> Amount {
        self.escrow.balance_of(holder, asset)
    }

    fn transfer(
        &mut self,
        from: &str,
        to: &str,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), VaultError> {
        self.escrow.transfer(from, to, asset, amount)
    }

    fn withdraw_to(
        &mut self,
        from: &str,
        address: &str,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), VaultError> {
        self.escrow.withdraw_to(from, address, asset, amount)
    }
}

impl GovernanceToken for TestNetwork {
    fn pending_inflation(&self, now: u64) -> Amount {
        self.token.pending(now)
    }

    fn settle_inflation(&mut self, now: u64) -> Amount {
        let minted = self.token.settle(now);
        if minted > 0 {
            self.escrow.deposit(REWARDS_POOL_TAG, Asset::Bcn, minted);
        }
        minted
    }
}

impl ValuePool for TestNetwork {
    fn balance(&self) -> Amount {
        self.value_pool.balance()
    }

    fn withdraw_to(&mut self, address: &str, amount: Amount) -> Result<(), VaultError> {
        self.value_pool.withdraw_to(address, amount)
    }
}

impl RelayRegistry for TestNetwork {
    fn relay_address(&self, network: u64) -> Option<Address> {
        self.relays.get(&network).map(|relay| relay.address.clone())
    }

    fn distribute(
        &mut self,
        network: u64,
        reward_index: u64,
        merkle_root: &str,
        bcn: Amount,
        native: Amount,
    ) -> Result<(), RelayError> {
        let relay = self
            .relays
            .get_mut(&network)
            .ok_or_else(|| RelayError::Rejected(format!("no relay for network {}", network)))?;
        if relay.reject {
            return Err(RelayError::Rejected("relay offline".to_string()));
        }
        relay
            .received
            .push((reward_index, merkle_root.to_string(), bcn, native));
        Ok(())
    }
}

impl Checkpointed for TestNetwork {
    type Snapshot = TestNetwork;

    fn checkpoint(&self) -> TestNetwork {
        self.clone()
    }

    fn restore(&mut self, snapshot: TestNetwork) {
        *self = snapshot;
    }
}

/// The submission from the reference scenario: one relay network,
/// 50 BCN to its nodes, 100 BCN to the treasury
pub fn sample_submission() -> RewardSubmission {
    RewardSubmission {
        reward_index: 0,
        intervals_passed: 1,
        merkle_root: "ab".repeat(32),
        node_bcn: vec![50],
        trusted_node_bcn: vec![0],
        node_native: vec![0],
        treasury_bcn: 100,
    }
}
