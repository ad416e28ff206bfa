//! Beacon Network core types
//!
//! Shared value types, fixed-point constants, and the collaborator
//! interfaces consumed by the rewards subsystem: trusted oracle set,
//! network/rewards settings, escrow vault, governance token, value pool,
//! and relay endpoints.

pub mod constants;
pub mod error;
pub mod registry;
pub mod settings;
pub mod time;
pub mod traits;
pub mod types;

pub use constants::{BCN_UNIT, FRACTION_SCALE, REWARDS_POOL_TAG, TREASURY_TAG};
pub use error::{RelayError, VaultError};
pub use registry::OracleRegistry;
pub use settings::{StaticNetworkSettings, StaticRewardsSettings};
pub use traits::{
    Checkpointed, GovernanceToken, NetworkSettings, RelayRegistry, RewardsSettings,
    TrustedOracleSet, ValuePool, Vault,
};
pub use types::{Address, Amount, Asset};
