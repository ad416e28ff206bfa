//! Beacon Network custody
//!
//! In-memory custody collaborators for the rewards subsystem:
//! - the escrow vault holding balances per holder tag and asset
//! - the BCN token ledger with its inflation schedule
//! - the native value pool awaiting distribution
//!
//! Funds only leave custody through the payout executor in the `rewards`
//! crate.

pub mod escrow;
pub mod token;
pub mod value_pool;

pub use escrow::{Escrow, VaultTransaction, VaultTxKind};
pub use token::{BcnToken, InflationSchedule, SupplyStats};
pub use value_pool::NativePool;

pub use beacon_core::error::VaultError;

pub type Result<T> = std::result::Result<T, VaultError>;
