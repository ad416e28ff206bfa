//! Escrow vault
//!
//! Balances are keyed by (holder tag, asset). Holder tags name subsystem
//! accounts ("rewards-pool", "treasury"); withdrawals pay out to external
//! addresses. Every movement is recorded in the audit trail.

use beacon_core::error::VaultError;
use beacon_core::traits::Vault;
use beacon_core::types::{Amount, Asset};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaultTxKind {
    Deposit,
    Transfer,
    Withdrawal,
}

/// One row of the escrow audit trail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultTransaction {
    pub kind: VaultTxKind,
    pub asset: Asset,
    pub amount: Amount,
    /// Source holder tag; None for deposits from outside
    pub from: Option<String>,
    /// Destination holder tag, or external address for withdrawals
    pub to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Escrow {
    balances: HashMap<(String, Asset), Amount>,
    history: Vec<VaultTransaction>,
}

impl Escrow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Credit a holder tag from outside the vault
    pub fn deposit(&mut self, holder: &str, asset: Asset, amount: Amount) {
        *self.balances.entry((holder.to_string(), asset)).or_insert(0) += amount;
        self.history.push(VaultTransaction {
            kind: VaultTxKind::Deposit,
            asset,
            amount,
            from: None,
            to: holder.to_string(),
        });
    }

    pub fn history(&self) -> &[VaultTransaction] {
        &self.history
    }

    /// Total vault balance of an asset across all holders
    pub fn total_balance(&self, asset: Asset) -> Amount {
        self.balances
            .iter()
            .filter(|((_, a), _)| *a == asset)
            .map(|(_, amount)| amount)
            .sum()
    }

    fn debit(&mut self, holder: &str, asset: Asset, amount: Amount) -> Result<(), VaultError> {
        let balance = self
            .balances
            .get_mut(&(holder.to_string(), asset))
            .ok_or_else(|| VaultError::UnknownHolder(holder.to_string()))?;
        if *balance < amount {
            return Err(VaultError::InsufficientBalance {
                requested: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        Ok(())
    }
}

impl Vault for Escrow {
    fn balance_of(&self, holder: &str, asset: Asset) -> Amount {
        self.balances
            .get(&(holder.to_string(), asset))
            .copied()
            .unwrap_or(0)
    }

    fn transfer(
        &mut self,
        from: &str,
        to: &str,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), VaultError> {
        self.debit(from, asset, amount)?;
        *self.balances.entry((to.to_string(), asset)).or_insert(0) += amount;
        self.history.push(VaultTransaction {
            kind: VaultTxKind::Transfer,
            asset,
            amount,
            from: Some(from.to_string()),
            to: to.to_string(),
        });
        Ok(())
    }

    fn withdraw_to(
        &mut self,
        from: &str,
        address: &str,
        asset: Asset,
        amount: Amount,
    ) -> Result<(), VaultError> {
        self.debit(from, asset, amount)?;
        self.history.push(VaultTransaction {
            kind: VaultTxKind::Withdrawal,
            asset,
            amount,
            from: Some(from.to_string()),
            to: address.to_string(),
        });
        Ok(())
    }
}
