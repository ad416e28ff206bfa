//! Native value pool
//!
//! Holds incoming native-asset value until a reward snapshot distributes
//! it to relays. Where the value comes from is not this subsystem's
//! concern; only the live balance matters.

use beacon_core::error::VaultError;
use beacon_core::traits::ValuePool;
use beacon_core::types::Amount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NativePool {
    balance: Amount,
    total_received: Amount,
    total_withdrawn: Amount,
}

impl NativePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deposit(&mut self, amount: Amount) {
        self.balance += amount;
        self.total_received += amount;
    }

    pub fn total_received(&self) -> Amount {
        self.total_received
    }

    pub fn total_withdrawn(&self) -> Amount {
        self.total_withdrawn
    }
}

impl ValuePool for NativePool {
    fn balance(&self) -> Amount {
        self.balance
    }

    fn withdraw_to(&mut self, _address: &str, amount: Amount) -> Result<(), VaultError> {
        if self.balance < amount {
            return Err(VaultError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.total_withdrawn += amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_withdraw() {
        let mut pool = NativePool::new();
        pool.deposit(200);
        assert_eq!(pool.balance(), 200);

        pool.withdraw_to("addr-1", 150).unwrap();
        assert_eq!(pool.balance(), 50);
        assert_eq!(pool.total_withdrawn(), 150);
    }

    #[test]
    fn test_overdraw_rejected() {
        let mut pool = NativePool::new();
        pool.deposit(10);

        let err = pool.withdraw_to("addr-1", 11).unwrap_err();
        assert_eq!(
            err,
            VaultError::InsufficientBalance {
                requested: 11,
                available: 10
            }
        );
        assert_eq!(pool.balance(), 10);
    }
}
