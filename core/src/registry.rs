//! Trusted oracle registry

use crate::traits::TrustedOracleSet;
use crate::types::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Membership record for a trusted oracle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleInfo {
    pub added_at: u64,
}

/// Registry of the trusted oracle set
///
/// Membership changes are governed outside the rewards subsystem; the
/// registry only tracks who is currently trusted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OracleRegistry {
    members: HashMap<Address, OracleInfo>,
}

impl OracleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trusted oracle; returns false if it was already a member
    pub fn add(&mut self, address: impl Into<Address>, now: u64) -> bool {
        self.members
            .insert(address.into(), OracleInfo { added_at: now })
            .is_none()
    }

    /// Remove a trusted oracle; returns false if it was not a member
    pub fn remove(&mut self, address: &str) -> bool {
        self.members.remove(address).is_some()
    }

    pub fn members(&self) -> impl Iterator<Item = &Address> {
        self.members.keys()
    }
}

impl TrustedOracleSet for OracleRegistry {
    fn member_count(&self) -> u64 {
        self.members.len() as u64
    }

    fn is_member(&self, address: &str) -> bool {
        self.members.contains_key(address)
    }
}
