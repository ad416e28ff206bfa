//! In-memory settings providers
//!
//! Static settings structs backing the [`NetworkSettings`] and
//! [`RewardsSettings`] interfaces. Governance of these values lives
//! outside the subsystem; here they are plain data, loadable from JSON.

use crate::constants::{DEFAULT_CONSENSUS_THRESHOLD, DEFAULT_INTERVAL_SECS};
use crate::traits::{NetworkSettings, RewardsSettings};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Network-level switches and consensus parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticNetworkSettings {
    pub submissions_enabled: bool,
    /// Parts per [`crate::FRACTION_SCALE`]
    pub consensus_threshold: u64,
}

impl StaticNetworkSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for StaticNetworkSettings {
    fn default() -> Self {
        Self {
            submissions_enabled: true,
            consensus_threshold: DEFAULT_CONSENSUS_THRESHOLD,
        }
    }
}

impl NetworkSettings for StaticNetworkSettings {
    fn submissions_enabled(&self) -> bool {
        self.submissions_enabled
    }

    fn consensus_threshold(&self) -> u64 {
        self.consensus_threshold
    }
}

/// Reward accounting parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticRewardsSettings {
    /// Seconds per reward interval
    pub interval_duration: u64,
    /// Claimer name -> share in parts per [`crate::FRACTION_SCALE`]
    pub claimer_percentages: HashMap<String, u64>,
}

impl StaticRewardsSettings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn set_claimer_percentage(&mut self, claimer: impl Into<String>, fraction: u64) {
        self.claimer_percentages.insert(claimer.into(), fraction);
    }
}

impl Default for StaticRewardsSettings {
    fn default() -> Self {
        Self {
            interval_duration: DEFAULT_INTERVAL_SECS,
            claimer_percentages: HashMap::new(),
        }
    }
}

impl RewardsSettings for StaticRewardsSettings {
    fn interval_duration(&self) -> u64 {
        self.interval_duration
    }

    fn claimer_percentage(&self, claimer: &str) -> u64 {
        self.claimer_percentages.get(claimer).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let network = StaticNetworkSettings::default();
        assert!(network.submissions_enabled());
        assert_eq!(network.consensus_threshold(), DEFAULT_CONSENSUS_THRESHOLD);

        let rewards = StaticRewardsSettings::default();
        assert_eq!(rewards.interval_duration(), DEFAULT_INTERVAL_SECS);
        assert_eq!(rewards.claimer_percentage("node"), 0);
    }

    #[test]
    fn test_from_json() {
        let network =
            StaticNetworkSettings::from_json(r#"{"submissions_enabled":false,"consensus_threshold":510000}"#)
                .unwrap();
        assert!(!network.submissions_enabled());
        assert_eq!(network.consensus_threshold(), 510_000);

        let rewards = StaticRewardsSettings::from_json(
            r#"{"interval_duration":3600,"claimer_percentages":{"node":700000,"treasury":300000}}"#,
        )
        .unwrap();
        assert_eq!(rewards.interval_duration(), 3600);
        assert_eq!(rewards.claimer_percentage("node"), 700_000);
        assert_eq!(rewards.claimer_percentage("unknown"), 0);
    }
}
