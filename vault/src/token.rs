//! BCN token supply and inflation
//!
//! Inflation accrues linearly per schedule interval. `pending` is the
//! amount a settlement would mint right now; `settle` realizes it and
//! advances the schedule by the number of whole intervals elapsed, leaving
//! any partial interval accruing.

use beacon_core::types::Amount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationSchedule {
    /// BCN minted per schedule interval
    pub rate_per_interval: Amount,
    /// Schedule interval length in seconds
    pub interval_secs: u64,
    /// Unix time up to which inflation has been settled
    pub last_settled: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplyStats {
    pub total_minted: Amount,
    pub circulating_supply: Amount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BcnToken {
    schedule: InflationSchedule,
    stats: SupplyStats,
}

impl BcnToken {
    pub fn new(schedule: InflationSchedule) -> Self {
        Self {
            schedule,
            stats: SupplyStats::default(),
        }
    }

    /// Amount a settlement at `now` would mint
    pub fn pending(&self, now: u64) -> Amount {
        if self.schedule.interval_secs == 0 || now <= self.schedule.last_settled {
            return 0;
        }
        let elapsed = now - self.schedule.last_settled;
        (elapsed / self.schedule.interval_secs) * self.schedule.rate_per_interval
    }

    /// Realize pending inflation; returns the minted amount
    pub fn settle(&mut self, now: u64) -> Amount {
        let minted = self.pending(now);
        if minted > 0 {
            let intervals = (now - self.schedule.last_settled) / self.schedule.interval_secs;
            self.schedule.last_settled += intervals * self.schedule.interval_secs;
            self.stats.total_minted += minted;
            self.stats.circulating_supply += minted;
        }
        minted
    }

    pub fn schedule(&self) -> &InflationSchedule {
        &self.schedule
    }

    pub fn stats(&self) -> &SupplyStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> BcnToken {
        BcnToken::new(InflationSchedule {
            rate_per_interval: 100,
            interval_secs: 60,
            last_settled: 1000,
        })
    }

    #[test]
    fn test_pending_accrual() {
        let token = token();
        assert_eq!(token.pending(1000), 0);
        assert_eq!(token.pending(1059), 0);
        assert_eq!(token.pending(1060), 100);
        assert_eq!(token.pending(1185), 300);
    }

    #[test]
    fn test_settle_advances_schedule() {
        let mut token = token();

        // 3 whole intervals plus 5 seconds of partial accrual
        assert_eq!(token.settle(1185), 300);
        assert_eq!(token.schedule().last_settled, 1180);
        assert_eq!(token.stats().total_minted, 300);

        // Partial interval keeps accruing from the new anchor
        assert_eq!(token.pending(1239), 0);
        assert_eq!(token.pending(1240), 100);
    }

    #[test]
    fn test_settle_without_accrual() {
        let mut token = token();
        assert_eq!(token.settle(1030), 0);
        assert_eq!(token.schedule().last_settled, 1000);
        assert_eq!(token.stats().total_minted, 0);
    }
}
