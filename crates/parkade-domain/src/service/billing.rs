//! Billing strategies
//!
//! A strategy is a plain value chosen at park time and carried on the ticket.
//! Elapsed time is counted in the same hour ticks the caller supplies, and
//! every stay is billed for at least one unit.

use std::fmt;

use parkade_types::{BillingKind, Fee, Timestamp};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOURLY_RATE: Fee = 10;
pub const DEFAULT_DAILY_RATE: Fee = 100;
pub const HOURS_PER_DAY: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BillingStrategy {
    /// `max(1, hours) * rate`
    Hourly { rate: Fee },
    /// `max(1, hours / 24) * rate`, with truncating division
    Daily { rate: Fee },
}

impl BillingStrategy {
    pub fn hourly() -> Self {
        BillingStrategy::Hourly {
            rate: DEFAULT_HOURLY_RATE,
        }
    }

    pub fn daily() -> Self {
        BillingStrategy::Daily {
            rate: DEFAULT_DAILY_RATE,
        }
    }

    pub fn kind(&self) -> BillingKind {
        match self {
            BillingStrategy::Hourly { .. } => BillingKind::Hourly,
            BillingStrategy::Daily { .. } => BillingKind::Daily,
        }
    }

    pub fn calculate_fee(&self, entry: Timestamp, exit: Timestamp) -> Fee {
        let elapsed = exit.saturating_sub(entry);
        let (units, rate) = match *self {
            BillingStrategy::Hourly { rate } => (elapsed, rate),
            BillingStrategy::Daily { rate } => (elapsed / HOURS_PER_DAY, rate),
        };
        (units.max(1) as Fee).saturating_mul(rate)
    }
}

impl fmt::Display for BillingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillingStrategy::Hourly { rate } => write!(f, "hourly ({rate}/hour)"),
            BillingStrategy::Daily { rate } => write!(f, "daily ({rate}/day)"),
        }
    }
}

/// Configured rates, one per billing kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingRates {
    #[serde(default = "default_hourly_rate")]
    pub hourly: Fee,
    #[serde(default = "default_daily_rate")]
    pub daily: Fee,
}

fn default_hourly_rate() -> Fee {
    DEFAULT_HOURLY_RATE
}

fn default_daily_rate() -> Fee {
    DEFAULT_DAILY_RATE
}

impl Default for BillingRates {
    fn default() -> Self {
        Self {
            hourly: DEFAULT_HOURLY_RATE,
            daily: DEFAULT_DAILY_RATE,
        }
    }
}

impl BillingRates {
    pub fn strategy(&self, kind: BillingKind) -> BillingStrategy {
        match kind {
            BillingKind::Hourly => BillingStrategy::Hourly { rate: self.hourly },
            BillingKind::Daily => BillingStrategy::Daily { rate: self.daily },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_reference_fees() {
        assert_eq!(BillingStrategy::hourly().calculate_fee(1, 4), 30);
        assert_eq!(BillingStrategy::hourly().calculate_fee(2, 6), 40);
    }

    #[test]
    fn test_daily_reference_fee() {
        assert_eq!(BillingStrategy::daily().calculate_fee(5, 29), 100);
        assert_eq!(BillingStrategy::daily().calculate_fee(0, 72), 300);
    }

    #[test]
    fn test_hourly_floor_on_zero_stay() {
        assert_eq!(BillingStrategy::hourly().calculate_fee(7, 7), 10);
    }

    #[test]
    fn test_hourly_floor_when_exit_precedes_entry() {
        assert_eq!(BillingStrategy::hourly().calculate_fee(10, 3), 10);
    }

    #[test]
    fn test_daily_floor_under_one_day() {
        assert_eq!(BillingStrategy::daily().calculate_fee(0, 23), 100);
        assert_eq!(BillingStrategy::daily().calculate_fee(0, 47), 100);
        assert_eq!(BillingStrategy::daily().calculate_fee(30, 0), 100);
    }

    #[test]
    fn test_extreme_instants_saturate() {
        let fee = BillingStrategy::hourly().calculate_fee(i64::MIN, i64::MAX);
        assert_eq!(fee, Fee::MAX);
    }

    #[test]
    fn test_rates_produce_strategy() {
        let rates = BillingRates {
            hourly: 15,
            daily: 120,
        };
        assert_eq!(rates.strategy(BillingKind::Hourly).calculate_fee(0, 2), 30);
        assert_eq!(rates.strategy(BillingKind::Daily).kind(), BillingKind::Daily);
    }

    #[test]
    fn test_strategy_serde_is_tagged() {
        let json = serde_json::to_string(&BillingStrategy::daily()).unwrap();
        assert_eq!(json, r#"{"kind":"daily","rate":100}"#);
        let rates: BillingRates = serde_json::from_str(r#"{"hourly": 12}"#).unwrap();
        assert_eq!(rates.daily, DEFAULT_DAILY_RATE);
    }
}
